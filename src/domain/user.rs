// src/domain/user.rs
//
// User Entity
//
// Credentials arrive already hashed from the ingestion boundary.
// Reviews are append-only from the catalog's point of view.

use serde::{Deserialize, Serialize};

use crate::domain::{required_name, DomainResult, ReviewId};

/// Opaque, already-hashed password credential
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the credential
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// A registered user; the username is the unique key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    username: String,

    password: PasswordHash,

    /// Authored reviews, in the order they were added
    reviews: Vec<ReviewId>,
}

impl User {
    /// Create a new User
    pub fn new(username: &str, password: PasswordHash) -> DomainResult<Self> {
        Ok(Self {
            username: required_name(username, "Username")?,
            password,
            reviews: Vec::new(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &PasswordHash {
        &self.password
    }

    pub fn reviews(&self) -> &[ReviewId] {
        &self.reviews
    }

    pub(crate) fn add_review(&mut self, review: ReviewId) {
        self.reviews.push(review);
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User {}>", self.username)
    }
}
