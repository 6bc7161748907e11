// src/domain/actor.rs
//
// Actor Entity
//
// Actors link to movies (many-to-many, managed by the repository) and to
// other actors they worked with.

use serde::{Deserialize, Serialize};

use crate::domain::{required_name, ActorId, DomainResult, MovieId};

/// Represents an actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    name: String,

    /// Movies tagged to this actor, no duplicates
    pub(crate) tagged_movies: Vec<MovieId>,

    /// Co-appearance relation
    colleagues: Vec<ActorId>,
}

impl Actor {
    /// Create a new Actor
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: required_name(name, "Actor name")?,
            tagged_movies: Vec::new(),
            colleagues: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tagged_movies(&self) -> &[MovieId] {
        &self.tagged_movies
    }

    pub fn colleagues(&self) -> &[ActorId] {
        &self.colleagues
    }

    /// Records `colleague` once; repeated calls are no-ops
    pub fn add_colleague(&mut self, colleague: ActorId) {
        if !self.colleagues.contains(&colleague) {
            self.colleagues.push(colleague);
        }
    }

    pub fn has_worked_with(&self, colleague: ActorId) -> bool {
        self.colleagues.contains(&colleague)
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Actor {}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.name.cmp(&other.name)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Actor {}>", self.name)
    }
}
