use serde::{Deserialize, Serialize};

use crate::domain::{required_name, DomainResult};

/// A movie genre; equality and order are by name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Genre {
    name: String,
}

impl Genre {
    pub fn new(name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: required_name(name, "Genre name")?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Genre {}>", self.name)
    }
}
