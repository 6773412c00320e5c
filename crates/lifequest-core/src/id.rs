//! Identity type for instance entities
//!
//! Log entries, goals, quests, and archived records carry a numeric id
//! allocated from a monotone counter on the state. Catalog entries
//! (buffs, achievements, shop items) use string slugs instead.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an instance entity within one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Id(pub u64);

impl Id {
    /// Create a new id
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw id value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id() {
        let id = Id::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "#42");
    }
}
