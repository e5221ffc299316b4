//! Core Entity Trait
//!
//! Every display record has an id, a kind name used in log lines, and a
//! human-readable title.

use thiserror::Error;

/// Core trait for all display records
pub trait Entity: Sized + Clone {
    /// Short lowercase name used in log lines ("property", "contract")
    const KIND: &'static str;

    /// Returns the record's identifier
    fn id(&self) -> u32;

    /// Returns the text that identifies the record to a human
    fn title(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {kind} #{id}")]
    NotFound { kind: &'static str, id: u32 },
}

/// Look a record up by id in a view's collection
pub fn find_by_id<T: Entity>(records: &[T], id: u32) -> DomainResult<&T> {
    records
        .iter()
        .find(|record| record.id() == id)
        .ok_or(DomainError::NotFound { kind: T::KIND, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_properties;

    #[test]
    fn test_find_existing_record() {
        let properties = sample_properties();
        let found = find_by_id(&properties, 2).unwrap();
        assert_eq!(found.title(), "Casa Ploiești");
    }

    #[test]
    fn test_find_missing_record() {
        let properties = sample_properties();
        let err = find_by_id(&properties, 42).unwrap_err();
        assert_eq!(err, DomainError::NotFound { kind: "property", id: 42 });
        assert_eq!(err.to_string(), "Not found: property #42");
    }
}
