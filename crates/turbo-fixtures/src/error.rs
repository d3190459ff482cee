//! Fixture error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating, writing or loading fixtures.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Output directory could not be created or a fixture file could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file could not be read back.
    #[error("Failed to read {}: {source}", .path.display())]
    OutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON for its record type.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Every name the token pools can form has already been handed out.
    #[error("Name pool exhausted after {produced} unique names (capacity {capacity})")]
    NamePoolExhausted { produced: usize, capacity: usize },

    /// A single record violates its own invariant.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A fixture set failed verification.
    #[error("Fixture check failed with {} violation(s):\n  {}", .0.len(), .0.join("\n  "))]
    Invalid(Vec<String>),
}

impl FixtureError {
    /// Check if this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            FixtureError::OutputWrite { .. } | FixtureError::OutputRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_write_message_names_path() {
        let err = FixtureError::OutputWrite {
            path: PathBuf::from("out/products.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("out/products.json"));
        assert!(msg.contains("denied"));
        assert!(err.is_io());
    }

    #[test]
    fn test_invalid_lists_violations() {
        let err = FixtureError::Invalid(vec!["a".to_string(), "b".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("2 violation(s)"));
        assert!(msg.contains("\n  a\n  b"));
        assert!(!err.is_io());
    }
}
