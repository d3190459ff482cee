//! Newtype IDs for fixture records.
//!
//! Product and review identifiers are both strings in the output documents.
//! Keeping them as separate types stops a review ID from being stored where a
//! product ID belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First numeric suffix used for review IDs (`rev_<base + n>`).
pub const REVIEW_ID_BASE: usize = 1000;

/// First numeric value used for product IDs (`<base + n>`).
pub const PRODUCT_ID_BASE: usize = 123_400;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A record identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(ReviewId);

impl ProductId {
    /// ID for the `n`th product of a run (1-based).
    pub fn sequential(n: usize) -> Self {
        Self((PRODUCT_ID_BASE + n).to_string())
    }
}

impl ReviewId {
    /// ID for the `n`th review of a run (1-based).
    pub fn sequential(n: usize) -> Self {
        Self(format!("rev_{}", REVIEW_ID_BASE + n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        assert_eq!(ProductId::sequential(1).as_str(), "123401");
        assert_eq!(ProductId::sequential(120).as_str(), "123520");
        assert_eq!(ReviewId::sequential(1).as_str(), "rev_1001");
        assert_eq!(ReviewId::sequential(100).as_str(), "rev_1100");
    }

    #[test]
    fn test_id_from_string() {
        let id: ReviewId = "rev_1042".into();
        assert_eq!(id.as_str(), "rev_1042");
        assert_eq!(format!("{}", id), "rev_1042");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::sequential(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"123407\"");

        let back: ProductId = serde_json::from_str("\"123407\"").unwrap();
        assert_eq!(back, id);
    }
}
