//! Customer review records.

use crate::ids::ReviewId;
use serde::{Deserialize, Serialize};

/// A customer review, created once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review identifier (`rev_<n>`).
    pub review_id: ReviewId,
    /// Reviewer email.
    pub email: String,
    /// Reviewer display name.
    pub name: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Review body.
    pub review: String,
    /// Review date as `YYYY-MM-DD`.
    pub date: String,
    /// Unix timestamp of submission.
    pub timestamp: i64,
}

impl Review {
    /// Build a reviewer email from a first and last name.
    pub fn email_for(first: &str, last: &str, domain: &str) -> String {
        format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), domain)
    }
}
