//! Mapping access-review outcomes onto the decision vocabulary.
//!
//! Cluster-backed authorizers submit a review for the user and read back two
//! independent flags. This module turns that status into a [`Decision`].

use serde::{Deserialize, Serialize};

use crate::{Decision, Error, Result};

/// Status returned by an access review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub allowed: bool,

    #[serde(default)]
    pub denied: bool,

    /// Free-text explanation from the reviewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Review {
    pub fn allowed() -> Self {
        Self {
            allowed: true,
            ..Default::default()
        }
    }

    pub fn denied() -> Self {
        Self {
            denied: true,
            ..Default::default()
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// A review that both allows and denies is an error; it fails closed.
    pub fn decision(&self) -> Result<Decision> {
        match (self.allowed, self.denied) {
            (true, true) => Err(Error::ConflictingReview),
            (_, true) => Ok(Decision::Deny),
            (true, _) => Ok(Decision::Allowed),
            (false, false) => Ok(Decision::NoOpinion),
        }
    }
}

impl TryFrom<&Review> for Decision {
    type Error = Error;

    fn try_from(review: &Review) -> Result<Self> {
        review.decision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_mapping() {
        assert_eq!(Review::allowed().decision().unwrap(), Decision::Allowed);
        assert_eq!(Review::denied().decision().unwrap(), Decision::Deny);
        assert_eq!(Review::default().decision().unwrap(), Decision::NoOpinion);
    }

    #[test]
    fn test_conflicting_review_fails() {
        let review = Review {
            allowed: true,
            denied: true,
            reason: None,
        };
        assert!(matches!(review.decision(), Err(Error::ConflictingReview)));
        assert!(Decision::try_from(&review).is_err());
    }

    #[test]
    fn test_parse_review_status() {
        let review: Review =
            serde_json::from_str(r#"{"denied":true,"reason":"no RBAC policy matched"}"#).unwrap();
        assert_eq!(review, Review::denied().with_reason("no RBAC policy matched"));
        assert_eq!(Decision::try_from(&review).unwrap(), Decision::Deny);
    }
}
