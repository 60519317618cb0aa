//! The decision vocabulary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Textual form of [`Decision::Allowed`].
pub const ALLOWED: &str = "allowed";
/// Textual form of [`Decision::Deny`].
pub const DENY: &str = "deny";
/// Textual form of [`Decision::NoOpinion`].
///
/// Plain strings equal to this value compare equal to the typed variant.
pub const NO_OPINION: &str = "no opinion";

/// Outcome of an authorization check.
///
/// The textual forms are fixed and survive serialization verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    /// The authorizer has determined the action is allowed.
    #[serde(rename = "allowed")]
    Allowed,
    /// The authorizer has determined the action is not allowed.
    #[serde(rename = "deny")]
    Deny,
    /// The authorizer has no opinion. This means the action is not allowed
    /// unless some other authorizer allows it.
    #[serde(rename = "no opinion")]
    NoOpinion,
}

impl Decision {
    pub const ALL: [Decision; 3] = [Decision::Allowed, Decision::Deny, Decision::NoOpinion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allowed => ALLOWED,
            Decision::Deny => DENY,
            Decision::NoOpinion => NO_OPINION,
        }
    }

    /// Only `Allowed` permits an action.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }

    /// `Allowed` or `Deny`; an authorizer actually ruled.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Decision::NoOpinion)
    }

    /// Fold decisions from several authorizers into one verdict.
    ///
    /// The first decisive decision wins. An empty set, or one where every
    /// authorizer abstained, resolves to `NoOpinion`.
    pub fn resolve<I>(decisions: I) -> Decision
    where
        I: IntoIterator<Item = Decision>,
    {
        decisions
            .into_iter()
            .find(Decision::is_decisive)
            .unwrap_or(Decision::NoOpinion)
    }
}

impl FromIterator<Decision> for Decision {
    fn from_iter<T: IntoIterator<Item = Decision>>(iter: T) -> Self {
        Decision::resolve(iter)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ALLOWED => Ok(Decision::Allowed),
            DENY => Ok(Decision::Deny),
            NO_OPINION => Ok(Decision::NoOpinion),
            other => Err(Error::UnknownDecision(other.to_string())),
        }
    }
}

impl AsRef<str> for Decision {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Decision {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Decision {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Decision {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<Decision> for str {
    fn eq(&self, other: &Decision) -> bool {
        other == self
    }
}

impl PartialEq<Decision> for &str {
    fn eq(&self, other: &Decision) -> bool {
        other == self
    }
}

impl PartialEq<Decision> for String {
    fn eq(&self, other: &Decision) -> bool {
        other == self
    }
}
