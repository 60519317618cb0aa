//! The user capability.

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Anything that can report a username.
///
/// The name is opaque: no normalization or case-folding is applied. The
/// accessor must return the same value on every call and must be safe to
/// call from anywhere the user is held, since authorizers call it while
/// ruling.
pub trait User {
    fn username(&self) -> Cow<'_, str>;
}

impl User for str {
    fn username(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl User for String {
    fn username(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl<U: User + ?Sized> User for &U {
    fn username(&self) -> Cow<'_, str> {
        (**self).username()
    }
}

impl<U: User + ?Sized> User for Box<U> {
    fn username(&self) -> Cow<'_, str> {
        (**self).username()
    }
}

impl<U: User + ?Sized> User for Arc<U> {
    fn username(&self) -> Cow<'_, str> {
        (**self).username()
    }
}

/// Identity record handed to authorizers by the bundle runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,

    /// Stable identifier from the identity provider, when it issues one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

impl UserInfo {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }
}

impl User for UserInfo {
    fn username(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.username)
    }
}
