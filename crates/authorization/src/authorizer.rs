//! The authorizer capability.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{Decision, Result, User};

/// Renders a verdict on a (user, action) pair.
///
/// `Ok` carries exactly one [`Decision`]. `Err` means no ruling was produced;
/// it is returned as-is and never retried here. Callers combining several
/// authorizers must treat [`Decision::NoOpinion`] as not allowed unless
/// another authorizer returns [`Decision::Allowed`] (see [`Chain`](crate::Chain)).
pub trait Authorizer: Send + Sync {
    /// Decide whether `user` may perform `action`.
    ///
    /// The action name is free-form. An empty name is accepted by the
    /// contract; concrete authorizers may reject it with
    /// [`Error::InvalidAction`](crate::Error::InvalidAction).
    fn authorize(&self, user: &dyn User, action: &str) -> Result<Decision>;
}

impl<A: Authorizer + ?Sized> Authorizer for &A {
    fn authorize(&self, user: &dyn User, action: &str) -> Result<Decision> {
        (**self).authorize(user, action)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for Box<A> {
    fn authorize(&self, user: &dyn User, action: &str) -> Result<Decision> {
        (**self).authorize(user, action)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for Arc<A> {
    fn authorize(&self, user: &dyn User, action: &str) -> Result<Decision> {
        (**self).authorize(user, action)
    }
}

/// An authorizer that gives the same answer for every request.
///
/// Useful for testing and for bootstrapping a chain before real
/// authorizers are wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixed(pub Decision);

impl Fixed {
    pub fn allowed() -> Self {
        Self(Decision::Allowed)
    }

    pub fn deny() -> Self {
        Self(Decision::Deny)
    }

    pub fn no_opinion() -> Self {
        Self(Decision::NoOpinion)
    }
}

impl Authorizer for Fixed {
    fn authorize(&self, _user: &dyn User, _action: &str) -> Result<Decision> {
        Ok(self.0)
    }
}
