//! Ordered combination of authorizers.

use tracing::debug;

use crate::{Authorizer, Decision, Result, User};

/// Asks each member authorizer in turn.
///
/// The first `allowed` or `deny` is the verdict. `no opinion` passes the
/// request to the next member. When every member abstains, or the chain is
/// empty, the chain itself has no opinion, which callers treat as not
/// allowed. A member failure ends the walk and is returned unchanged.
#[derive(Default)]
pub struct Chain {
    members: Vec<Box<dyn Authorizer>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an authorizer; it is consulted after all earlier members.
    pub fn with(mut self, authorizer: impl Authorizer + 'static) -> Self {
        self.push(authorizer);
        self
    }

    pub fn push(&mut self, authorizer: impl Authorizer + 'static) {
        self.members.push(Box::new(authorizer));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Convenience for callers that only need a yes/no answer.
    pub fn permits(&self, user: &dyn User, action: &str) -> Result<bool> {
        Ok(self.authorize(user, action)?.is_allowed())
    }
}

impl Authorizer for Chain {
    fn authorize(&self, user: &dyn User, action: &str) -> Result<Decision> {
        for (index, member) in self.members.iter().enumerate() {
            let decision = member.authorize(user, action)?;
            debug!(
                username = %user.username(),
                action,
                index,
                %decision,
                "authorizer ruled"
            );
            if decision.is_decisive() {
                return Ok(decision);
            }
        }
        Ok(Decision::NoOpinion)
    }
}

impl<A: Authorizer + 'static> FromIterator<A> for Chain {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut chain = Chain::new();
        for authorizer in iter {
            chain.push(authorizer);
        }
        chain
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain").field("members", &self.members.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Fixed};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts how often it was consulted.
    struct Counting {
        decision: Decision,
        calls: Arc<AtomicUsize>,
    }

    impl Authorizer for Counting {
        fn authorize(&self, _user: &dyn User, _action: &str) -> Result<Decision> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.decision)
        }
    }

    struct Unreachable;

    impl Authorizer for Unreachable {
        fn authorize(&self, _user: &dyn User, _action: &str) -> Result<Decision> {
            Err(Error::Unavailable("directory offline".to_string()))
        }
    }

    #[test]
    fn test_empty_chain_has_no_opinion() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.authorize(&"bob", "bind").unwrap(), Decision::NoOpinion);
        assert!(!chain.permits(&"bob", "bind").unwrap());
    }

    #[test]
    fn test_first_decisive_wins() {
        let chain = Chain::new()
            .with(Fixed::no_opinion())
            .with(Fixed::deny())
            .with(Fixed::allowed());
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.authorize(&"bob", "bind").unwrap(), Decision::Deny);
    }

    #[test]
    fn test_stops_after_decisive_member() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new().with(Fixed::allowed()).with(Counting {
            decision: Decision::Deny,
            calls: Arc::clone(&calls),
        });

        assert_eq!(chain.authorize(&"bob", "bind").unwrap(), Decision::Allowed);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_failure_stops_chain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = Chain::new()
            .with(Fixed::no_opinion())
            .with(Unreachable)
            .with(Counting {
                decision: Decision::Allowed,
                calls: Arc::clone(&calls),
            });

        let err = chain.authorize(&"bob", "bind").unwrap_err();
        assert!(matches!(err, Error::Unavailable(ref msg) if msg == "directory offline"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_collect_into_chain() {
        let chain: Chain = [Fixed::no_opinion(), Fixed::allowed()].into_iter().collect();
        assert!(chain.permits(&"bob", "deprovision").unwrap());
    }

    #[test]
    fn test_chains_nest() {
        let inner = Chain::new().with(Fixed::no_opinion());
        let outer = Chain::new().with(inner).with(Fixed::allowed());
        assert_eq!(outer.authorize(&"bob", "bind").unwrap(), Decision::Allowed);
    }
}
