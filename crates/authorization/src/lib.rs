//! Authorization contract for the bundle runtime.
//!
//! The runtime asks an [`Authorizer`] whether a [`User`] may perform an
//! action, named by an opaque string. The answer is a [`Decision`]:
//! `allowed`, `deny`, or `no opinion`, or an [`Error`] when no ruling could
//! be produced.
//!
//! **`no opinion` is not a permit.** When several authorizers are combined,
//! an abstention counts as denial unless another authorizer allows the
//! action. [`Chain`] implements that rule.
//!
//! # Example
//!
//! ```
//! use authorization::{Authorizer, Chain, Decision, Fixed, UserInfo};
//!
//! let chain = Chain::new().with(Fixed::no_opinion()).with(Fixed::allowed());
//! let user = UserInfo::new("bob");
//!
//! let decision = chain.authorize(&user, "deprovision")?;
//! assert_eq!(decision, Decision::Allowed);
//! assert_eq!(decision.to_string(), "allowed");
//! # Ok::<(), authorization::Error>(())
//! ```

mod authorizer;
mod chain;
mod config;
mod decision;
mod error;
mod review;
mod user;

pub use authorizer::{Authorizer, Fixed};
pub use chain::Chain;
pub use config::{AuthorizerConfig, Config};
pub use decision::{ALLOWED, DENY, Decision, NO_OPINION};
pub use error::{Error, Result};
pub use review::Review;
pub use user::{User, UserInfo};
