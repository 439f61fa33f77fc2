//! Seam for a declarative, per-field rule engine.
//!
//! deep-check does not ship a rule engine. [`TagRules`] is the adapter a
//! caller implements (or passes a closure for) so that
//! [`validate`](crate::validate) can run those rules once, on the root,
//! before walking the graph.
//!
//! # Examples
//!
//! ```
//! use deep_check::{Failure, TagRules};
//!
//! struct Login {
//!     user: String,
//! }
//!
//! let required_user = |login: &Login| -> Result<(), Failure> {
//!     if login.user.is_empty() {
//!         Err("user: required".into())
//!     } else {
//!         Ok(())
//!     }
//! };
//!
//! assert!(required_user.check(&Login { user: "kim".into() }).is_ok());
//! assert!(required_user.check(&Login { user: String::new() }).is_err());
//! ```
use crate::types::CheckResult;

/// Applies declarative constraints to a root object.
pub trait TagRules<T: ?Sized> {
    fn check(&self, root: &T) -> CheckResult;
}

impl<T, F> TagRules<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> CheckResult,
{
    #[inline]
    fn check(&self, root: &T) -> CheckResult {
        self(root)
    }
}

/// Rule set that accepts every object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTagRules;

impl<T: ?Sized> TagRules<T> for NoTagRules {
    #[inline]
    fn check(&self, _root: &T) -> CheckResult {
        Ok(())
    }
}
