//! The self-check capability.
//!
//! A type checks its own state either through a borrow ([`ValidateSelf`]) or
//! by value ([`ValidateSelfOwned`]). The walker finds whichever one the type
//! registered; callers never need to know which.
//!
//! # Examples
//!
//! ```
//! use deep_check::{walkable, Failure, ValidateSelf, ValidateSelfOwned};
//!
//! #[derive(Clone)]
//! struct ByValue {
//!     valid: bool,
//! }
//!
//! impl ValidateSelfOwned for ByValue {
//!     fn validate_self_owned(self) -> Result<(), Failure> {
//!         if self.valid { Ok(()) } else { Err("not valid".into()) }
//!     }
//! }
//!
//! struct ByRef {
//!     valid: bool,
//! }
//!
//! impl ValidateSelf for ByRef {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if self.valid { Ok(()) } else { Err("not valid".into()) }
//!     }
//! }
//!
//! walkable!(ByValue { valid } check = owned);
//! walkable!(ByRef { valid } check = borrowed);
//!
//! let by_value = deep_check::validate_self_recursively(&ByValue { valid: false });
//! let by_ref = deep_check::validate_self_recursively(&Box::new(ByRef { valid: false }));
//! assert_eq!(by_value.unwrap_err().message(), "not valid");
//! assert_eq!(by_ref.unwrap_err().message(), "not valid");
//! ```
use crate::types::CheckResult;

/// Self-check bound to a borrow of the value.
pub trait ValidateSelf {
    fn validate_self(&self) -> CheckResult;
}

/// Self-check bound to the value itself.
///
/// The walker only ever holds a borrow, so it clones the node into a fresh
/// value before calling this.
pub trait ValidateSelfOwned: Clone {
    fn validate_self_owned(self) -> CheckResult;
}

/// Object-safe handle on a [`ValidateSelfOwned`] implementation.
pub trait OwnedCheck {
    fn check_copy(&self) -> CheckResult;
}

impl<T: ValidateSelfOwned> OwnedCheck for T {
    #[inline]
    fn check_copy(&self) -> CheckResult {
        self.clone().validate_self_owned()
    }
}
