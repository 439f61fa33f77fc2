//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use deep_check::prelude::*;
//!
//! struct Flag {
//!     on: bool,
//! }
//!
//! impl ValidateSelf for Flag {
//!     fn validate_self(&self) -> CheckResult {
//!         if self.on { Ok(()) } else { Err("flag is off".into()) }
//!     }
//! }
//!
//! walkable!(Flag { on } check = borrowed);
//!
//! assert!(validate_self_recursively(&Flag { on: true }).is_ok());
//! ```

// Macros
pub use crate::walkable;

// Core types
pub use crate::types::{CheckResult, Failure};
pub use crate::walker::{Walker, WalkerConfig};

// Traits
pub use crate::traits::{TagRules, ValidateSelf, ValidateSelfOwned, Walk};

// Entry points
pub use crate::validate::{is_valid, validate, validate_self_recursively, Validator};
