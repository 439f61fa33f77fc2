//! Recursive self-validation for nested object graphs.
//!
//! Types describe their structure through [`Walk`] (usually via the
//! [`walkable!`] macro) and may register a self-check, bound either to a
//! borrow ([`ValidateSelf`]) or to the value itself ([`ValidateSelfOwned`]).
//! The [`Walker`] peels references, runs each self-check it meets, and
//! recurses into fields and sequence elements until the first [`Failure`].
//!
//! # Examples
//!
//! ## Nested structs
//!
//! ```
//! use deep_check::{walkable, Failure, ValidateSelf};
//!
//! struct Inner {
//!     value: i32,
//! }
//!
//! impl ValidateSelf for Inner {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if self.value == 42 { Ok(()) } else { Err("wrong value".into()) }
//!     }
//! }
//!
//! struct Outer {
//!     valid: bool,
//!     inner: Inner,
//! }
//!
//! impl ValidateSelf for Outer {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if self.valid { Ok(()) } else { Err("not valid".into()) }
//!     }
//! }
//!
//! walkable!(Inner { value } check = borrowed);
//! walkable!(Outer { valid, inner } check = borrowed);
//!
//! let outer = Outer { valid: true, inner: Inner { value: 1 } };
//! let failure = deep_check::validate_self_recursively(&outer).unwrap_err();
//! assert_eq!(failure.message(), "wrong value");
//! assert_eq!(format!("{:#}", failure), "wrong value (at inner)");
//! ```
//!
//! ## Tag rules first
//!
//! ```
//! use deep_check::{walkable, Failure};
//!
//! struct Account {
//!     name: String,
//! }
//!
//! walkable!(Account { name });
//!
//! let rules = |account: &Account| -> Result<(), Failure> {
//!     if account.name.is_empty() { Err("name: required".into()) } else { Ok(()) }
//! };
//!
//! assert!(deep_check::is_valid(&rules, &Account { name: "kim".into() }));
//! assert!(!deep_check::is_valid(&rules, &Account { name: String::new() }));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Struct registration macro
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Registration and self-check traits
pub mod traits;
/// Failure, node and path types
pub mod types;
/// Top-level validation entry points
pub mod validate;
/// The recursive walker and its configuration
pub mod walker;

mod impls;

pub use traits::*;
pub use types::{CheckResult, Failure, Kind, PathSegment, NIL_REFERENCE};
pub use validate::*;
pub use walker::{FieldNilPolicy, RootNilPolicy, Walker, WalkerConfig};
