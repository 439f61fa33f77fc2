//! Data types shared by the walker and the registration traits.
//!
//! # Examples
//!
//! ```
//! use deep_check::{Failure, PathSegment};
//!
//! let failure = Failure::new("not valid").within(PathSegment::Field("b".into()));
//! assert_eq!(format!("{:#}", failure), "not valid (at b)");
//! ```
use smallvec::SmallVec;

pub mod failure;
pub mod node;

pub use failure::*;
pub use node::*;

/// SmallVec-backed path storage.
///
/// Most failures sit a handful of levels below the root, so the first four
/// segments are kept inline.
pub type PathVec = SmallVec<[PathSegment; 4]>;

/// SmallVec-backed field list produced by [`Node::Struct`].
pub type Fields<'a> = SmallVec<[Field<'a>; 8]>;

/// Result of a validation: `Ok(())` or the first [`Failure`] found.
pub type CheckResult = Result<(), Failure>;
