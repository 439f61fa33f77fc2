//! Core traits for describing and checking object graphs.
//!
//! - [`Walk`]: structural view of a value plus its self-check hooks
//! - [`Shape`]: static kind of a type, used for absent values
//! - [`Sequence`]: index-ordered element access
//! - [`ValidateSelf`] / [`ValidateSelfOwned`]: the self-check capability
//! - [`TagRules`]: adapter for an external per-field rule engine
//!
//! # Examples
//!
//! ```
//! use deep_check::traits::{Shape, Walk};
//! use deep_check::types::Kind;
//!
//! assert_eq!(<Vec<u8> as Shape>::KIND, Kind::Sequence);
//! assert_eq!(<Option<Vec<u8>> as Shape>::KIND, Kind::Reference);
//! assert_eq!(<Box<Vec<u8>> as Shape>::KIND, Kind::Sequence);
//! assert_eq!(42u8.node().kind(), Kind::Other);
//! ```

pub mod tag_rules;
pub mod validate_self;
pub mod walk;

pub use tag_rules::{NoTagRules, TagRules};
pub use validate_self::{OwnedCheck, ValidateSelf, ValidateSelfOwned};
pub use walk::{AsWalk, Sequence, Shape, Walk};
