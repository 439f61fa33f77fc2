//! Registration traits that let the walker see into a value.
//!
//! Rust has no runtime reflection, so every type that takes part in a walk
//! describes itself through [`Walk`]. Structs usually get their impl from
//! [`walkable!`](crate::walkable); the crate ships impls for primitives,
//! smart pointers, `Option` and the common sequences.
//!
//! # Examples
//!
//! A hand-written impl for an enum, exposing the fields of the active
//! variant:
//!
//! ```
//! use deep_check::traits::Walk;
//! use deep_check::types::{Field, Fields, Node};
//!
//! enum Figure {
//!     Circle { radius: u32 },
//!     Empty,
//! }
//!
//! impl Walk for Figure {
//!     fn node(&self) -> Node<'_> {
//!         match self {
//!             Figure::Circle { radius } => {
//!                 let mut fields = Fields::new();
//!                 fields.push(Field::named("radius", radius));
//!                 Node::Struct(fields)
//!             }
//!             Figure::Empty => Node::Other,
//!         }
//!     }
//! }
//!
//! assert!(deep_check::validate_self_recursively(&Figure::Circle { radius: 2 }).is_ok());
//! ```
use crate::traits::{OwnedCheck, ValidateSelf};
use crate::types::{Kind, Node};

/// Upcast to `&dyn Walk`, available on every walkable value.
///
/// Implemented for all sized [`Walk`] types; `dyn Walk` gets it through its
/// vtable, which lets pointer impls hand unsized targets to the walker.
pub trait AsWalk {
    fn as_walk(&self) -> &dyn Walk;
}

impl<T: Walk> AsWalk for T {
    #[inline]
    fn as_walk(&self) -> &dyn Walk {
        self
    }
}

/// A value the walker can traverse.
///
/// `node` describes the value's structure. The two capability hooks expose a
/// self-check, if the type has one; the walker asks `owned_check` first and
/// falls back to `borrowed_check`.
pub trait Walk: AsWalk {
    fn node(&self) -> Node<'_>;

    /// Self-check that consumes a copy of the value.
    #[inline]
    fn owned_check(&self) -> Option<&dyn OwnedCheck> {
        None
    }

    /// Self-check that runs on a borrow of the value.
    #[inline]
    fn borrowed_check(&self) -> Option<&dyn ValidateSelf> {
        None
    }
}

/// Static kind of a type, once non-nullable indirections are peeled.
///
/// The walker needs this for absent values: `None::<Vec<T>>` counts as an
/// empty sequence, while `None::<Box<S>>` for a struct `S` does not, and
/// there is no instance to ask.
pub trait Shape {
    const KIND: Kind;
}

impl Shape for dyn Walk + '_ {
    const KIND: Kind = Kind::Dynamic;
}

impl Shape for dyn Walk + Send + '_ {
    const KIND: Kind = Kind::Dynamic;
}

impl Shape for dyn Walk + Send + Sync + '_ {
    const KIND: Kind = Kind::Dynamic;
}

/// Index-ordered access to the elements of a homogeneous sequence.
pub trait Sequence {
    fn len(&self) -> usize;

    fn element(&self, index: usize) -> Option<&dyn Walk>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
