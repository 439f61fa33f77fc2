use crate::traits::{Sequence, Walk};
use crate::types::Fields;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coarse classification of a node, known without an instance.
///
/// See [`Shape`](crate::traits::Shape).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Struct,
    Sequence,
    /// A nullable reference, such as `Option<T>`.
    Reference,
    /// A `dyn Walk` value whose concrete type is only known at runtime.
    Dynamic,
    Other,
}

impl Kind {
    #[inline]
    pub fn is_sequence(self) -> bool {
        matches!(self, Kind::Sequence)
    }
}

/// Structural view of one value in the graph, as seen by the walker.
pub enum Node<'a> {
    /// A struct and its walked fields, in declaration order.
    Struct(Fields<'a>),
    /// A homogeneous sequence.
    Sequence(&'a dyn Sequence),
    /// A present reference; the walker continues with its target.
    Reference(&'a dyn Walk),
    /// An absent reference to a value of the given kind.
    Null(Kind),
    /// A leaf with nothing to recurse into.
    Other,
}

impl Node<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Struct(_) => Kind::Struct,
            Node::Sequence(_) => Kind::Sequence,
            Node::Reference(_) | Node::Null(_) => Kind::Reference,
            Node::Other => Kind::Other,
        }
    }
}

/// A struct field exposed to the walker.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    value: &'a dyn Walk,
    embedded: bool,
}

impl<'a> Field<'a> {
    #[inline]
    pub fn named(name: &'static str, value: &'a dyn Walk) -> Self {
        Self {
            name,
            value,
            embedded: false,
        }
    }

    /// A field whose own fields are treated as declared on the parent.
    #[inline]
    pub fn embedded(name: &'static str, value: &'a dyn Walk) -> Self {
        Self {
            name,
            value,
            embedded: true,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn value(&self) -> &'a dyn Walk {
        self.value
    }

    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }
}
