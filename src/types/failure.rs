use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::PathVec;

/// Message used when a field or element holds an absent reference.
pub const NIL_REFERENCE: &str = "object is invalid: nil reference";

/// Message used when a reference chain is deeper than the configured guard.
pub const TOO_MUCH_INDIRECTION: &str = "object is invalid: too many levels of indirection";

/// One step of the route from the root to the node that failed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named (or positional, for tuple structs) struct field.
    Field(Cow<'static, str>),
    /// An element of a sequence.
    Index(usize),
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// The single terminal result of a failed validation.
///
/// A `Failure` carries the human-readable message produced by whichever
/// check rejected the graph, plus the path to the node where that happened.
/// Two failures raised by different checks are told apart only by their
/// message; there is no error kind.
///
/// `Display` prints only the message. The alternate form (`{:#}`) appends the
/// path when there is one.
///
/// # Examples
///
/// ```
/// use deep_check::{Failure, PathSegment};
///
/// let failure = Failure::new("wrong value")
///     .within(PathSegment::Field("a".into()))
///     .within(PathSegment::Index(1))
///     .within(PathSegment::Field("items".into()));
///
/// assert_eq!(failure.message(), "wrong value");
/// assert_eq!(failure.to_string(), "wrong value");
/// assert_eq!(format!("{:#}", failure), "wrong value (at items[1].a)");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Failure {
    message: Cow<'static, str>,
    // innermost segment first; pushed while the failure travels back to the root
    path: PathVec,
}

impl Failure {
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            path: PathVec::new(),
        }
    }

    /// The generic failure reported for an absent field or element.
    #[inline]
    pub fn nil_reference() -> Self {
        Self::new(NIL_REFERENCE)
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Records that this failure was raised inside `segment`.
    ///
    /// Segments are added from the innermost node outward.
    #[inline]
    #[must_use]
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.push(segment);
        self
    }

    /// Path segments from the root down to the failing node.
    #[inline]
    pub fn path(&self) -> impl Iterator<Item = &PathSegment> {
        self.path.iter().rev()
    }

    /// Renders the path as `field[index].field`, empty for a root failure.
    pub fn path_string(&self) -> String {
        let mut rendered = String::new();
        for segment in self.path() {
            if let PathSegment::Field(_) = segment {
                if !rendered.is_empty() {
                    rendered.push('.');
                }
            }
            // fmt::Write on String never fails
            let _ = fmt::Write::write_fmt(&mut rendered, format_args!("{}", segment));
        }
        rendered
    }
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if f.alternate() && !self.path.is_empty() {
            write!(f, " (at {})", self.path_string())?;
        }
        Ok(())
    }
}

impl core::error::Error for Failure {}

impl From<&'static str> for Failure {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Failure {
    #[inline]
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
