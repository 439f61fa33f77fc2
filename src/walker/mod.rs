//! The recursive self-validation walker.
//!
//! For every value it reaches, the walker
//!
//! 1. peels reference layers until it reaches the effective node or an
//!    absent reference,
//! 2. runs the node's self-check, if it registered one,
//! 3. descends into struct fields (declaration order) and sequence elements
//!    (index order).
//!
//! The first failure stops the walk and is returned as is; nothing after it
//! is evaluated. Graphs must be acyclic: recursion depth equals nesting depth
//! and a cycle overflows the stack.
//!
//! # Examples
//!
//! ```
//! use deep_check::{walkable, Failure, ValidateSelf, Walker};
//!
//! struct Item {
//!     value: i64,
//! }
//!
//! impl ValidateSelf for Item {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if self.value == 42 { Ok(()) } else { Err("wrong value".into()) }
//!     }
//! }
//!
//! walkable!(Item { value } check = borrowed);
//!
//! let items = vec![Item { value: 42 }, Item { value: 1 }];
//! let failure = Walker::new().walk(&items).unwrap_err();
//! assert_eq!(failure.message(), "wrong value");
//! assert_eq!(format!("{:#}", failure), "wrong value (at [1])");
//! ```
use alloc::borrow::Cow;

use crate::traits::{Sequence, Walk};
use crate::types::{CheckResult, Failure, Field, Kind, Node, PathSegment, TOO_MUCH_INDIRECTION};

pub mod config;
mod trace;

pub use config::*;

/// Walks object graphs with a fixed [`WalkerConfig`].
///
/// A walker holds no state besides its configuration, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    /// A walker with the default configuration.
    #[inline]
    pub const fn new() -> Self {
        Self {
            config: WalkerConfig::new(),
        }
    }

    #[inline]
    pub const fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Walks the graph rooted at `root`, returning the first failure.
    ///
    /// # Panics
    ///
    /// Panics when `root` is an absent reference and the configuration uses
    /// [`RootNilPolicy::Panic`]. An absent root is a caller bug, not bad data.
    pub fn walk<T: Walk + ?Sized>(&self, root: &T) -> CheckResult {
        let result = self
            .peel(root.as_walk())
            .and_then(|(value, node)| match node {
                Node::Null(kind) => self.absent_root(kind),
                node => self.check(value, node),
            });
        if let Err(failure) = &result {
            trace::stopped(failure);
        }
        result
    }

    /// Peels reference layers off `value`.
    ///
    /// Returns the effective value together with its node, which is never
    /// [`Node::Reference`]; it may be [`Node::Null`].
    fn peel<'a>(&self, value: &'a dyn Walk) -> Result<(&'a dyn Walk, Node<'a>), Failure> {
        let mut current = value;
        let mut node = current.node();
        let mut depth = 0;
        while let Node::Reference(target) = node {
            if depth == self.config.max_indirection {
                return Err(Failure::new(TOO_MUCH_INDIRECTION));
            }
            depth += 1;
            current = target;
            node = current.node();
        }
        Ok((current, node))
    }

    /// Self-check first, then structure.
    fn check(&self, value: &dyn Walk, node: Node<'_>) -> CheckResult {
        self.dispatch(value)?;
        match node {
            Node::Struct(fields) => self.walk_fields(&fields),
            Node::Sequence(elements) => self.walk_elements(elements),
            Node::Reference(_) | Node::Null(_) | Node::Other => Ok(()),
        }
    }

    /// Runs whichever self-check `value` registered, by-value binding first.
    fn dispatch(&self, value: &dyn Walk) -> CheckResult {
        if let Some(check) = value.owned_check() {
            trace::dispatch("owned");
            return check.check_copy();
        }
        if let Some(check) = value.borrowed_check() {
            trace::dispatch("borrowed");
            return check.validate_self();
        }
        Ok(())
    }

    fn walk_fields(&self, fields: &[Field<'_>]) -> CheckResult {
        for field in fields {
            self.visit(field.value()).map_err(|failure| {
                if field.is_embedded() {
                    failure
                } else {
                    failure.within(PathSegment::Field(Cow::Borrowed(field.name())))
                }
            })?;
        }
        Ok(())
    }

    fn walk_elements(&self, elements: &dyn Sequence) -> CheckResult {
        for index in 0..elements.len() {
            if let Some(element) = elements.element(index) {
                self.visit(element)
                    .map_err(|failure| failure.within(PathSegment::Index(index)))?;
            }
        }
        Ok(())
    }

    /// Visits a field or element.
    fn visit(&self, value: &dyn Walk) -> CheckResult {
        let (value, node) = self.peel(value)?;
        match node {
            Node::Null(kind) => self.absent_member(kind),
            node => self.check(value, node),
        }
    }

    fn absent_root(&self, kind: Kind) -> CheckResult {
        match self.config.root_nil {
            RootNilPolicy::Panic => panic!(
                "deep-check: cannot walk an absent root ({:?}); pass a present value or use RootNilPolicy::Accept",
                kind
            ),
            RootNilPolicy::Accept => Ok(()),
        }
    }

    fn absent_member(&self, kind: Kind) -> CheckResult {
        trace::absent_member(kind);
        if kind.is_sequence() {
            return Ok(());
        }
        match self.config.field_nil {
            FieldNilPolicy::Reject => Err(Failure::nil_reference()),
            FieldNilPolicy::Ignore => Ok(()),
        }
    }
}
