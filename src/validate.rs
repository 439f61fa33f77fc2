//! Top-level entry points.
//!
//! [`validate`] runs the tag rules on the root and then walks the whole graph;
//! [`validate_self_recursively`] only walks. [`Validator`] bundles a rule set
//! with a configured [`Walker`] for repeated use.
//!
//! # Examples
//!
//! ```
//! use deep_check::{walkable, Failure, ValidateSelf, Validator};
//!
//! struct Order {
//!     id: String,
//!     quantity: u32,
//! }
//!
//! impl ValidateSelf for Order {
//!     fn validate_self(&self) -> Result<(), Failure> {
//!         if self.quantity == 0 { Err("empty order".into()) } else { Ok(()) }
//!     }
//! }
//!
//! walkable!(Order { id, quantity } check = borrowed);
//!
//! let validator = Validator::new(|order: &Order| -> Result<(), Failure> {
//!     if order.id.is_empty() { Err("id: required".into()) } else { Ok(()) }
//! });
//!
//! assert!(validator.is_valid(&Order { id: "o-1".into(), quantity: 2 }));
//! let err = validator.validate(&Order { id: String::new(), quantity: 0 }).unwrap_err();
//! assert_eq!(err.message(), "id: required");
//! ```
use crate::traits::{NoTagRules, TagRules, Walk};
use crate::types::CheckResult;
use crate::walker::{Walker, WalkerConfig};

/// Runs `rules` on `root`, then walks the graph with the default walker.
///
/// A rule failure is returned without walking.
///
/// # Panics
///
/// Panics if `root` is an absent reference (see [`Walker::walk`]).
pub fn validate<T, R>(rules: &R, root: &T) -> CheckResult
where
    T: Walk + ?Sized,
    R: TagRules<T> + ?Sized,
{
    rules.check(root)?;
    validate_self_recursively(root)
}

/// Runs only the tag rules on `root`.
#[inline]
pub fn validate_tags<T, R>(rules: &R, root: &T) -> CheckResult
where
    T: ?Sized,
    R: TagRules<T> + ?Sized,
{
    rules.check(root)
}

/// Walks the graph rooted at `root` and runs every self-check it finds.
///
/// # Panics
///
/// Panics if `root` is an absent reference (see [`Walker::walk`]).
#[inline]
pub fn validate_self_recursively<T: Walk + ?Sized>(root: &T) -> CheckResult {
    Walker::new().walk(root)
}

/// Shortcut for `validate(rules, root).is_ok()`.
#[inline]
pub fn is_valid<T, R>(rules: &R, root: &T) -> bool
where
    T: Walk + ?Sized,
    R: TagRules<T> + ?Sized,
{
    validate(rules, root).is_ok()
}

/// A rule set paired with a configured walker.
#[derive(Debug, Clone, Default)]
pub struct Validator<R = NoTagRules> {
    rules: R,
    walker: Walker,
}

impl<R> Validator<R> {
    pub fn new(rules: R) -> Self {
        Self {
            rules,
            walker: Walker::new(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: WalkerConfig) -> Self {
        self.walker = Walker::with_config(config);
        self
    }

    #[inline]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    #[inline]
    pub fn walker(&self) -> &Walker {
        &self.walker
    }

    /// Tag rules on the root, then the recursive self-check.
    pub fn validate<T>(&self, root: &T) -> CheckResult
    where
        T: Walk + ?Sized,
        R: TagRules<T>,
    {
        self.rules.check(root)?;
        self.walker.walk(root)
    }

    pub fn validate_tags<T>(&self, root: &T) -> CheckResult
    where
        T: ?Sized,
        R: TagRules<T>,
    {
        self.rules.check(root)
    }

    /// The recursive self-check alone.
    pub fn validate_self<T: Walk + ?Sized>(&self, root: &T) -> CheckResult {
        self.walker.walk(root)
    }

    pub fn is_valid<T>(&self, root: &T) -> bool
    where
        T: Walk + ?Sized,
        R: TagRules<T>,
    {
        self.validate(root).is_ok()
    }
}
