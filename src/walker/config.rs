#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default bound on consecutive reference layers peeled before dispatch.
pub const DEFAULT_MAX_INDIRECTION: usize = 64;

/// What the walker does when the root itself is an absent reference.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RootNilPolicy {
    /// Treat it as a usage error and panic.
    #[default]
    Panic,
    /// Report success; there is nothing to check.
    Accept,
}

/// What the walker does with an absent field or element whose target is
/// not a sequence. Absent sequences are always treated as empty.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldNilPolicy {
    /// Fail with [`NIL_REFERENCE`](crate::types::NIL_REFERENCE).
    #[default]
    Reject,
    /// Skip it, as an optional value.
    Ignore,
}

/// Configuration builder for a [`Walker`](crate::Walker).
///
/// # Examples
///
/// ```
/// use deep_check::{FieldNilPolicy, RootNilPolicy, Walker, WalkerConfig};
///
/// let config = WalkerConfig::new()
///     .root_nil(RootNilPolicy::Accept)
///     .field_nil(FieldNilPolicy::Ignore)
///     .max_indirection(8);
///
/// let walker = Walker::with_config(config);
/// assert!(walker.walk(&None::<Box<u32>>).is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalkerConfig {
    pub(crate) root_nil: RootNilPolicy,
    pub(crate) field_nil: FieldNilPolicy,
    pub(crate) max_indirection: usize,
}

impl WalkerConfig {
    pub const fn new() -> Self {
        Self {
            root_nil: RootNilPolicy::Panic,
            field_nil: FieldNilPolicy::Reject,
            max_indirection: DEFAULT_MAX_INDIRECTION,
        }
    }

    /// Policy for an absent root (default: [`RootNilPolicy::Panic`]).
    #[must_use]
    pub const fn root_nil(mut self, policy: RootNilPolicy) -> Self {
        self.root_nil = policy;
        self
    }

    /// Policy for absent fields and elements (default: [`FieldNilPolicy::Reject`]).
    #[must_use]
    pub const fn field_nil(mut self, policy: FieldNilPolicy) -> Self {
        self.field_nil = policy;
        self
    }

    /// Maximum number of reference layers peeled in one unwrap
    /// (default: [`DEFAULT_MAX_INDIRECTION`]).
    #[must_use]
    pub const fn max_indirection(mut self, limit: usize) -> Self {
        self.max_indirection = limit;
        self
    }

    #[inline]
    pub const fn root_nil_policy(&self) -> RootNilPolicy {
        self.root_nil
    }

    #[inline]
    pub const fn field_nil_policy(&self) -> FieldNilPolicy {
        self.field_nil
    }

    #[inline]
    pub const fn indirection_limit(&self) -> usize {
        self.max_indirection
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self::new()
    }
}
