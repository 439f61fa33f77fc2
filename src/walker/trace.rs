//! Walk events for the `tracing` ecosystem.
//!
//! With the `tracing` feature off every hook is an empty inline function.

#[cfg(feature = "tracing")]
mod enabled {
    use crate::types::{Failure, Kind};

    #[inline]
    pub(crate) fn dispatch(binding: &'static str) {
        tracing::trace!(binding, "invoking self-check");
    }

    #[inline]
    pub(crate) fn absent_member(kind: Kind) {
        tracing::trace!(?kind, "absent member");
    }

    #[inline]
    pub(crate) fn stopped(failure: &Failure) {
        tracing::debug!(
            failure = failure.message(),
            path = %failure.path_string(),
            "walk stopped at first failure"
        );
    }
}

#[cfg(not(feature = "tracing"))]
mod enabled {
    use crate::types::{Failure, Kind};

    #[inline(always)]
    pub(crate) fn dispatch(_binding: &'static str) {}

    #[inline(always)]
    pub(crate) fn absent_member(_kind: Kind) {}

    #[inline(always)]
    pub(crate) fn stopped(_failure: &Failure) {}
}

pub(crate) use enabled::*;
