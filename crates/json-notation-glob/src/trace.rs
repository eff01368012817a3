//! Structured tracing for glob normalization.
//!
//! Compiled behind the `tracing` feature; with the feature off every hook is
//! an inline no-op.

#[cfg(feature = "tracing")]
const GLOB_TARGET: &str = "json_notation::glob";

/// A normalization round is starting with `size` distinct globs.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_round(round: usize, size: usize) {
    tracing::debug!(target: GLOB_TARGET, round = round, size = size, "normalize_round");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_round(_round: usize, _size: usize) {}

/// A glob was not retained by a round.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_dropped(glob: &str, reason: &'static str) {
    tracing::trace!(target: GLOB_TARGET, glob = %glob, reason = reason, "glob_dropped");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_dropped(_glob: &str, _reason: &'static str) {}

/// Two globs with different signs produced an intersection.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_intersection(a: &str, b: &str, result: &str) {
    tracing::trace!(
        target: GLOB_TARGET,
        a = %a,
        b = %b,
        result = %result,
        "glob_intersection"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_intersection(_a: &str, _b: &str, _result: &str) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_normalized(rounds: usize, size: usize) {
    tracing::debug!(target: GLOB_TARGET, rounds = rounds, size = size, "normalize_done");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_normalized(_rounds: usize, _size: usize) {}
