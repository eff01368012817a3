//! Structured tracing for filter application, behind the `tracing` feature.

#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "json_notation::filter";

/// The result was seeded with a copy of the whole document.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_seeded(glob: &str) {
    tracing::debug!(target: FILTER_TARGET, glob = %glob, "filter_seeded");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_seeded(_glob: &str) {}

/// A rule was applied to `paths` concrete paths.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_rule(glob: &str, negated: bool, paths: usize) {
    tracing::trace!(
        target: FILTER_TARGET,
        glob = %glob,
        negated = negated,
        paths = paths,
        "filter_rule"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_rule(_glob: &str, _negated: bool, _paths: usize) {}

/// An exclusion gave back paths that an earlier, narrower inclusion selected.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn trace_reincluded(exclusion: &str, inclusion: &str) {
    tracing::trace!(
        target: FILTER_TARGET,
        exclusion = %exclusion,
        inclusion = %inclusion,
        "filter_reincluded"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_reincluded(_exclusion: &str, _inclusion: &str) {}
