//! Subscriber lifecycle phases.
//!
//! A subscriber moves `Uninitialized → Subscribed` on mount, bounces through
//! `Recomputing` for the duration of each synchronous derivation, and returns
//! to `Uninitialized` on unmount. The phase gates renderer composition: an
//! uninitialized subscriber composes to nothing.

/// Lifecycle phase of a list subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not mounted: no listener registered, no state derived.
    Uninitialized,

    /// Mounted with a live store listener and current derived state.
    Subscribed,

    /// Mid-derivation. Transient: derivation is synchronous, so callers only
    /// observe this phase from within tracing output.
    Recomputing,
}
