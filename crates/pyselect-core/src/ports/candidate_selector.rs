//! Best-candidate selector port.
//!
//! The ranking policy (version ordering, environment kind preferences) lives
//! in the adapter. Rules treat the selector as an opaque comparator.

use crate::domain::Environment;

/// Port for choosing the single best environment out of a candidate list.
#[cfg_attr(test, mockall::automock)]
pub trait BestCandidateSelector: Send + Sync {
    /// Return the best candidate, or `None` when nothing qualifies.
    ///
    /// Must accept an empty slice and answer `None` for it.
    fn pick_best(&self, candidates: &[Environment]) -> Option<Environment>;
}
