//! Error types for the reconciler core.
//!
//! Both variants are immediate local-contract violations: they indicate a
//! caller bug (bad index, malformed input sequence), not a transient
//! condition. There is no retry or silent recovery anywhere in this crate.

use crate::list::ItemId;

/// Errors surfaced by the reconciler core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A position argument fell outside `[0, len)`.
    #[error("position {position} out of range for list of length {len}")]
    OutOfRange {
        /// The offending position.
        position: usize,
        /// Length of the committed sequence at the time of the call.
        len: usize,
    },

    /// A submitted sequence contained the same id twice.
    ///
    /// Only the checked entry points raise this; the unchecked ones leave
    /// the precondition violation undefined, as documented.
    #[error("duplicate item id {id} in sequence snapshot")]
    DuplicateIdentity {
        /// The id that appeared more than once.
        id: ItemId,
    },
}
