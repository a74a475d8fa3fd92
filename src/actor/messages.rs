//! Message types for the list actor.
//!
//! These enums define the protocol between the data-supplying side, the
//! list thread, and the render boundary.

use crate::list::{ChangePayload, Item};

/// Commands sent to the list thread.
#[derive(Debug)]
pub enum ListCommand {
    /// Reconcile a freshly loaded sequence against the committed one.
    Submit(Vec<Item>),

    /// Shut down the list thread.
    Shutdown,
}

/// Notifications sent from the list thread to the render boundary.
///
/// One event per edit operation, in application order: positions refer to
/// the row set as progressively transformed by the preceding events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// A row appeared.
    Inserted {
        /// Target position of the new row.
        position: usize,
    },

    /// A row disappeared.
    Removed {
        /// Position of the removed row.
        position: usize,
    },

    /// A row changed position.
    Moved {
        /// Source position.
        from: usize,
        /// Target position.
        to: usize,
    },

    /// A row changed content in place.
    Updated {
        /// Position of the updated row.
        position: usize,
        /// Field-level delta; empty means full-rebind fallback.
        payload: ChangePayload,
    },
}
