//! Row binder trait: The inflation/rebind collaborator.
//!
//! The core never constructs or draws a visual row itself. A [`RowBinder`]
//! turns an [`Item`] into whatever the host renders (a TUI line, a DOM
//! node, a recycled native view) and knows how to update an existing row,
//! either fully from an item or partially from a change payload.

use crate::list::{ChangePayload, Item};

/// Builds and updates visual rows for the render boundary.
pub trait RowBinder {
    /// The host's visual row type.
    type Row;

    /// Construct a fresh row from an item.
    fn inflate(&self, item: &Item) -> Self::Row;

    /// Update every visual field of an existing row from an item.
    fn rebind(&self, row: &mut Self::Row, item: &Item);

    /// Patch only the fields named by a non-empty payload.
    ///
    /// Callers hand empty payloads to [`RowBinder::rebind`] instead; see
    /// [`crate::widget::RowSet`].
    fn rebind_partial(&self, row: &mut Self::Row, payload: &ChangePayload);
}
