//! List module: Core data structures for keyed list reconciliation.
//!
//! This module contains:
//! - [`Item`]: One list entry, a stable identity plus displayable content
//! - [`ChangePayload`]: Field-level delta attached to an in-place update
//! - [`EditScript`]: The ordered operations transforming one list into another
//! - [`diff`]: The diff engine producing minimal edit scripts

mod item;
mod payload;
mod script;
pub mod diff;

pub use item::{ImageRef, Item, ItemId};
pub use payload::{ChangePayload, FieldMask};
pub use script::{DiffStats, EditOp, EditScript};
