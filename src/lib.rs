//! # Rebind
//!
//! A minimal-update reconciler for keyed item lists.
//!
//! Rebind takes the old and the new version of an ordered item list and
//! computes the smallest set of visual changes a scrollable list view has
//! to apply: which rows are the same entity, which actually changed, and
//! the field-level delta for each changed row.
//!
//! ## Core Concepts
//!
//! - **Identity vs content**: Entities match by stable `id`; content
//!   compares the displayable fields. The two are never mixed.
//! - **Edit scripts**: Removals, insertions, moves, and in-place updates,
//!   positioned so a boundary can apply them one at a time.
//! - **Change payloads**: Updates carry exactly the differing
//!   payload-eligible fields, so a row is patched instead of rebuilt.
//! - **Actor model**: An optional dedicated list thread serializes
//!   submits and publishes atomic snapshots to concurrent readers.
//!
//! ## Example
//!
//! ```rust
//! use rebind::{diff, EditOp, ImageRef, Item};
//!
//! let old = vec![Item::new(1, "Rose").with_description("red")];
//! let new = vec![Item::new(1, "Rose")
//!     .with_image(ImageRef::new("rose.png"))
//!     .with_description("red")];
//!
//! let script = diff(&old, &new);
//! assert_eq!(script.len(), 1);
//! assert!(matches!(script.ops()[0], EditOp::Updated { position: 0, .. }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod list;
pub mod controller;
pub mod actor;
pub mod widget;
mod error;

// Re-exports for convenience
pub use actor::{ListActor, ListCommand, ListEvent, ListHandle};
pub use controller::{ListController, ListUpdateCallback};
pub use error::ListError;
pub use list::diff::{diff, diff_checked, diff_with, DiffObserver, TraceObserver};
pub use list::{ChangePayload, DiffStats, EditOp, EditScript, FieldMask, ImageRef, Item, ItemId};
pub use widget::{RowBinder, RowSet};
