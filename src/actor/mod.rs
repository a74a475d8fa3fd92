//! Actor Model: Message-passing concurrency for the list core.
//!
//! This module wraps the single-threaded [`crate::controller`] in a simple
//! actor built on crossbeam channels:
//! - **List Thread**: Owns the controller, handles submits one at a time
//! - **Data Side**: Any thread holding a [`ListHandle`] queues submits
//! - **Render Boundary**: Drains [`ListEvent`]s and patches its rows
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ListCommand     ┌──────────────┐
//! │ Data Loader  │ ─────────────────▶  │              │
//! └──────────────┘                     │ List Thread  │
//!                                      │ (controller) │
//! ┌──────────────┐      ListEvent      │              │
//! │Render Bounds │ ◀───────────────── │              │
//! └──────────────┘                     └──────────────┘
//!                                            │
//!                                            │ snapshot swap
//!                                            ▼
//!                                      ┌──────────────┐
//!                                      │ Readers (get,│
//!                                      │ clicks, size)│
//!                                      └──────────────┘
//! ```

mod messages;
mod list_actor;

pub use list_actor::{ListActor, ListHandle};
pub use messages::{ListCommand, ListEvent};
