//! Widget layer: Row binding for the render boundary.
//!
//! The core hands the boundary positions and payloads; this module turns
//! them into concrete row maintenance:
//!
//! 1. **Partial path**: A non-empty [`crate::list::ChangePayload`] patches
//!    only the named fields of an existing row, without reconstructing it.
//!
//! 2. **Full path**: Insertions and empty-payload updates are bound from
//!    the committed sequence on the host's next layout pass
//!    ([`RowSet::refresh`]), the way a recycling view host defers binds.

mod traits;
mod rows;

pub use rows::RowSet;
pub use traits::RowBinder;
