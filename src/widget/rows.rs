//! Row set: A reference render boundary over bound rows.
//!
//! [`RowSet`] keeps one slot per visible row and applies controller
//! notifications structurally as they arrive. Content is bound lazily, the
//! way a recycling host binds on its next layout pass: insertions leave a
//! vacant slot, an update with an empty payload marks the row stale, and
//! [`RowSet::refresh`] materializes both from the committed sequence.
//! Updates with a non-empty payload are patched immediately through
//! [`RowBinder::rebind_partial`] without reconstructing the row.

use super::traits::RowBinder;
use crate::controller::ListUpdateCallback;
use crate::list::{ChangePayload, Item};

/// One row position in the set.
enum Slot<R> {
    /// Inserted but not yet bound to an item.
    Vacant,
    /// Bound, but needs a full rebind on the next refresh.
    Stale(R),
    /// Bound and current.
    Bound(R),
}

impl<R> Slot<R> {
    fn row(&self) -> Option<&R> {
        match self {
            Self::Vacant => None,
            Self::Stale(row) | Self::Bound(row) => Some(row),
        }
    }
}

/// Render boundary that maintains a set of bound rows.
pub struct RowSet<B: RowBinder> {
    binder: B,
    slots: Vec<Slot<B::Row>>,
}

impl<B: RowBinder> RowSet<B> {
    /// Create an empty row set around a binder.
    pub const fn new(binder: B) -> Self {
        Self {
            binder,
            slots: Vec::new(),
        }
    }

    /// Number of row positions (bound or pending).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the set has no row positions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The row at `position`, if it has been bound.
    pub fn row(&self, position: usize) -> Option<&B::Row> {
        self.slots.get(position).and_then(Slot::row)
    }

    /// Whether any slot still needs [`RowSet::refresh`].
    pub fn needs_refresh(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| !matches!(slot, Slot::Bound(_)))
    }

    /// Bind vacant slots and fully rebind stale ones from the committed
    /// items (the host's layout pass).
    ///
    /// # Panics
    ///
    /// Panics if `items` is not the sequence the applied notifications
    /// described (length mismatch).
    pub fn refresh(&mut self, items: &[Item]) {
        assert_eq!(
            self.slots.len(),
            items.len(),
            "row set out of step with committed sequence"
        );
        for (slot, item) in self.slots.iter_mut().zip(items) {
            match std::mem::replace(slot, Slot::Vacant) {
                Slot::Vacant => {
                    *slot = Slot::Bound(self.binder.inflate(item));
                }
                Slot::Stale(mut row) => {
                    self.binder.rebind(&mut row, item);
                    *slot = Slot::Bound(row);
                }
                bound @ Slot::Bound(_) => *slot = bound,
            }
        }
    }
}

impl<B: RowBinder> ListUpdateCallback for RowSet<B> {
    fn on_inserted(&mut self, position: usize) {
        self.slots.insert(position, Slot::Vacant);
    }

    fn on_removed(&mut self, position: usize) {
        self.slots.remove(position);
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
    }

    fn on_updated(&mut self, position: usize, payload: &ChangePayload) {
        let slot = &mut self.slots[position];
        if payload.is_empty() {
            // No payload-eligible field changed; keep the row object and
            // fall back to a full rebind on the next refresh. An already
            // stale row stays stale rather than being dropped.
            if let Slot::Bound(row) | Slot::Stale(row) = std::mem::replace(slot, Slot::Vacant) {
                *slot = Slot::Stale(row);
            }
        } else if let Slot::Bound(row) | Slot::Stale(row) = slot {
            self.binder.rebind_partial(row, payload);
        }
    }
}
