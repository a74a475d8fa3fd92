//! List Controller: Owns the committed sequence and drives the render
//! boundary.
//!
//! The controller has exactly one piece of state, the committed sequence,
//! and one transition, [`ListController::submit`]: diff the new sequence
//! against the committed one, dispatch per-operation notifications in
//! script order, then swap the new sequence in as a unit. From the
//! caller's perspective a submit either has not happened or has fully
//! happened; `&mut self` on `submit` versus `&self` on the readers makes
//! the borrow checker enforce that within a thread, and the actor layer
//! extends the same guarantee across threads.

use std::sync::Arc;

use crate::error::ListError;
use crate::list::diff::{diff_with, ensure_unique_ids, DiffObserver};
use crate::list::{ChangePayload, DiffStats, EditOp, Item, ItemId};

/// Render-boundary notifications, one call per edit operation.
///
/// Positions follow the progressive-transformation discipline of the edit
/// script: apply each notification to the row set before interpreting the
/// next. Unchanged rows are deliberately silent; per-comparison visibility
/// lives in [`crate::list::diff::DiffObserver`] instead.
pub trait ListUpdateCallback {
    /// A row appeared at `position`.
    fn on_inserted(&mut self, position: usize);

    /// The row at `position` disappeared.
    fn on_removed(&mut self, position: usize);

    /// The row at `from` moved to `to`.
    fn on_moved(&mut self, from: usize, to: usize);

    /// The row at `position` changed content in place.
    ///
    /// A non-empty payload names exactly the fields to patch; an empty
    /// payload means no payload-eligible field changed and the boundary
    /// should fall back to a full rebind of the row.
    fn on_updated(&mut self, position: usize, payload: &ChangePayload);
}

/// Holds the committed item sequence and reconciles submissions against it.
#[derive(Debug, Clone, Default)]
pub struct ListController {
    /// The committed sequence; replaced wholesale on submit, never mutated
    /// element by element.
    committed: Arc<[Item]>,
}

impl ListController {
    /// Create a controller with an empty committed sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed items.
    #[inline]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Whether the committed sequence is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// The committed item at `position`.
    pub fn get(&self, position: usize) -> Result<&Item, ListError> {
        self.committed.get(position).ok_or(ListError::OutOfRange {
            position,
            len: self.committed.len(),
        })
    }

    /// The stable identity key of the committed item at `position`.
    pub fn identity_key(&self, position: usize) -> Result<ItemId, ListError> {
        self.get(position).map(Item::id)
    }

    /// A cheap shared handle to the committed sequence.
    pub fn snapshot(&self) -> Arc<[Item]> {
        Arc::clone(&self.committed)
    }

    /// Resolve the item at `position` and hand it to an
    /// application-supplied click handler.
    pub fn dispatch_click<F>(&self, position: usize, handler: F) -> Result<(), ListError>
    where
        F: FnOnce(&Item),
    {
        let item = self.get(position)?;
        handler(item);
        Ok(())
    }

    /// Reconcile `new` against the committed sequence.
    ///
    /// Dispatches one callback per edit operation, in application order,
    /// then swaps `new` in as the committed sequence. Returns the
    /// operation counts.
    ///
    /// Precondition: ids are unique within `new` (and within the committed
    /// sequence, which every prior submit preserved). Use
    /// [`ListController::submit_checked`] to validate instead.
    pub fn submit(&mut self, new: Vec<Item>, callback: &mut dyn ListUpdateCallback) -> DiffStats {
        self.submit_observed(new, callback, &())
    }

    /// [`ListController::submit`] with an injected diff diagnostic
    /// observer.
    pub fn submit_observed<O: DiffObserver>(
        &mut self,
        new: Vec<Item>,
        callback: &mut dyn ListUpdateCallback,
        observer: &O,
    ) -> DiffStats {
        let script = diff_with(&self.committed, &new, observer);
        let stats = script.stats();

        for op in &script {
            match op {
                EditOp::Removed { position } => callback.on_removed(*position),
                EditOp::Inserted { position } => callback.on_inserted(*position),
                EditOp::Moved { from, to } => callback.on_moved(*from, *to),
                EditOp::Updated { position, payload } => callback.on_updated(*position, payload),
            }
        }

        // Swap after the boundary has been notified; the script is
        // consumed above and discarded here.
        self.committed = new.into();
        stats
    }

    /// [`ListController::submit`] that validates the unique-id
    /// precondition first, leaving the committed sequence untouched and
    /// dispatching nothing on failure.
    pub fn submit_checked(
        &mut self,
        new: Vec<Item>,
        callback: &mut dyn ListUpdateCallback,
    ) -> Result<DiffStats, ListError> {
        ensure_unique_ids(&new)?;
        Ok(self.submit(new, callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{FieldMask, ImageRef};

    /// Test callback that records notifications in dispatch order.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ListUpdateCallback for Recorder {
        fn on_inserted(&mut self, position: usize) {
            self.calls.push(format!("inserted {position}"));
        }

        fn on_removed(&mut self, position: usize) {
            self.calls.push(format!("removed {position}"));
        }

        fn on_moved(&mut self, from: usize, to: usize) {
            self.calls.push(format!("moved {from}->{to}"));
        }

        fn on_updated(&mut self, position: usize, payload: &ChangePayload) {
            self.calls
                .push(format!("updated {position} {:?}", payload.fields()));
        }
    }

    fn rose() -> Item {
        Item::new(1, "Rose").with_description("red")
    }

    fn tulip() -> Item {
        Item::new(2, "Tulip").with_description("yellow")
    }

    #[test]
    fn test_starts_empty() {
        let controller = ListController::new();
        assert_eq!(controller.len(), 0);
        assert!(controller.is_empty());
    }

    #[test]
    fn test_initial_submit_inserts_everything() {
        let mut controller = ListController::new();
        let mut recorder = Recorder::default();

        let stats = controller.submit(vec![rose(), tulip()], &mut recorder);

        assert_eq!(stats.inserted, 2);
        assert_eq!(recorder.calls, vec!["inserted 0", "inserted 1"]);
        assert_eq!(controller.len(), 2);
        assert_eq!(controller.get(0).unwrap().name(), "Rose");
    }

    #[test]
    fn test_resubmit_identical_is_silent() {
        let mut controller = ListController::new();
        let mut recorder = Recorder::default();
        controller.submit(vec![rose(), tulip()], &mut recorder);
        recorder.calls.clear();

        let stats = controller.submit(vec![rose(), tulip()], &mut recorder);

        assert_eq!(stats.total(), 0);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn test_update_dispatches_payload() {
        let mut controller = ListController::new();
        let mut recorder = Recorder::default();
        controller.submit(vec![rose()], &mut recorder);
        recorder.calls.clear();

        let changed = rose().with_image(ImageRef::new("rose.png"));
        controller.submit(vec![changed], &mut recorder);

        assert_eq!(recorder.calls, vec![format!("updated 0 {:?}", FieldMask::IMAGE)]);
        assert_eq!(
            controller.get(0).unwrap().image().map(ImageRef::as_str),
            Some("rose.png")
        );
    }

    #[test]
    fn test_swap_dispatches_single_move_before_commit_readers_see_new_order() {
        let mut controller = ListController::new();
        let mut recorder = Recorder::default();
        controller.submit(vec![rose(), tulip()], &mut recorder);
        recorder.calls.clear();

        controller.submit(vec![tulip(), rose()], &mut recorder);

        assert_eq!(recorder.calls, vec!["moved 1->0"]);
        assert_eq!(controller.identity_key(0).unwrap(), ItemId::new(2));
        assert_eq!(controller.identity_key(1).unwrap(), ItemId::new(1));
    }

    #[test]
    fn test_get_out_of_range() {
        let controller = ListController::new();
        assert_eq!(
            controller.get(0).unwrap_err(),
            ListError::OutOfRange { position: 0, len: 0 }
        );

        let mut controller = controller;
        controller.submit(vec![rose()], &mut Recorder::default());
        assert!(controller.get(0).is_ok());
        assert_eq!(
            controller.identity_key(3).unwrap_err(),
            ListError::OutOfRange { position: 3, len: 1 }
        );
    }

    #[test]
    fn test_submit_checked_rejects_duplicates_without_side_effects() {
        let mut controller = ListController::new();
        let mut recorder = Recorder::default();
        controller.submit(vec![rose()], &mut recorder);
        recorder.calls.clear();

        let bad = vec![tulip(), Item::new(2, "Imposter")];
        let err = controller.submit_checked(bad, &mut recorder).unwrap_err();

        assert_eq!(err, ListError::DuplicateIdentity { id: ItemId::new(2) });
        assert!(recorder.calls.is_empty());
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.get(0).unwrap().name(), "Rose");
    }

    #[test]
    fn test_dispatch_click_resolves_item() {
        let mut controller = ListController::new();
        controller.submit(vec![rose(), tulip()], &mut Recorder::default());

        let mut clicked = None;
        controller
            .dispatch_click(1, |item| clicked = Some(item.name().to_owned()))
            .unwrap();
        assert_eq!(clicked.as_deref(), Some("Tulip"));

        let err = controller.dispatch_click(9, |_| {}).unwrap_err();
        assert_eq!(err, ListError::OutOfRange { position: 9, len: 2 });
    }

    #[test]
    fn test_snapshot_is_stable_across_later_submits() {
        let mut controller = ListController::new();
        controller.submit(vec![rose()], &mut Recorder::default());
        let before = controller.snapshot();

        controller.submit(vec![rose(), tulip()], &mut Recorder::default());

        assert_eq!(before.len(), 1);
        assert_eq!(controller.len(), 2);
    }
}
