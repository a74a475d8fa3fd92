//! List Actor: Dedicated thread owning the controller.
//!
//! The actor serializes submits by construction: commands arrive over a
//! single channel and are handled one at a time by the thread that owns
//! the [`ListController`]. After every submit the thread publishes the new
//! committed snapshot through a shared reference swap, so readers on any
//! thread observe either fully the pre-submit or fully the post-submit
//! sequence, never a mix.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use super::messages::{ListCommand, ListEvent};
use crate::controller::{ListController, ListUpdateCallback};
use crate::error::ListError;
use crate::list::{ChangePayload, Item, ItemId};

/// Shared committed-sequence snapshot, swapped as a unit after each submit.
type SharedSnapshot = Arc<RwLock<Arc<[Item]>>>;

/// Callback that forwards every notification as a [`ListEvent`].
struct EventForwarder {
    events: Sender<ListEvent>,
}

impl ListUpdateCallback for EventForwarder {
    fn on_inserted(&mut self, position: usize) {
        let _ = self.events.send(ListEvent::Inserted { position });
    }

    fn on_removed(&mut self, position: usize) {
        let _ = self.events.send(ListEvent::Removed { position });
    }

    fn on_moved(&mut self, from: usize, to: usize) {
        let _ = self.events.send(ListEvent::Moved { from, to });
    }

    fn on_updated(&mut self, position: usize, payload: &ChangePayload) {
        let _ = self.events.send(ListEvent::Updated {
            position,
            payload: payload.clone(),
        });
    }
}

/// Cloneable handle for submitting sequences and reading the committed
/// state from any thread.
#[derive(Clone)]
pub struct ListHandle {
    commands: Sender<ListCommand>,
    snapshot: SharedSnapshot,
}

impl ListHandle {
    /// Queue a new sequence for reconciliation.
    ///
    /// Returns `false` if the list thread has already shut down.
    pub fn submit(&self, items: Vec<Item>) -> bool {
        self.commands.send(ListCommand::Submit(items)).is_ok()
    }

    /// The committed sequence as of the last completed submit.
    pub fn snapshot(&self) -> Arc<[Item]> {
        // A poisoned lock means the list thread panicked mid-swap of an
        // Arc; the stored value is still whole, so keep serving it.
        match self.snapshot.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Number of committed items.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the committed sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// A clone of the committed item at `position`.
    pub fn get(&self, position: usize) -> Result<Item, ListError> {
        let items = self.snapshot();
        items.get(position).cloned().ok_or(ListError::OutOfRange {
            position,
            len: items.len(),
        })
    }

    /// The stable identity key of the committed item at `position`.
    pub fn identity_key(&self, position: usize) -> Result<ItemId, ListError> {
        self.get(position).map(|item| item.id())
    }

    /// Resolve the item at `position` against the committed snapshot and
    /// hand it to an application-supplied click handler.
    pub fn dispatch_click<F>(&self, position: usize, handler: F) -> Result<(), ListError>
    where
        F: FnOnce(&Item),
    {
        let item = self.get(position)?;
        handler(&item);
        Ok(())
    }
}

/// Actor owning a [`ListController`] on a dedicated thread.
pub struct ListActor {
    /// Handle to the list thread.
    handle: Option<JoinHandle<()>>,
    /// Command sender kept for shutdown.
    commands: Sender<ListCommand>,
    /// Shared snapshot for handle construction.
    snapshot: SharedSnapshot,
}

impl ListActor {
    /// Spawn the list thread.
    ///
    /// # Arguments
    ///
    /// * `events` - Channel the render boundary drains for notifications.
    ///
    /// # Panics
    ///
    /// Panics if the thread cannot be spawned.
    pub fn spawn(events: Sender<ListEvent>) -> Self {
        let (commands_tx, commands_rx) = bounded::<ListCommand>(16);
        let snapshot: SharedSnapshot = Arc::new(RwLock::new(Arc::from(Vec::new())));
        let shared = Arc::clone(&snapshot);

        let handle = thread::Builder::new()
            .name("rebind-list".to_string())
            .spawn(move || {
                Self::run_loop(&commands_rx, &shared, &events);
            })
            .expect("Failed to spawn list thread");

        Self {
            handle: Some(handle),
            commands: commands_tx,
            snapshot,
        }
    }

    /// Create a handle for submitting and reading from other threads.
    pub fn handle(&self) -> ListHandle {
        ListHandle {
            commands: self.commands.clone(),
            snapshot: Arc::clone(&self.snapshot),
        }
    }

    /// Ask the list thread to stop and wait for it to finish.
    pub fn join(mut self) {
        let _ = self.commands.send(ListCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main list loop: serialize submits, publish snapshots.
    fn run_loop(
        commands: &Receiver<ListCommand>,
        shared: &SharedSnapshot,
        events: &Sender<ListEvent>,
    ) {
        let mut controller = ListController::new();
        let mut forwarder = EventForwarder {
            events: events.clone(),
        };

        while let Ok(command) = commands.recv() {
            match command {
                ListCommand::Submit(items) => {
                    let stats = controller.submit(items, &mut forwarder);
                    tracing::debug!(
                        len = controller.len(),
                        removed = stats.removed,
                        inserted = stats.inserted,
                        moved = stats.moved,
                        updated = stats.updated,
                        "submit reconciled"
                    );
                    match shared.write() {
                        Ok(mut guard) => *guard = controller.snapshot(),
                        Err(poisoned) => *poisoned.into_inner() = controller.snapshot(),
                    }
                }
                ListCommand::Shutdown => break,
            }
        }
    }
}

impl Drop for ListActor {
    fn drop(&mut self) {
        let _ = self.commands.send(ListCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ImageRef;
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    fn rose() -> Item {
        Item::new(1, "Rose").with_description("red")
    }

    fn tulip() -> Item {
        Item::new(2, "Tulip").with_description("yellow")
    }

    fn drain_until(events: &Receiver<ListEvent>, expected: usize) -> Vec<ListEvent> {
        let mut seen = Vec::new();
        while seen.len() < expected {
            match events.recv_timeout(Duration::from_secs(5)) {
                Ok(event) => seen.push(event),
                Err(err) => panic!("timed out waiting for events: {err}"),
            }
        }
        seen
    }

    #[test]
    fn test_submit_round_trip() {
        let (events_tx, events_rx) = unbounded();
        let actor = ListActor::spawn(events_tx);
        let handle = actor.handle();

        assert!(handle.submit(vec![rose(), tulip()]));
        let seen = drain_until(&events_rx, 2);
        assert_eq!(
            seen,
            vec![
                ListEvent::Inserted { position: 0 },
                ListEvent::Inserted { position: 1 },
            ]
        );

        // Events are sent before the snapshot swap; wait for the swap.
        while handle.len() != 2 {
            std::thread::yield_now();
        }
        assert_eq!(handle.get(0).unwrap().name(), "Rose");
        assert_eq!(handle.identity_key(1).unwrap(), ItemId::new(2));

        actor.join();
    }

    #[test]
    fn test_update_event_carries_payload() {
        let (events_tx, events_rx) = unbounded();
        let actor = ListActor::spawn(events_tx);
        let handle = actor.handle();

        handle.submit(vec![rose()]);
        drain_until(&events_rx, 1);

        handle.submit(vec![rose().with_image(ImageRef::new("rose.png"))]);
        let seen = drain_until(&events_rx, 1);
        match &seen[0] {
            ListEvent::Updated { position, payload } => {
                assert_eq!(*position, 0);
                assert_eq!(payload.image().map(ImageRef::as_str), Some("rose.png"));
            }
            event => panic!("expected update event, got {event:?}"),
        }

        actor.join();
    }

    #[test]
    fn test_readers_never_see_partial_state() {
        let (events_tx, events_rx) = unbounded();
        drop(events_rx); // Boundary gone; submits must still commit.
        let actor = ListActor::spawn(events_tx);
        let handle = actor.handle();

        // Valid snapshots: empty, or a strictly alternating pair. A mixed
        // read would surface as a length/content combination that was
        // never submitted.
        let a = vec![rose(), tulip()];
        let b = vec![tulip().with_description("gold")];

        let reader = {
            let handle = handle.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    let snapshot = handle.snapshot();
                    match snapshot.len() {
                        0 => {}
                        1 => assert_eq!(snapshot[0].id(), ItemId::new(2)),
                        2 => {
                            assert_eq!(snapshot[0].id(), ItemId::new(1));
                            assert_eq!(snapshot[1].id(), ItemId::new(2));
                        }
                        len => panic!("impossible snapshot length {len}"),
                    }
                }
            })
        };

        for _ in 0..50 {
            handle.submit(a.clone());
            handle.submit(b.clone());
        }

        reader.join().expect("reader thread panicked");
        actor.join();
    }

    #[test]
    fn test_out_of_range_through_handle() {
        let (events_tx, _events_rx) = unbounded();
        let actor = ListActor::spawn(events_tx);
        let handle = actor.handle();

        assert_eq!(
            handle.get(0).unwrap_err(),
            ListError::OutOfRange { position: 0, len: 0 }
        );

        actor.join();
    }
}
