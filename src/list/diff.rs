//! Diff Engine: Compute the minimal edit script between two item lists.
//!
//! This module implements the core reconciliation logic:
//! 1. Match entities across the two sequences by identity (`id`)
//! 2. Turn unmatched old entities into removals, unmatched new ones into
//!    insertions, and reordered matches into moves
//! 3. For matched entities whose content changed, compute a field-level
//!    [`ChangePayload`] so the render boundary patches instead of rebinding
//!
//! The engine is a pure function of its two inputs: no side effects, no
//! shared mutable state, safe to invoke concurrently on independent input
//! pairs. Diagnostics are injectable observers that never influence the
//! output.

use std::collections::HashMap;

use crate::error::ListError;

use super::item::{Item, ItemId};
use super::payload::{ChangePayload, FieldMask};
use super::script::{EditOp, EditScript};

/// Pure observer of per-comparison decisions made by the diff engine.
///
/// All hooks default to no-ops and have no effect on control flow or
/// output; they exist for diagnostics only. The structural hooks and the
/// content hooks follow the same progressive-transformation discipline as
/// the emitted operations; [`DiffObserver::entity_matched`] alone reports
/// original-sequence coordinates, pairing a position in `old` with a
/// position in `new`.
#[allow(unused_variables)]
pub trait DiffObserver {
    /// Two snapshots were matched as the same entity.
    ///
    /// `old_position` indexes the old sequence as submitted, not as
    /// transformed so far; `new_position` indexes the new sequence (and
    /// is therefore also the entity's final position).
    fn entity_matched(&self, old_position: usize, new_position: usize) {}

    /// A matched entity's content is unchanged; no operation is emitted.
    fn unchanged(&self, position: usize) {}

    /// A payload-eligible field of a matched entity differs.
    fn field_changed(&self, position: usize, field: FieldMask) {}

    /// An entity is being removed.
    fn removed(&self, position: usize) {}

    /// An entity is being inserted.
    fn inserted(&self, position: usize) {}

    /// An entity is being moved.
    fn moved(&self, from: usize, to: usize) {}
}

/// The silent observer; [`diff`] uses it.
impl DiffObserver for () {}

/// Observer that emits every comparison decision as a `tracing` event at
/// TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceObserver;

impl DiffObserver for TraceObserver {
    fn entity_matched(&self, old_position: usize, new_position: usize) {
        tracing::trace!(old_position, new_position, "entity matched");
    }

    fn unchanged(&self, position: usize) {
        tracing::trace!(position, "content unchanged, no operation");
    }

    fn field_changed(&self, position: usize, field: FieldMask) {
        tracing::trace!(position, ?field, "field changed");
    }

    fn removed(&self, position: usize) {
        tracing::trace!(position, "removed");
    }

    fn inserted(&self, position: usize) {
        tracing::trace!(position, "inserted");
    }

    fn moved(&self, from: usize, to: usize) {
        tracing::trace!(from, to, "moved");
    }
}

/// Compute the edit script transforming `old` into `new`.
///
/// Precondition: ids are unique within each sequence. The engine does not
/// detect a violation; matching behavior is undefined in that case. Use
/// [`diff_checked`] to validate instead.
///
/// The returned script is minimal: an unchanged matched pair yields zero
/// operations, and a changed matched pair yields exactly one update whose
/// payload enumerates only the genuinely differing payload-eligible fields.
pub fn diff(old: &[Item], new: &[Item]) -> EditScript {
    diff_with(old, new, &())
}

/// [`diff`] with an injected diagnostic observer.
pub fn diff_with<O: DiffObserver>(old: &[Item], new: &[Item], observer: &O) -> EditScript {
    let old_index: HashMap<ItemId, usize> = old
        .iter()
        .enumerate()
        .map(|(position, item)| (item.id(), position))
        .collect();
    let new_index: HashMap<ItemId, usize> = new
        .iter()
        .enumerate()
        .map(|(position, item)| (item.id(), position))
        .collect();

    let mut ops = Vec::new();

    // Working order of entity ids, transformed alongside the emitted
    // operations so every position refers to the sequence as the render
    // boundary would see it at that point.
    let mut work: Vec<ItemId> = old.iter().map(Item::id).collect();

    // Pass 1: removals, highest position first so earlier indices stay
    // valid as rows disappear.
    for position in (0..work.len()).rev() {
        if !new_index.contains_key(&work[position]) {
            observer.removed(position);
            ops.push(EditOp::Removed { position });
            work.remove(position);
        }
    }

    // Pass 2: moves and insertions, walking target positions left to
    // right. Once a position is settled it is never disturbed again, so
    // every `to`/insert position is also a final position.
    for (target, item) in new.iter().enumerate() {
        let id = item.id();
        if work.get(target) == Some(&id) {
            continue;
        }
        // Only positions past `target` can still hold this id.
        match work[target..].iter().position(|&w| w == id) {
            Some(offset) => {
                let from = target + offset;
                observer.moved(from, target);
                ops.push(EditOp::Moved { from, to: target });
                let moved = work.remove(from);
                work.insert(target, moved);
            }
            None => {
                observer.inserted(target);
                ops.push(EditOp::Inserted { position: target });
                work.insert(target, id);
            }
        }
    }

    // Pass 3: content comparison for matched entities, at final positions.
    for (target, item) in new.iter().enumerate() {
        let Some(&old_position) = old_index.get(&item.id()) else {
            continue;
        };
        let previous = &old[old_position];
        observer.entity_matched(old_position, target);
        if previous.same_content(item) {
            observer.unchanged(target);
            continue;
        }
        let payload = ChangePayload::between(previous, item);
        for field in [FieldMask::NAME, FieldMask::IMAGE] {
            if payload.has(field) {
                observer.field_changed(target, field);
            }
        }
        // The payload may be empty here: description participates in the
        // content check but is not payload-eligible. The update is still
        // emitted and the boundary falls back to a full rebind.
        ops.push(EditOp::Updated {
            position: target,
            payload,
        });
    }

    EditScript::from_ops(ops)
}

/// [`diff`] that first validates the unique-id precondition on both
/// sequences, surfacing [`ListError::DuplicateIdentity`] instead of
/// undefined matching.
pub fn diff_checked(old: &[Item], new: &[Item]) -> Result<EditScript, ListError> {
    ensure_unique_ids(old)?;
    ensure_unique_ids(new)?;
    Ok(diff(old, new))
}

/// Check that no id appears twice within one sequence snapshot.
pub(crate) fn ensure_unique_ids(items: &[Item]) -> Result<(), ListError> {
    let mut seen = HashMap::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id(), ()).is_some() {
            return Err(ListError::DuplicateIdentity { id: item.id() });
        }
    }
    Ok(())
}
