//! Edit script: The ordered operations transforming one list into another.
//!
//! Positions in every operation refer to the sequence as progressively
//! transformed by the preceding operations: removals come first (highest
//! position first), then moves and insertions in ascending target order,
//! then in-place updates at final positions. A render boundary that applies
//! operations one at a time never has to re-map an index.

use super::item::Item;
use super::payload::ChangePayload;

/// One position-level operation of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// The entity at `position` is absent from the new sequence.
    Removed {
        /// Position in the sequence as transformed so far.
        position: usize,
    },

    /// A new entity appears at `position`.
    Inserted {
        /// Target position; also the entity's final position.
        position: usize,
    },

    /// An entity moved from one position to another.
    Moved {
        /// Source position in the sequence as transformed so far.
        from: usize,
        /// Target position; also the entity's final position.
        to: usize,
    },

    /// A matched entity's content changed in place.
    Updated {
        /// Final position of the entity.
        position: usize,
        /// The differing payload-eligible fields. May be empty when only
        /// the description changed; the boundary then fully rebinds.
        payload: ChangePayload,
    },
}

/// Operation counts for one diff, for observability and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    /// Number of removal operations.
    pub removed: usize,
    /// Number of insertion operations.
    pub inserted: usize,
    /// Number of move operations.
    pub moved: usize,
    /// Number of in-place update operations.
    pub updated: usize,
}

impl DiffStats {
    /// Total number of operations.
    #[inline]
    pub const fn total(&self) -> usize {
        self.removed + self.inserted + self.moved + self.updated
    }
}

/// Ordered list of operations transforming an old sequence into a new one.
///
/// Transient: computed by the diff engine, consumed by the notification
/// step, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditScript {
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Wrap a list of operations.
    #[inline]
    pub(crate) fn from_ops(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    /// The operations, in application order.
    #[inline]
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Number of operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the script contains no operations at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Count operations by kind.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for op in &self.ops {
            match op {
                EditOp::Removed { .. } => stats.removed += 1,
                EditOp::Inserted { .. } => stats.inserted += 1,
                EditOp::Moved { .. } => stats.moved += 1,
                EditOp::Updated { .. } => stats.updated += 1,
            }
        }
        stats
    }

    /// Replay the script against `old`, sourcing inserted rows from `new`.
    ///
    /// This is the reference implementation of the render boundary's
    /// application rules, including the empty-payload fallback to a full
    /// rebind. The result has the same ids in the same order as `new` with
    /// the same name and image; a row whose update carried a non-empty
    /// payload keeps its old description (the field is not
    /// payload-eligible).
    ///
    /// # Panics
    ///
    /// Panics if the script was not produced by diffing `old` against
    /// `new` (positions out of range).
    pub fn apply(&self, old: &[Item], new: &[Item]) -> Vec<Item> {
        let mut rows: Vec<Item> = old.to_vec();
        for op in &self.ops {
            match op {
                EditOp::Removed { position } => {
                    rows.remove(*position);
                }
                EditOp::Inserted { position } => {
                    // A settled target position is never disturbed by a
                    // later operation, so new[position] is the inserted row.
                    rows.insert(*position, new[*position].clone());
                }
                EditOp::Moved { from, to } => {
                    let row = rows.remove(*from);
                    rows.insert(*to, row);
                }
                EditOp::Updated { position, payload } => {
                    if payload.is_empty() {
                        // Full-rebind fallback.
                        rows[*position] = new[*position].clone();
                    } else {
                        payload.apply_to(&mut rows[*position]);
                    }
                }
            }
        }
        rows
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_script() {
        let script = EditScript::default();
        assert!(script.is_empty());
        assert_eq!(script.stats().total(), 0);
    }

    #[test]
    fn test_stats_counts_by_kind() {
        let script = EditScript::from_ops(vec![
            EditOp::Removed { position: 1 },
            EditOp::Inserted { position: 0 },
            EditOp::Inserted { position: 2 },
            EditOp::Moved { from: 3, to: 1 },
            EditOp::Updated {
                position: 0,
                payload: ChangePayload::default(),
            },
        ]);

        let stats = script.stats();
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.inserted, 2);
        assert_eq!(stats.moved, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.total(), 5);
    }
}
