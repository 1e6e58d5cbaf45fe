//! Optimistic status mutation with confirm/rollback
//!
//! A click writes the new status into the row immediately and yields a
//! [`StatusPatch`] to send. The row stays *pending* until the response:
//! success confirms the value, failure restores the last confirmed one.
//! When several patches for the same row overlap only the newest decides.

use crate::types::{ProcessRecord, ProcessStatus};
use std::collections::HashMap;

/// One `PATCH /processos/{id}/status` to issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPatch {
    pub seq: u64,
    pub id: i64,
    pub status: ProcessStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStatus {
    /// Last value the server acknowledged (or the fetched value)
    confirmed: ProcessStatus,
    /// Newest request in flight for this row
    latest_seq: u64,
}

/// Outcome of settling a patch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSettle {
    /// Newest request succeeded; row is no longer pending
    Confirmed { id: i64, status: ProcessStatus },
    /// Newest request failed; row restored to `restored`
    RolledBack {
        id: i64,
        attempted: ProcessStatus,
        restored: ProcessStatus,
    },
    /// An older request settled while a newer one is still in flight
    Superseded { id: i64 },
    /// The patch belongs to a previous fetch cycle
    Unknown,
}

/// Tracks rows with unconfirmed status changes
#[derive(Debug, Clone, Default)]
pub struct StatusMutator {
    next_seq: u64,
    pending: HashMap<i64, PendingStatus>,
}

impl StatusMutator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the three-way control click to `records` and return the patch.
    ///
    /// Returns `None` when no record has `id`.
    pub fn apply(
        &mut self,
        records: &mut [ProcessRecord],
        id: i64,
        clicked: ProcessStatus,
    ) -> Option<StatusPatch> {
        let record = records.iter_mut().find(|r| r.id == id)?;
        let previous = record.status;
        let next = previous.toggled_by(clicked);
        record.status = next;

        self.next_seq += 1;
        let seq = self.next_seq;
        self.pending
            .entry(id)
            .and_modify(|p| p.latest_seq = seq)
            .or_insert(PendingStatus { confirmed: previous, latest_seq: seq });

        tracing::debug!(id, from = %previous, to = %next, seq, "optimistic status change");
        Some(StatusPatch { seq, id, status: next })
    }

    /// Settle `patch` with the server outcome, reverting `records` on failure
    pub fn settle(
        &mut self,
        records: &mut [ProcessRecord],
        patch: StatusPatch,
        succeeded: bool,
    ) -> StatusSettle {
        let Some(entry) = self.pending.get_mut(&patch.id) else {
            return StatusSettle::Unknown;
        };

        if patch.seq != entry.latest_seq {
            if patch.seq > entry.latest_seq {
                return StatusSettle::Unknown;
            }
            if succeeded {
                entry.confirmed = patch.status;
            }
            return StatusSettle::Superseded { id: patch.id };
        }

        let confirmed = entry.confirmed;
        self.pending.remove(&patch.id);

        if succeeded {
            return StatusSettle::Confirmed { id: patch.id, status: patch.status };
        }

        if let Some(record) = records.iter_mut().find(|r| r.id == patch.id) {
            record.status = confirmed;
        }
        tracing::warn!(id = patch.id, attempted = %patch.status, restored = %confirmed, "status change rolled back");
        StatusSettle::RolledBack {
            id: patch.id,
            attempted: patch.status,
            restored: confirmed,
        }
    }

    pub fn is_pending(&self, id: i64) -> bool {
        self.pending.contains_key(&id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Forget in-flight patches; used when records are replaced by a refetch
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}
