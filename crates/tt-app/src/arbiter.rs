//! Single-writer arbitration for the mirror and the view state.
//!
//! Operations on one [`TodoId`] are strictly ordered: each holds that id's
//! mutex across its whole remote → mirror → view sequence, and tokio's
//! mutex hands the lock out in request order. Operations on different ids
//! run concurrently. A full list touches every id, so it takes the
//! store-wide gate exclusively while item operations share it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard, OwnedRwLockReadGuard, OwnedRwLockWriteGuard, RwLock};
use tt_core::ids::TodoId;

/// Per-id mutex plus the number of live leases on it.
type KeySlots = HashMap<TodoId, (Arc<Mutex<()>>, usize)>;

#[derive(Default)]
pub struct KeyedLocks {
    gate: Arc<RwLock<()>>,
    slots: Arc<StdMutex<KeySlots>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive access to every id.
    pub async fn lock_all(&self) -> OwnedRwLockWriteGuard<()> {
        Arc::clone(&self.gate).write_owned().await
    }

    /// Shared access for operations that do not target an existing id
    /// (create).
    pub async fn lock_shared(&self) -> OwnedRwLockReadGuard<()> {
        Arc::clone(&self.gate).read_owned().await
    }

    /// Exclusive access to `id`, shared with other ids.
    pub async fn lock_key(&self, id: &TodoId) -> KeyGuard {
        let gate = Arc::clone(&self.gate).read_owned().await;
        let (lease, slot) = {
            let mut slots = lock_slots(&self.slots);
            let (slot, leases) = slots.entry(id.clone()).or_default();
            *leases += 1;
            let lease = SlotLease {
                id: id.clone(),
                slots: Arc::clone(&self.slots),
            };
            (lease, Arc::clone(slot))
        };
        // Dropping this future while it waits still drops `lease`, which
        // frees the slot if nobody else wants it.
        let guard = slot.lock_owned().await;

        KeyGuard {
            _guard: guard,
            _lease: lease,
            _gate: gate,
        }
    }

    /// Number of ids with a live or pending lock.
    pub fn active_keys(&self) -> usize {
        lock_slots(&self.slots).len()
    }
}

fn lock_slots(slots: &StdMutex<KeySlots>) -> MutexGuard<'_, KeySlots> {
    // The map is only touched in short non-panicking sections.
    slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A holder's or waiter's claim on one id's slot.
struct SlotLease {
    id: TodoId,
    slots: Arc<StdMutex<KeySlots>>,
}

impl Drop for SlotLease {
    fn drop(&mut self) {
        let mut slots = lock_slots(&self.slots);
        if let Some((_, leases)) = slots.get_mut(&self.id) {
            *leases -= 1;
            if *leases == 0 {
                slots.remove(&self.id);
            }
        }
    }
}

/// Fields drop in order: the mutex guard, then the lease, then the gate.
pub struct KeyGuard {
    _guard: OwnedMutexGuard<()>,
    _lease: SlotLease,
    _gate: OwnedRwLockReadGuard<()>,
}
