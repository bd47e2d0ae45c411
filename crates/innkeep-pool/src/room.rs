use innkeep_core::{RoomId, RoomView};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Mutable reservation state of a room. `occupant` is non-empty iff `reserved`.
#[derive(Debug, Default)]
struct Occupancy {
    reserved: bool,
    occupant: String,
}

/// A single reservable room.
///
/// The identifier is fixed at construction; the reservation state lives
/// behind the room's own lock and is only touched through the methods below,
/// each of which holds the lock for the duration of one read or write.
pub struct Room {
    id: RoomId,
    state: Mutex<Occupancy>,
}

impl std::fmt::Debug for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.id)
            .field("reserved", &self.is_reserved())
            .finish()
    }
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            state: Mutex::new(Occupancy::default()),
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    // Writers assign both fields before the guard drops, so a poisoned lock
    // still holds a consistent state and is safe to recover.
    fn state(&self) -> MutexGuard<'_, Occupancy> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current reservation flag.
    pub fn is_reserved(&self) -> bool {
        self.state().reserved
    }

    /// Reserve the room for `occupant`, overwriting any prior reservation.
    ///
    /// `occupant` must be non-empty; [`crate::RoomPool`] validates this
    /// before calling in.
    pub fn reserve(&self, occupant: &str) {
        debug_assert!(!occupant.is_empty(), "occupant label must not be empty");
        let mut state = self.state();
        state.reserved = true;
        state.occupant = occupant.to_string();
    }

    /// Reserve the room only if it is vacant, checked under the same lock
    /// hold as the write. Returns `false` and leaves the room untouched when
    /// it is already reserved.
    pub fn try_reserve(&self, occupant: &str) -> bool {
        debug_assert!(!occupant.is_empty(), "occupant label must not be empty");
        let mut state = self.state();
        if state.reserved {
            return false;
        }
        state.reserved = true;
        state.occupant = occupant.to_string();
        true
    }

    /// Mark the room vacant and clear the occupant. Idempotent.
    pub fn release(&self) {
        let mut state = self.state();
        state.reserved = false;
        state.occupant.clear();
    }

    /// Release the room if it is reserved. Returns whether it was.
    pub(crate) fn release_if_reserved(&self) -> bool {
        let mut state = self.state();
        if !state.reserved {
            return false;
        }
        state.reserved = false;
        state.occupant.clear();
        true
    }

    pub fn view(&self) -> RoomView {
        let state = self.state();
        RoomView {
            id: self.id,
            reserved: state.reserved,
            occupant: state.reserved.then(|| state.occupant.clone()),
        }
    }
}
