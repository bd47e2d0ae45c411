use innkeep_core::{PoolError, RoomId, RoomView};
use std::collections::HashSet;

use crate::room::Room;

/// Room numbers of the default hotel.
const DEFAULT_ROOMS: [u32; 5] = [101, 102, 103, 104, 105];

/// Fixed, ordered collection of rooms.
///
/// The sequence never changes after construction. Share it between the
/// foreground and the availability monitor with `Arc<RoomPool>`.
#[derive(Debug)]
pub struct RoomPool {
    rooms: Vec<Room>,
}

impl Default for RoomPool {
    fn default() -> Self {
        Self {
            rooms: DEFAULT_ROOMS
                .iter()
                .map(|&n| Room::new(RoomId(n)))
                .collect(),
        }
    }
}

/// Diagnostic snapshot of pool usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    pub capacity: usize,
    pub occupied: usize,
}

impl PoolStatus {
    pub fn free(&self) -> usize {
        self.capacity.saturating_sub(self.occupied)
    }

    pub fn is_full(&self) -> bool {
        self.free() == 0
    }
}

impl RoomPool {
    /// Build a pool from room numbers, keeping their order.
    ///
    /// Fails on an empty list or a repeated number.
    pub fn new<I>(ids: I) -> Result<Self, PoolError>
    where
        I: IntoIterator,
        I::Item: Into<RoomId>,
    {
        let mut seen = HashSet::new();
        let mut rooms = Vec::new();
        for id in ids {
            let id = id.into();
            if !seen.insert(id) {
                return Err(PoolError::DuplicateRoom(id));
            }
            rooms.push(Room::new(id));
        }
        if rooms.is_empty() {
            return Err(PoolError::EmptyPool);
        }
        Ok(Self { rooms })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Always `false` for a constructed pool; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(Room::id).collect()
    }

    fn find(&self, id: RoomId) -> Result<&Room, PoolError> {
        self.rooms
            .iter()
            .find(|room| room.id() == id)
            .ok_or(PoolError::NotFound(id))
    }

    fn vacant_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| !room.is_reserved())
    }

    /// Ids of the rooms that are unreserved right now, in pool order.
    ///
    /// Each room is locked individually while the list is built, so any
    /// room in the result may already have been reserved by the time the
    /// caller looks at it.
    pub fn scan_vacant(&self) -> Vec<RoomId> {
        self.vacant_rooms().map(Room::id).collect()
    }

    /// Reserve the first vacant room for `occupant`.
    ///
    /// Walks the vacant rooms in pool order and claims the first one whose
    /// vacancy still holds under its own lock. Surrounding whitespace in
    /// `occupant` is trimmed.
    pub fn allocate(&self, occupant: &str) -> Result<RoomId, PoolError> {
        let occupant = occupant.trim();
        if occupant.is_empty() {
            return Err(PoolError::EmptyOccupant);
        }

        for room in self.vacant_rooms() {
            if room.try_reserve(occupant) {
                tracing::debug!(room = %room.id(), guest = occupant, "room reserved");
                return Ok(room.id());
            }
            tracing::debug!(room = %room.id(), "room claimed concurrently, trying next");
        }

        tracing::debug!(guest = occupant, "no vacant room left");
        Err(PoolError::NoneAvailable)
    }

    /// Cancel the reservation on room `id`.
    pub fn cancel(&self, id: RoomId) -> Result<(), PoolError> {
        let room = self.find(id)?;
        if !room.release_if_reserved() {
            return Err(PoolError::NotReserved(id));
        }
        tracing::debug!(room = %id, "reservation cancelled");
        Ok(())
    }

    /// Snapshot of room `id`.
    pub fn inspect(&self, id: RoomId) -> Result<RoomView, PoolError> {
        self.find(id).map(Room::view)
    }

    /// Snapshots of every room, in pool order.
    pub fn views(&self) -> Vec<RoomView> {
        self.rooms.iter().map(Room::view).collect()
    }

    pub fn status(&self) -> PoolStatus {
        let occupied = self.rooms.iter().filter(|room| room.is_reserved()).count();
        PoolStatus {
            capacity: self.rooms.len(),
            occupied,
        }
    }
}

/// Format a vacancy summary for display.
pub fn format_vacancy_report(status: &PoolStatus, vacant: &[RoomId]) -> String {
    if vacant.is_empty() {
        return format!("all {} rooms occupied", status.capacity);
    }

    let ids: Vec<String> = vacant.iter().map(RoomId::to_string).collect();
    format!(
        "{} of {} rooms vacant: {}",
        vacant.len(),
        status.capacity,
        ids.join(", ")
    )
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod tests;
