use crate::types::RoomId;

/// Failures of room pool operations. All are recoverable by the caller.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("No rooms available for reservation")]
    NoneAvailable,

    #[error("Room {0} not found")]
    NotFound(RoomId),

    #[error("Room {0} is not reserved")]
    NotReserved(RoomId),

    #[error("Guest name must not be empty")]
    EmptyOccupant,

    #[error("Room {0} is listed more than once")]
    DuplicateRoom(RoomId),

    #[error("A pool needs at least one room")]
    EmptyPool,
}
