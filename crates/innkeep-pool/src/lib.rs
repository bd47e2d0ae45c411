//! Fixed pool of reservable rooms with per-room locking.
//!
//! Every [`Room`] carries its own `Mutex` guarding exactly its reservation
//! flag and occupant label. There is no pool-wide lock: operations on
//! different rooms never contend, and a pool scan locks rooms one at a
//! time, so its result is a non-atomic snapshot.
//!
//! Allocation claims a room by re-checking vacancy under that room's lock
//! (see [`Room::try_reserve`]). A room that was taken between the scan and
//! the claim is skipped, so concurrent allocations never double-book.

pub mod pool;
pub mod room;

pub use pool::{PoolStatus, RoomPool, format_vacancy_report};
pub use room::Room;
