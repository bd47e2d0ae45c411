//! Shared types and the error taxonomy for the room pool.
//! Independent crate with no internal innkeep dependencies.

pub mod error;
pub mod types;

pub use error::PoolError;
pub use types::{OutputFormat, RoomId, RoomView};
