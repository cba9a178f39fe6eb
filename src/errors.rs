//! Typed failures for front-desk operations.
//!
//! Every variant is command-scoped: the registry is left untouched and the
//! caller decides how to report it. Nothing here ever terminates the
//! process. A declined check-out confirmation is not an error at all — see
//! `CheckOutOutcome::Cancelled`.

use crate::room::RoomStatus;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeskError {
    #[error("room {0} not found")]
    RoomNotFound(u32),

    /// Check-in attempted against a room that is not Available.
    #[error("room {number} is not available (status: {status})")]
    RoomUnavailable { number: u32, status: RoomStatus },

    /// Check-out attempted against a room that is not Occupied.
    #[error("room {number} has no guest checked in (status: {status})")]
    RoomNotOccupied { number: u32, status: RoomStatus },
}
