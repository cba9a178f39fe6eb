//! desk/checkout — settling the bill and releasing the room to cleaning.
//!
//! Check-out is the one operation gated on an explicit confirmation from
//! the collaborator. A declined confirmation is a normal outcome, not an
//! error: nothing is mutated and the caller reports "cancelled".

use log::info;

use crate::errors::DeskError;
use crate::room::RoomStatus;
use crate::util::now_secs;

use super::Desk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutOutcome {
    Done,
    Cancelled,
}

impl Desk {
    /// Validate that `number` can be checked out right now and return the
    /// room for display. Collaborators call this before prompting for
    /// confirmation.
    pub fn check_out_preview(&self, number: u32) -> Result<&crate::room::Room, DeskError> {
        let room = self
            .registry
            .find(number)
            .ok_or(DeskError::RoomNotFound(number))?;
        if room.status != RoomStatus::Occupied {
            return Err(DeskError::RoomNotOccupied {
                number,
                status: room.status,
            });
        }
        Ok(room)
    }

    /// Check out an Occupied room. With `Confirmation::Declined` nothing is
    /// mutated and `Cancelled` is returned. Otherwise the room moves to
    /// Cleaning, is flagged for archival and the mirror gets a
    /// fire-and-forget UPDATE. Guest data stays on the room.
    pub fn check_out(
        &mut self,
        number: u32,
        confirmation: Confirmation,
    ) -> Result<CheckOutOutcome, DeskError> {
        let now = now_secs();
        let room = self
            .registry
            .find_mut(number)
            .ok_or(DeskError::RoomNotFound(number))?;
        if room.status != RoomStatus::Occupied {
            return Err(DeskError::RoomNotOccupied {
                number,
                status: room.status,
            });
        }
        if confirmation == Confirmation::Declined {
            info!("check-out of room {} cancelled", number);
            return Ok(CheckOutOutcome::Cancelled);
        }

        room.status = RoomStatus::Cleaning;
        room.check_out_time = now;
        room.checked_out = true;

        info!("checked out room {}, now cleaning", number);
        self.mirror.update(room);

        Ok(CheckOutOutcome::Done)
    }
}
