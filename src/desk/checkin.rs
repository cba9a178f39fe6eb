//! desk/checkin — guest registration.

use log::info;

use crate::errors::DeskError;
use crate::room::{Guest, Room, RoomStatus};
use crate::util::now_secs;

use super::Desk;

impl Desk {
    /// Check a guest into an Available room. Preconditions are verified
    /// before anything is touched, so a rejected check-in leaves the room
    /// exactly as it was. On success the guest record is overwritten
    /// wholesale, the room becomes Occupied and the mirror gets a
    /// fire-and-forget INSERT.
    pub fn check_in(&mut self, number: u32, guest: Guest) -> Result<&Room, DeskError> {
        let now = now_secs();
        let room = self
            .registry
            .find_mut(number)
            .ok_or(DeskError::RoomNotFound(number))?;
        if room.status != RoomStatus::Available {
            return Err(DeskError::RoomUnavailable {
                number,
                status: room.status,
            });
        }

        room.guest = guest;
        room.status = RoomStatus::Occupied;
        room.check_in_time = now;
        room.checked_out = false;

        info!("checked in guest '{}' to room {}", room.guest.name, number);
        self.mirror.insert(room);

        Ok(&*room)
    }
}
