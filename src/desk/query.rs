//! desk/query — linear lookups over the registry.
//!
//! Guest searches scan every room regardless of status: guest data is never
//! cleared on check-out, so a stale match on a Cleaning room is a
//! legitimate hit (e.g. "which room did this id card last stay in").

use crate::room::{Room, RoomStatus, RoomType};

use super::Desk;

impl Desk {
    /// Exact room-number lookup.
    pub fn find_by_number(&self, number: u32) -> Option<&Room> {
        self.registry.find(number)
    }

    /// All rooms whose guest name matches exactly.
    pub fn find_by_guest_name(&self, name: &str) -> Vec<&Room> {
        self.registry
            .iter()
            .filter(|r| r.guest.name == name)
            .collect()
    }

    /// All rooms whose guest id card matches exactly. Data-entry duplicates
    /// across rooms are all returned.
    pub fn find_by_id_card(&self, id_card: &str) -> Vec<&Room> {
        self.registry
            .iter()
            .filter(|r| r.guest.id_card == id_card)
            .collect()
    }

    /// Rooms currently bookable.
    pub fn available_rooms(&self) -> Vec<&Room> {
        self.registry
            .iter()
            .filter(|r| r.status == RoomStatus::Available)
            .collect()
    }

    /// Bookable rooms of one category (the registration flow lists these
    /// before asking the guest to pick a number).
    pub fn available_rooms_of(&self, kind: RoomType) -> Vec<&Room> {
        self.registry
            .iter()
            .filter(|r| r.status == RoomStatus::Available && r.kind == kind)
            .collect()
    }
}
