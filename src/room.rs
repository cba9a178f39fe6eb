//! Core data model: Room, Guest and the two small enums they hang off.
//!
//! A Room is the central entity of the registry. Its number, type and price
//! are fixed at creation; only status, guest data, the two timestamps and the
//! checked_out flag ever change afterwards. Guest data is overwritten
//! wholesale on each check-in and is never cleared on check-out, so stale
//! guest fields on a non-Available room are normal.
//!
//! On-disk field widths for guest text (50/20/15/100 bytes) are owned by the
//! snapshot codec; this module only stores Strings.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Room category, fixed at creation. Codes are stable (1..=5) and are what
/// the snapshot codec and the relational mirror store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum RoomType {
    StandardSingle,
    StandardDouble,
    DeluxeSingle,
    DeluxeDouble,
    Suite,
}

impl RoomType {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            RoomType::StandardSingle => 1,
            RoomType::StandardDouble => 2,
            RoomType::DeluxeSingle => 3,
            RoomType::DeluxeDouble => 4,
            RoomType::Suite => 5,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(RoomType::StandardSingle),
            2 => Some(RoomType::StandardDouble),
            3 => Some(RoomType::DeluxeSingle),
            4 => Some(RoomType::DeluxeDouble),
            5 => Some(RoomType::Suite),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomType::StandardSingle => "standard single",
            RoomType::StandardDouble => "standard double",
            RoomType::DeluxeSingle => "deluxe single",
            RoomType::DeluxeDouble => "deluxe double",
            RoomType::Suite => "suite",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room state. Available -> Occupied -> Cleaning is the only modeled path;
/// Maintenance is representable and counted, but no operation enters or
/// leaves it (out-of-band housekeeping).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            RoomStatus::Available => 0,
            RoomStatus::Occupied => 1,
            RoomStatus::Cleaning => 2,
            RoomStatus::Maintenance => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(RoomStatus::Available),
            1 => Some(RoomStatus::Occupied),
            2 => Some(RoomStatus::Cleaning),
            3 => Some(RoomStatus::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Occupant data. No identity of its own: it lives inside a Room and is
/// replaced as a whole on each new check-in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Guest {
    pub name: String,
    pub id_card: String,
    pub phone: String,
    pub address: String,
}

impl Guest {
    pub fn new(name: &str, id_card: &str, phone: &str, address: &str) -> Self {
        Self {
            name: name.to_string(),
            id_card: id_card.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }
}

/// One room record. Timestamps are unix seconds; 0 means "not set".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub number: u32,
    pub kind: RoomType,
    pub status: RoomStatus,
    pub price_per_night: f64,
    pub guest: Guest,
    pub check_in_time: i64,
    pub check_out_time: i64,
    /// Finalized for archival: removed from the live registry at the next
    /// reconciliation, appended to the archive file instead.
    pub checked_out: bool,
}

impl Room {
    /// Fresh Available room with empty guest data.
    pub fn new(number: u32, kind: RoomType, price_per_night: f64) -> Self {
        Self {
            number,
            kind,
            status: RoomStatus::Available,
            price_per_night,
            guest: Guest::default(),
            check_in_time: 0,
            check_out_time: 0,
            checked_out: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_roundtrip() {
        for t in [
            RoomType::StandardSingle,
            RoomType::StandardDouble,
            RoomType::DeluxeSingle,
            RoomType::DeluxeDouble,
            RoomType::Suite,
        ] {
            assert_eq!(RoomType::from_code(t.code()), Some(t));
        }
        assert_eq!(RoomType::from_code(0), None);
        assert_eq!(RoomType::from_code(6), None);
    }

    #[test]
    fn status_codes_roundtrip() {
        for s in [
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Cleaning,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(RoomStatus::from_code(s.code()), Some(s));
        }
        assert_eq!(RoomStatus::from_code(4), None);
    }

    #[test]
    fn new_room_is_available_and_clean() {
        let r = Room::new(101, RoomType::StandardSingle, 199.0);
        assert_eq!(r.status, RoomStatus::Available);
        assert!(!r.checked_out);
        assert_eq!(r.check_in_time, 0);
        assert_eq!(r.guest, Guest::default());
    }
}
