//! inventory — bulk initial room generation.
//!
//! Rooms are only ever created here (or loaded back from a snapshot); the
//! front-desk session itself never mints new room numbers.

use crate::room::{Room, RoomType};

/// The stock floor plan: 33 rooms, all Available.
///
/// 101-110 standard single @199, 201-210 standard double @299,
/// 301-305 deluxe single @399, 401-405 deluxe double @499,
/// 501-503 suite @899.
pub fn default_inventory() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(33);
    for n in 101..=110 {
        rooms.push(Room::new(n, RoomType::StandardSingle, 199.0));
    }
    for n in 201..=210 {
        rooms.push(Room::new(n, RoomType::StandardDouble, 299.0));
    }
    for n in 301..=305 {
        rooms.push(Room::new(n, RoomType::DeluxeSingle, 399.0));
    }
    for n in 401..=405 {
        rooms.push(Room::new(n, RoomType::DeluxeDouble, 499.0));
    }
    for n in 501..=503 {
        rooms.push(Room::new(n, RoomType::Suite, 899.0));
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomStatus;
    use std::collections::HashSet;

    #[test]
    fn default_inventory_shape() {
        let rooms = default_inventory();
        assert_eq!(rooms.len(), 33);

        let numbers: HashSet<u32> = rooms.iter().map(|r| r.number).collect();
        assert_eq!(numbers.len(), 33, "room numbers must be unique");

        assert!(rooms.iter().all(|r| r.status == RoomStatus::Available));
        assert!(rooms.iter().all(|r| r.price_per_night > 0.0));

        let suites = rooms.iter().filter(|r| r.kind == RoomType::Suite).count();
        assert_eq!(suites, 3);
    }
}
