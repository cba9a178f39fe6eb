//! registry — the in-memory working set of rooms for one session.
//!
//! An owned growable sequence with linear lookups. Inventory is tens of
//! rooms, so O(n) scans are fine everywhere. Ordering is insertion order
//! until a sort pass rewrites it, and both persistence streams are written
//! in traversal order, so the order here is meaningful state.
//!
//! Uniqueness of room numbers is the seeder's responsibility, not enforced
//! here.

use crate::room::Room;

#[derive(Debug, Default)]
pub struct Registry {
    rooms: Vec<Room>,
}

impl Registry {
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Append a room at the end.
    pub fn add(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// First room with a matching number, front-to-back.
    pub fn find(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.number == number)
    }

    pub fn find_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.number == number)
    }

    /// Remove the first match; None if absent.
    pub fn remove(&mut self, number: u32) -> Option<Room> {
        let idx = self.rooms.iter().position(|r| r.number == number)?;
        Some(self.rooms.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Room> {
        self.rooms.iter_mut()
    }

    pub fn retain<F: FnMut(&Room) -> bool>(&mut self, f: F) {
        self.rooms.retain(f);
    }

    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Room] {
        &mut self.rooms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl FromIterator<Room> for Registry {
    fn from_iter<I: IntoIterator<Item = Room>>(iter: I) -> Self {
        Self {
            rooms: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{Room, RoomType};

    fn reg3() -> Registry {
        let mut reg = Registry::new();
        reg.add(Room::new(101, RoomType::StandardSingle, 199.0));
        reg.add(Room::new(201, RoomType::StandardDouble, 299.0));
        reg.add(Room::new(501, RoomType::Suite, 899.0));
        reg
    }

    #[test]
    fn add_preserves_insertion_order() {
        let reg = reg3();
        let numbers: Vec<u32> = reg.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![101, 201, 501]);
    }

    #[test]
    fn find_and_remove() {
        let mut reg = reg3();
        assert_eq!(reg.find(201).map(|r| r.number), Some(201));
        assert!(reg.find(999).is_none());

        let gone = reg.remove(201).expect("201 present");
        assert_eq!(gone.number, 201);
        assert_eq!(reg.len(), 2);
        // removing an absent number is a no-op
        assert!(reg.remove(201).is_none());
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn find_returns_first_match() {
        // duplicate numbers are not rejected; find must return the first
        let mut reg = Registry::new();
        let mut a = Room::new(300, RoomType::DeluxeSingle, 399.0);
        a.price_per_night = 1.0;
        let mut b = Room::new(300, RoomType::DeluxeSingle, 399.0);
        b.price_per_night = 2.0;
        reg.add(a);
        reg.add(b);
        assert_eq!(reg.find(300).map(|r| r.price_per_night), Some(1.0));
    }
}
