//! desk/sort — in-place bubble sort of the registry by a selectable key.
//!
//! Deliberately the naive algorithm: adjacent-pair passes swapping whole
//! records, the unsorted suffix shrinking each pass, stopping after a
//! swap-free pass. Inventory is tens of rooms; simplicity wins over
//! O(n log n) here.

use clap::ValueEnum;

use crate::registry::Registry;

use super::Desk;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Room number ascending.
    Number,
    /// Price per night ascending.
    Price,
    /// Check-in time ascending.
    CheckIn,
}

/// Sort the registry in place. Returns false (no-op) for 0 or 1 rooms.
pub fn bubble_sort(registry: &mut Registry, key: SortKey) -> bool {
    let rooms = registry.as_mut_slice();
    let n = rooms.len();
    if n < 2 {
        return false;
    }

    let mut boundary = n;
    loop {
        let mut swapped = false;
        for i in 0..boundary - 1 {
            let out_of_order = match key {
                SortKey::Number => rooms[i].number > rooms[i + 1].number,
                SortKey::Price => rooms[i].price_per_night > rooms[i + 1].price_per_night,
                SortKey::CheckIn => rooms[i].check_in_time > rooms[i + 1].check_in_time,
            };
            if out_of_order {
                rooms.swap(i, i + 1);
                swapped = true;
            }
        }
        boundary -= 1;
        if !swapped || boundary < 2 {
            break;
        }
    }
    true
}

impl Desk {
    /// Reorder the registry; the new order persists through the snapshot
    /// rewrite at shutdown.
    pub fn sort_rooms(&mut self, key: SortKey) -> bool {
        bubble_sort(&mut self.registry, key)
    }
}
