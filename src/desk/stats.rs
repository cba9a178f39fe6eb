//! desk/stats — occupancy statistics, one pass over the registry.

use serde::Serialize;

use crate::registry::Registry;
use crate::room::RoomStatus;
use crate::util::{now_secs, whole_days};

use super::Desk;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub cleaning: usize,
    pub maintenance: usize,
    /// Accrued revenue estimate: price_per_night x whole days since
    /// check-in, summed over Occupied rooms. Partial days are not billed.
    pub revenue: f64,
    /// occupied / total * 100; None for an empty registry.
    pub occupancy_rate: Option<f64>,
}

/// Tally the registry as of `now` (unix seconds).
pub fn stats_at(registry: &Registry, now: i64) -> Stats {
    let mut s = Stats::default();
    for room in registry.iter() {
        s.total += 1;
        match room.status {
            RoomStatus::Available => s.available += 1,
            RoomStatus::Occupied => s.occupied += 1,
            RoomStatus::Cleaning => s.cleaning += 1,
            RoomStatus::Maintenance => s.maintenance += 1,
        }
        if room.status == RoomStatus::Occupied {
            s.revenue += room.price_per_night * whole_days(room.check_in_time, now) as f64;
        }
    }
    if s.total > 0 {
        s.occupancy_rate = Some(s.occupied as f64 / s.total as f64 * 100.0);
    }
    s
}

impl Desk {
    pub fn stats(&self) -> Stats {
        stats_at(&self.registry, now_secs())
    }
}
