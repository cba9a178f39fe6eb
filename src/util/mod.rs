//! util — shared helpers.
//!
//! Contains:
//! - now_secs(): current unix time in seconds (i64).
//! - whole_days(): elapsed whole days between two unix timestamps.

/// Current unix time in seconds.
#[inline]
pub fn now_secs() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    now.as_secs() as i64
}

pub const SECS_PER_DAY: i64 = 24 * 3600;

/// Whole days elapsed from `from` to `to` (integer division, partial days
/// dropped). Never negative.
#[inline]
pub fn whole_days(from: i64, to: i64) -> i64 {
    (to - from).max(0) / SECS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_secs_monotonic_nonzero() {
        let a = now_secs();
        let b = now_secs();
        assert!(a > 0);
        assert!(b >= a);
    }

    #[test]
    fn whole_days_floors() {
        assert_eq!(whole_days(0, SECS_PER_DAY - 1), 0);
        assert_eq!(whole_days(0, SECS_PER_DAY), 1);
        assert_eq!(whole_days(0, 3 * SECS_PER_DAY + 5), 3);
        // clock skew: check-in "in the future" bills nothing
        assert_eq!(whole_days(100, 50), 0);
    }
}
