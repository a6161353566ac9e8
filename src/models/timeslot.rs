//! Appointment timeslot model.
//!
//! The clinic day is a fixed grid of twelve half-hour slots in two shifts:
//!
//! | Codes | Shift | Start times |
//! |-------|-------|-------------|
//! | 1–6 | Morning | 9:00, 9:30 … 11:30 AM |
//! | 7–12 | Afternoon | 1:00, 1:30 … 3:30 PM |
//!
//! A `Timeslot` can only be built from a grid position, so the code
//! mapping is a bijection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

const SLOTS_PER_SHIFT: u8 = 6;
const MORNING_START_HOUR: u32 = 9;
const AFTERNOON_START_HOUR: u32 = 13;
const SLOT_MINUTES: u32 = 30;

/// Lowest valid slot code.
pub const MIN_SLOT_CODE: u8 = 1;
/// Highest valid slot code.
pub const MAX_SLOT_CODE: u8 = 2 * SLOTS_PER_SHIFT;

/// A half-hour appointment slot.
///
/// Ordered by (hour, minute), which matches ordering by code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Timeslot {
    hour: u32,
    minute: u32,
}

impl Timeslot {
    /// Builds the slot for a code in 1–12.
    pub fn from_code(code: u8) -> Result<Self, ModelError> {
        if !(MIN_SLOT_CODE..=MAX_SLOT_CODE).contains(&code) {
            return Err(ModelError::InvalidTimeslot(code.to_string()));
        }
        let index = u32::from(code - 1);
        let shift_len = u32::from(SLOTS_PER_SHIFT);
        let (start_hour, offset) = if index < shift_len {
            (MORNING_START_HOUR, index)
        } else {
            (AFTERNOON_START_HOUR, index - shift_len)
        };
        let minutes = offset * SLOT_MINUTES;
        Ok(Self {
            hour: start_hour + minutes / 60,
            minute: minutes % 60,
        })
    }

    /// Builds a slot from a wall-clock time that lies on the grid.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ModelError> {
        Self::all()
            .find(|s| s.hour == hour && s.minute == minute)
            .ok_or(ModelError::OffGridTimeslot { hour, minute })
    }

    /// All twelve slots in order.
    pub fn all() -> impl Iterator<Item = Timeslot> {
        (MIN_SLOT_CODE..=MAX_SLOT_CODE).filter_map(|c| Self::from_code(c).ok())
    }

    /// Grid code (1–12).
    pub fn code(&self) -> u8 {
        let shift_start = if self.hour >= AFTERNOON_START_HOUR {
            AFTERNOON_START_HOUR
        } else {
            MORNING_START_HOUR
        };
        let offset = ((self.hour - shift_start) * 60 + self.minute) / SLOT_MINUTES;
        let base = if shift_start == AFTERNOON_START_HOUR {
            SLOTS_PER_SHIFT
        } else {
            0
        };
        // offset < 6 for every constructible slot
        base + offset as u8 + 1
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for Timeslot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        let period = if self.hour >= 12 { "PM" } else { "AM" };
        write!(f, "{}:{:02} {}", display_hour, self.minute, period)
    }
}

impl FromStr for Timeslot {
    type Err = ModelError;

    /// Parses a slot code such as `"7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u8 = s
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidTimeslot(s.to_string()))?;
        Self::from_code(code)
    }
}

impl TryFrom<u8> for Timeslot {
    type Error = ModelError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<Timeslot> for u8 {
    fn from(slot: Timeslot) -> Self {
        slot.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in MIN_SLOT_CODE..=MAX_SLOT_CODE {
            assert_eq!(Timeslot::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_grid_boundaries() {
        let first = Timeslot::from_code(1).unwrap();
        assert_eq!((first.hour(), first.minute()), (9, 0));

        let last_morning = Timeslot::from_code(6).unwrap();
        assert_eq!((last_morning.hour(), last_morning.minute()), (11, 30));

        let first_afternoon = Timeslot::from_code(7).unwrap();
        assert_eq!((first_afternoon.hour(), first_afternoon.minute()), (13, 0));

        let last = Timeslot::from_code(12).unwrap();
        assert_eq!((last.hour(), last.minute()), (15, 30));
    }

    #[test]
    fn test_out_of_range_codes() {
        assert!(Timeslot::from_code(0).is_err());
        assert!(Timeslot::from_code(13).is_err());
        assert!("abc".parse::<Timeslot>().is_err());
        assert_eq!("12".parse::<Timeslot>().unwrap().code(), 12);
    }

    #[test]
    fn test_new_requires_grid_time() {
        assert_eq!(Timeslot::new(10, 30).unwrap().code(), 4);
        assert_eq!(
            Timeslot::new(12, 0).unwrap_err(),
            ModelError::OffGridTimeslot { hour: 12, minute: 0 }
        );
        assert!(Timeslot::new(9, 15).is_err());
    }

    #[test]
    fn test_order_matches_code() {
        let slots: Vec<Timeslot> = Timeslot::all().collect();
        assert_eq!(slots.len(), 12);
        assert!(slots.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Timeslot::from_code(1).unwrap().to_string(), "9:00 AM");
        assert_eq!(Timeslot::from_code(6).unwrap().to_string(), "11:30 AM");
        assert_eq!(Timeslot::from_code(8).unwrap().to_string(), "1:30 PM");
    }
}
