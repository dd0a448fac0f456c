//! # Booking Availability Engine
//!
//! Pure conflict detection and slot computation for court bookings. The
//! engine never talks to the database: callers fetch the non-cancelled
//! bookings for one court and date and hand the snapshot in. Both entry
//! points are deterministic, side-effect free, and linear in the number of
//! bookings for the day.
//!
//! ## Overlap rule
//!
//! All ranges are half-open `[start, end)`. Two ranges conflict iff
//! `a.start < b.end && b.start < a.end`, so back-to-back bookings sharing
//! an endpoint never count as overlapping.
//!
//! ## Advisory, not authoritative
//!
//! A caller that fetches bookings, asks [`is_range_available`], and then
//! inserts a row is running a classic check-then-act race: two concurrent
//! callers can both pass the check before either insert lands. The engine's
//! answer is advisory. Writes that need the non-overlap invariant to hold
//! must serialize booking creation per court at the storage layer (see
//! `courtside_db::repositories::booking`).

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CourtsideError, CourtsideResult};

/// A minute-of-day wall clock value, parsed from zero-padded 24-hour
/// `"HH:MM"` strings.
///
/// Storing minutes instead of the raw string makes ordering and arithmetic
/// explicit; the `Ord` impl agrees with lexicographic comparison of the
/// rendered form, which is what the booking rows in the database use.
///
/// Values produced by [`TimeOfDay::add_minutes`] may pass midnight (slot
/// generation can tile past the end of the operating window); those render
/// with an hour of `24` or more and are never parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Builds a time-of-day from an hour/minute pair.
    pub fn new(hours: u16, minutes: u16) -> CourtsideResult<Self> {
        if hours >= 24 || minutes >= 60 {
            return Err(CourtsideError::Validation(format!(
                "Time out of range: {hours:02}:{minutes:02}"
            )));
        }
        Ok(Self(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Adds a duration in minutes. The result is allowed to run past
    /// midnight; slot generation relies on that. Saturates instead of
    /// wrapping, so an oversized duration can never produce a value below
    /// the operand.
    pub fn add_minutes(self, minutes: u16) -> Self {
        Self(self.0.saturating_add(minutes))
    }
}

impl FromStr for TimeOfDay {
    type Err = CourtsideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || CourtsideError::Validation(format!("Invalid time (expected HH:MM): {s:?}"));

        let (hh, mm) = s.split_once(':').ok_or_else(malformed)?;
        if hh.len() != 2 || mm.len() != 2 {
            return Err(malformed());
        }
        if !hh.bytes().chain(mm.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let hours: u16 = hh.parse().map_err(|_| malformed())?;
        let minutes: u16 = mm.parse().map_err(|_| malformed())?;

        Self::new(hours, minutes)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// A half-open `[start, end)` time range within one calendar day.
///
/// Construction rejects empty and inverted ranges, so every `TimeRange`
/// reaching the overlap predicate is well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> CourtsideResult<Self> {
        if start >= end {
            return Err(CourtsideError::Validation(format!(
                "Invalid time range: start {start} must be before end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses a `("HH:MM", "HH:MM")` pair, rejecting malformed strings and
    /// inverted ranges before any overlap computation runs.
    pub fn parse(start: &str, end: &str) -> CourtsideResult<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Half-open interval overlap; touching endpoints do not conflict.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One bookable window produced by [`available_slots`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// Upper bound for a slot duration; one full day.
pub const MAX_SLOT_DURATION_MINUTES: u16 = 24 * 60;

/// Operating-hours configuration for slot generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotConfig {
    /// Lower bound of generated slots.
    pub operating_start: TimeOfDay,
    /// Exclusive upper bound for slot *starts*. A slot whose start is
    /// inside the window is generated even if its end runs past this
    /// bound; downstream callers depend on that boundary behavior.
    pub operating_end: TimeOfDay,
    /// Fixed width of each candidate slot.
    pub slot_duration_minutes: u16,
}

impl SlotConfig {
    /// Builds a validated configuration: the operating window must be
    /// non-empty and the duration within `(0, MAX_SLOT_DURATION_MINUTES]`.
    /// Callers handing user-supplied overrides to [`available_slots`]
    /// should come through here.
    pub fn new(
        operating_start: TimeOfDay,
        operating_end: TimeOfDay,
        slot_duration_minutes: u16,
    ) -> CourtsideResult<Self> {
        if operating_start >= operating_end {
            return Err(CourtsideError::Validation(format!(
                "Invalid operating window: {operating_start} must be before {operating_end}"
            )));
        }
        if slot_duration_minutes == 0 || slot_duration_minutes > MAX_SLOT_DURATION_MINUTES {
            return Err(CourtsideError::Validation(format!(
                "Invalid slot duration: {slot_duration_minutes} minutes"
            )));
        }
        Ok(Self {
            operating_start,
            operating_end,
            slot_duration_minutes,
        })
    }
}

impl Default for SlotConfig {
    /// Venue operating hours default to 08:00-22:00 with hourly slots.
    fn default() -> Self {
        Self {
            operating_start: TimeOfDay(8 * 60),
            operating_end: TimeOfDay(22 * 60),
            slot_duration_minutes: 60,
        }
    }
}

/// Returns `true` iff `proposed` conflicts with none of the supplied
/// bookings.
///
/// `bookings` must be the complete non-cancelled set for the target court
/// and date; passing an empty set because a fetch failed would report a
/// busy court as free. Short-circuits on the first conflict found.
pub fn is_range_available(bookings: &[TimeRange], proposed: &TimeRange) -> bool {
    !bookings.iter().any(|booking| booking.overlaps(proposed))
}

/// Tiles the operating window with fixed-duration candidate slots and
/// returns, in chronological order, the ones no booking overlaps.
///
/// Candidates are contiguous and never overlap each other: the cursor
/// starts at `operating_start` and always advances to the previous
/// candidate's end, whether or not that candidate was free. The loop gates
/// only the slot start against `operating_end`, so the final slot may
/// extend past it when the duration does not evenly divide the window.
pub fn available_slots(bookings: &[TimeRange], config: &SlotConfig) -> Vec<Slot> {
    // A zero duration would never advance the cursor.
    if config.slot_duration_minutes == 0 {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut cursor = config.operating_start;

    while cursor < config.operating_end {
        let slot_end = cursor.add_minutes(config.slot_duration_minutes);
        let candidate = TimeRange {
            start: cursor,
            end: slot_end,
        };

        if is_range_available(bookings, &candidate) {
            slots.push(Slot {
                start_time: cursor,
                end_time: slot_end,
            });
        }

        cursor = slot_end;
    }

    slots
}
