//! Wall-clock sample and hand angle calculation.
//!
//! Angles are in degrees, clockwise from 12 o'clock, always in `[0, 360)`.

const NANOS_PER_SEC: u32 = 1_000_000_000;
const SECS_PER_DAY: u32 = 86_400;
const SECS_PER_HALF_DAY: u32 = 43_200;

/// A decomposed 12-hour clock reading.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ClockTime {
    hour: u8,   // 0-11
    minute: u8, // 0-59
    second: u8, // 0-59
    nanos: u32, // 0-999_999_999
}

/// Rotation of each hand for one `ClockTime`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0, second: 0, nanos: 0 };

    /// Build a reading, carrying overflow upwards.
    ///
    /// `nanos >= 1e9` carries into the seconds, seconds into minutes, minutes into
    /// hours, and the hour wraps on a 12-hour dial. 24-hour input is accepted.
    pub fn new(hour: u8, minute: u8, second: u8, nanos: u32) -> Self {
        let carry = nanos / NANOS_PER_SEC;
        let secs = (hour as u32) * 3600 + (minute as u32) * 60 + second as u32 + carry;
        Self::from_seconds_of_day(secs, nanos % NANOS_PER_SEC)
    }

    /// Reading from seconds since midnight (any value, wraps per 12 hours).
    pub fn from_seconds_of_day(secs: u32, nanos: u32) -> Self {
        // carry from nanos is at most 4 s
        let secs = (secs % SECS_PER_HALF_DAY + nanos / NANOS_PER_SEC) % SECS_PER_HALF_DAY;
        ClockTime {
            hour: (secs / 3600) as u8,
            minute: ((secs % 3600) / 60) as u8,
            second: (secs % 60) as u8,
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    /// Reading from the software clock: UTC seconds since 1970-01-01 plus millis.
    pub fn from_unix(ts: u32, millis: u16) -> Self {
        let secs = ts % SECS_PER_DAY;
        Self::from_seconds_of_day(secs, (millis as u32).min(999) * 1_000_000)
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// Seconds within the minute, including the sub-second part.
    pub fn fractional_seconds(&self) -> f64 {
        self.second as f64 + self.nanos as f64 / NANOS_PER_SEC as f64
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        ClockTime::MIDNIGHT
    }
}

/// Hour, minute and second hand rotation for `t`.
pub fn hand_angles(t: &ClockTime) -> HandAngles {
    let s = t.fractional_seconds();
    let m = t.minute as f64;
    let h = t.hour as f64;

    HandAngles {
        hour: wrap_degrees((h + m / 60.0 + s / 3600.0) / 12.0 * 360.0),
        minute: wrap_degrees((m + s / 60.0) / 60.0 * 360.0),
        second: wrap_degrees(s / 60.0 * 360.0),
    }
}

// f32 rounding can land exactly on 360 just before the carry
fn wrap_degrees(deg: f64) -> f32 {
    let d = deg as f32;
    if d >= 360.0 {
        d - 360.0
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32, eps: f32) -> bool {
        libm::fabsf(a - b) <= eps
    }

    #[test]
    fn quarter_past_three() {
        let a = hand_angles(&ClockTime::new(3, 15, 0, 0));
        assert!(close(a.hour, 97.5, 1e-4));
        assert!(close(a.minute, 90.0, 1e-4));
        assert!(close(a.second, 0.0, 1e-4));
    }

    #[test]
    fn hour_angle_on_the_hour() {
        for h in 0..12u8 {
            let a = hand_angles(&ClockTime::new(h, 0, 0, 0));
            assert!(close(a.hour, a.minute / 12.0 + 30.0 * h as f32, 1e-4));
        }
    }

    #[test]
    fn second_hand_just_before_the_minute() {
        let a = hand_angles(&ClockTime::new(0, 0, 59, 999_000_000));
        assert!(close(a.second, 359.99, 0.02));
    }

    #[test]
    fn full_second_of_nanos_carries_to_zero() {
        let t = ClockTime::new(10, 4, 59, 1_000_000_000);
        assert_eq!(t, ClockTime::new(10, 5, 0, 0));
        assert_eq!(hand_angles(&t).second, 0.0);
    }

    #[test]
    fn angles_stay_below_full_turn() {
        let t = ClockTime::new(11, 59, 59, 999_999_999);
        let a = hand_angles(&t);
        for v in [a.hour, a.minute, a.second] {
            assert!((0.0..360.0).contains(&v), "{v}");
        }
    }

    #[test]
    fn carry_wraps_the_dial() {
        assert_eq!(ClockTime::new(11, 59, 59, 1_000_000_000), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::new(15, 0, 0, 0).hour(), 3);
    }

    #[test]
    fn unix_time_of_day() {
        // 2024-01-01 13:45:30 UTC
        let t = ClockTime::from_unix(1_704_116_730, 250);
        assert_eq!((t.hour(), t.minute(), t.second()), (1, 45, 30));
        assert_eq!(t.nanos(), 250_000_000);
    }

    #[test]
    fn largest_seconds_of_day_wrap_without_overflow() {
        // u32::MAX % 43200 = 23295, plus the 1 s carried out of the nanos
        let t = ClockTime::from_seconds_of_day(u32::MAX, 1_500_000_000);
        assert_eq!((t.hour(), t.minute(), t.second()), (6, 28, 16));
        assert_eq!(t.nanos(), 500_000_000);
    }
}
