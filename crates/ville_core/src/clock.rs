//! Game clock and production timing.
//!
//! Single source of truth for converting in-game (hour, minute) values
//! into normalized times, time-of-day buckets, formatted strings, and
//! speed-adjusted production durations.
//!
//! Invalid numeric inputs are clamped to safe defaults rather than
//! rejected, so a confused caller can never crash the game loop. Each
//! clamp emits a `tracing::warn!` and nothing else; diagnostics never
//! affect return values. Hosts that want hard failures at their own
//! boundary can use [`GameTime::try_new`] instead.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::math::{fixed_serde, Fixed};

/// Minutes in one in-game hour.
pub const MINUTES_PER_HOUR: u32 = 60;

/// Hours in one in-game day.
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes in one in-game day.
pub const MINUTES_PER_DAY: u32 = MINUTES_PER_HOUR * HOURS_PER_DAY;

/// Coarse time-of-day bucket derived from the hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    /// 05:00 to 09:59.
    Morning,
    /// 10:00 to 16:59.
    Day,
    /// 17:00 to 20:59.
    Evening,
    /// 21:00 to 04:59.
    Night,
}

impl TimeOfDay {
    /// Derive the bucket for a given hour (0-23).
    #[must_use]
    pub const fn from_hour(hour: u8) -> Self {
        match hour {
            5..=9 => Self::Morning,
            10..=16 => Self::Day,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }
}

/// Check whether an hour falls in the night bucket (>= 21 or < 5).
#[must_use]
pub const fn is_night(hour: u8) -> bool {
    hour >= 21 || hour < 5
}

/// A normalized in-game clock value.
///
/// Holds only the hour and minute; everything else (total minutes,
/// time-of-day, formatted strings) is derived, so the invariant
/// `total_minutes == hours * 60 + minutes` holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameTime {
    hours: u8,
    minutes: u8,
}

impl GameTime {
    /// Create a game time, normalizing out-of-range input.
    ///
    /// Hours wrap mod 24 and minutes wrap mod 60 independently - no
    /// carry from minutes into hours, matching how callers hand the
    /// clock around. Out-of-range input is logged and normalized.
    #[must_use]
    pub fn new(hours: i64, minutes: i64) -> Self {
        if !(0..i64::from(HOURS_PER_DAY)).contains(&hours)
            || !(0..i64::from(MINUTES_PER_HOUR)).contains(&minutes)
        {
            tracing::warn!(hours, minutes, "clock input out of range, normalizing");
        }
        Self {
            hours: hours.rem_euclid(i64::from(HOURS_PER_DAY)) as u8,
            minutes: minutes.rem_euclid(i64::from(MINUTES_PER_HOUR)) as u8,
        }
    }

    /// Create a game time, rejecting out-of-range input.
    pub fn try_new(hours: i64, minutes: i64) -> Result<Self> {
        if !(0..i64::from(HOURS_PER_DAY)).contains(&hours) {
            return Err(GameError::InvalidClock(format!("hours out of range: {hours}")));
        }
        if !(0..i64::from(MINUTES_PER_HOUR)).contains(&minutes) {
            return Err(GameError::InvalidClock(format!(
                "minutes out of range: {minutes}"
            )));
        }
        Ok(Self {
            hours: hours as u8,
            minutes: minutes as u8,
        })
    }

    /// Derive a game time from an absolute minute count.
    ///
    /// Negative input is clamped to zero. Minutes past the end of a day
    /// wrap around silently; day rollover is not modeled here.
    #[must_use]
    pub fn from_total_minutes(total: i64) -> Self {
        let total = if total < 0 {
            tracing::warn!(total, "negative minute count clamped to zero");
            0
        } else {
            total
        };
        let hours = (total / i64::from(MINUTES_PER_HOUR)) % i64::from(HOURS_PER_DAY);
        let minutes = total % i64::from(MINUTES_PER_HOUR);
        Self {
            hours: hours as u8,
            minutes: minutes as u8,
        }
    }

    /// Hour component (0-23).
    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// Minute component (0-59).
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minutes since midnight (0-1439).
    #[must_use]
    pub const fn total_minutes(self) -> u32 {
        self.hours as u32 * MINUTES_PER_HOUR + self.minutes as u32
    }

    /// Time-of-day bucket for this clock value.
    #[must_use]
    pub const fn time_of_day(self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hours)
    }

    /// Whether this clock value falls at night.
    #[must_use]
    pub const fn is_night(self) -> bool {
        is_night(self.hours)
    }

    /// 12-hour clock string, e.g. `8:05 am` or `11:30 pm`.
    #[must_use]
    pub fn format_12h(self) -> String {
        let h12 = match self.hours % 12 {
            0 => 12,
            h => h,
        };
        let period = if self.hours < 12 { "am" } else { "pm" };
        format!("{}:{:02} {}", h12, self.minutes, period)
    }

    /// 24-hour clock string, e.g. `08:05`.
    #[must_use]
    pub fn format_24h(self) -> String {
        format!("{:02}:{:02}", self.hours, self.minutes)
    }

    /// Add a non-negative number of minutes and re-normalize.
    ///
    /// Negative deltas are clamped to zero. Wraps past midnight without
    /// signaling a new day - callers that care about day rollover must
    /// track it themselves.
    #[must_use]
    pub fn add_minutes(self, delta: i64) -> Self {
        let delta = if delta < 0 {
            tracing::warn!(delta, "negative minute delta clamped to zero");
            0
        } else {
            delta
        };
        let total = i64::from(self.total_minutes()) + delta;
        Self::from_total_minutes(total % i64::from(MINUTES_PER_DAY))
    }
}

impl Default for GameTime {
    /// The canonical game start: 08:00.
    fn default() -> Self {
        Self { hours: 8, minutes: 0 }
    }
}

impl std::fmt::Display for GameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_24h())
    }
}

/// Where a clock reading comes from.
///
/// Hosts sometimes track an absolute minute counter and sometimes an
/// (hour, minute) pair. An explicit minute counter always wins, which
/// this enum makes unambiguous at the type level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockSource {
    /// An absolute count of minutes since midnight.
    TotalMinutes(i64),
    /// An (hour, minute) pair.
    HourMinute {
        /// Hour component.
        hours: i64,
        /// Minute component.
        minutes: i64,
    },
}

impl Default for ClockSource {
    fn default() -> Self {
        Self::HourMinute { hours: 8, minutes: 0 }
    }
}

impl From<ClockSource> for GameTime {
    fn from(source: ClockSource) -> Self {
        match source {
            ClockSource::TotalMinutes(total) => Self::from_total_minutes(total),
            ClockSource::HourMinute { hours, minutes } => Self::new(hours, minutes),
        }
    }
}

/// Convert an (hour, minute) pair to total minutes.
///
/// Negative components are clamped to zero. The result is *not* wrapped
/// to a single day, so `to_total_minutes(25, 0)` is 1500.
#[must_use]
pub fn to_total_minutes(hours: i64, minutes: i64) -> i64 {
    let hours = hours.max(0);
    let minutes = minutes.max(0);
    hours * i64::from(MINUTES_PER_HOUR) + minutes
}

/// Game speed multiplier dividing production durations.
///
/// Higher speed means faster production. Clamped to a minimum of 0.1
/// at construction so a zero or negative multiplier can never stretch
/// a duration to infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeSpeed(#[serde(with = "fixed_serde")] Fixed);

impl TimeSpeed {
    /// Smallest accepted multiplier (0.1, rounded up one bit so that
    /// `base / MIN` never exceeds ten times the base duration).
    pub const MIN: Self = Self(Fixed::from_bits((1i64 << 32) / 10 + 1));

    /// Normal play speed (1x).
    pub const NORMAL: Self = Self(Fixed::from_bits(1i64 << 32));

    /// Double speed (2x).
    pub const DOUBLE: Self = Self(Fixed::from_bits(2i64 << 32));

    /// Triple speed (3x).
    pub const TRIPLE: Self = Self(Fixed::from_bits(3i64 << 32));

    /// Create a speed, clamping values below [`Self::MIN`].
    #[must_use]
    pub fn new(multiplier: Fixed) -> Self {
        if multiplier < Self::MIN.0 {
            tracing::warn!(%multiplier, "time speed below minimum, clamping");
            Self::MIN
        } else {
            Self(multiplier)
        }
    }

    /// The underlying multiplier.
    #[must_use]
    pub const fn get(self) -> Fixed {
        self.0
    }
}

impl Default for TimeSpeed {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Speed-adjusted production duration in whole minutes.
///
/// `ceil(max(1, base) / speed)` - rounded up so a job with nonzero
/// remaining time never reports as already complete from truncation.
#[must_use]
pub fn production_duration(base_minutes: u32, speed: TimeSpeed) -> u32 {
    let base = base_minutes.max(1);
    let adjusted = (Fixed::from_num(base) / speed.get()).ceil();
    adjusted.to_num::<u32>()
}

/// Progress of a job between two absolute minute stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Completion percentage, 0-100.
    pub percent: u32,
    /// Whether the job has reached its end time.
    pub is_complete: bool,
    /// Minutes remaining; zero once complete.
    pub remaining: i64,
}

/// Compute progress for a window of absolute game-minutes.
///
/// Guards `end > start` by forcing `end = start + 1` when violated, so
/// the division below is always well defined.
#[must_use]
pub fn progress(start: i64, end: i64, current: i64) -> ProgressReport {
    let end = if end <= start {
        tracing::warn!(start, end, "degenerate progress window, forcing 1 minute span");
        start + 1
    } else {
        end
    };

    let is_complete = current >= end;
    let percent = if is_complete {
        100
    } else {
        let elapsed = (current - start).max(0);
        (((elapsed * 100) / (end - start)).min(100)) as u32
    };
    let remaining = if is_complete { 0 } else { (end - current).max(0) };

    ProgressReport {
        percent,
        is_complete,
        remaining,
    }
}

/// Human-readable duration string for countdowns.
///
/// Durations under one minute render as `< 1m`; otherwise `2h`, `45m`,
/// or `1h 5m`. A fractional minute remainder is rounded *up* so a
/// pending job never shows `0m remaining`.
#[must_use]
pub fn format_duration(minutes: Fixed) -> String {
    if minutes < Fixed::from_num(1) {
        return "< 1m".to_string();
    }

    let hours = (minutes / Fixed::from_num(MINUTES_PER_HOUR))
        .floor()
        .to_num::<i64>();
    let remainder = minutes - Fixed::from_num(hours * i64::from(MINUTES_PER_HOUR));
    let mut mins = remainder.ceil().to_num::<i64>();
    let mut hours = hours;
    if mins == i64::from(MINUTES_PER_HOUR) {
        hours += 1;
        mins = 0;
    }

    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// [`format_duration`] for whole-minute counts.
#[must_use]
pub fn format_duration_minutes(minutes: i64) -> String {
    format_duration(Fixed::from_num(minutes))
}

/// Clock value after a speed-adjusted duration elapses from `now`.
///
/// Wraps past midnight; intended for display ("done at 3:45 pm"), not
/// for queue bookkeeping, which uses absolute minute arithmetic.
#[must_use]
pub fn completion_clock(now: GameTime, duration_minutes: u32) -> GameTime {
    now.add_minutes(i64::from(duration_minutes))
}

/// Within-day minute stamp for a completion, composing
/// [`GameTime::add_minutes`] and [`GameTime::total_minutes`].
#[must_use]
pub fn completion_total_minutes(now: GameTime, duration_minutes: u32) -> u32 {
    completion_clock(now, duration_minutes).total_minutes()
}

/// Start/end window stamped onto a production job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTiming {
    /// Absolute game-minute the job begins; zero while queued.
    pub start: i64,
    /// Absolute game-minute the job finishes; zero while queued.
    pub end: i64,
    /// Speed-adjusted duration in minutes.
    pub duration: u32,
}

/// Compute the timing window for a new or promoted job.
///
/// Queued jobs get placeholder zero stamps; their real window is
/// computed when they are promoted to active.
#[must_use]
pub fn schedule(now_total: i64, base_minutes: u32, speed: TimeSpeed, queued: bool) -> JobTiming {
    let duration = production_duration(base_minutes, speed);
    if queued {
        JobTiming {
            start: 0,
            end: 0,
            duration,
        }
    } else {
        JobTiming {
            start: now_total,
            end: now_total + i64::from(duration),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for h in 0..24_i64 {
            for m in 0..60_i64 {
                let t = GameTime::new(h, m);
                let back = GameTime::from_total_minutes(i64::from(t.total_minutes()));
                assert_eq!(back, t);
            }
        }
    }

    #[test]
    fn test_normalization_no_carry() {
        // Hours and minutes wrap independently - no minute-to-hour carry.
        let t = GameTime::new(25, 90);
        assert_eq!(t.hours(), 1);
        assert_eq!(t.minutes(), 30);

        let t = GameTime::new(-1, -5);
        assert_eq!(t.hours(), 23);
        assert_eq!(t.minutes(), 55);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(GameTime::try_new(8, 30).is_ok());
        assert!(GameTime::try_new(24, 0).is_err());
        assert!(GameTime::try_new(-1, 0).is_err());
        assert!(GameTime::try_new(0, 60).is_err());
    }

    #[test]
    fn test_from_total_minutes_clamps_negative() {
        let t = GameTime::from_total_minutes(-50);
        assert_eq!(t.total_minutes(), 0);
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(9), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(10), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(21), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    #[test]
    fn test_is_night() {
        assert!(is_night(21));
        assert!(is_night(23));
        assert!(is_night(0));
        assert!(is_night(4));
        assert!(!is_night(5));
        assert!(!is_night(12));
        assert!(!is_night(20));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(GameTime::new(0, 5).format_12h(), "12:05 am");
        assert_eq!(GameTime::new(8, 0).format_12h(), "8:00 am");
        assert_eq!(GameTime::new(12, 0).format_12h(), "12:00 pm");
        assert_eq!(GameTime::new(23, 30).format_12h(), "11:30 pm");
        assert_eq!(GameTime::new(8, 5).format_24h(), "08:05");
        assert_eq!(GameTime::new(23, 30).to_string(), "23:30");
    }

    #[test]
    fn test_clock_source() {
        // An explicit minute counter wins over nothing else - it is the
        // only field the variant carries.
        let t = GameTime::from(ClockSource::TotalMinutes(505));
        assert_eq!((t.hours(), t.minutes()), (8, 25));

        let t = GameTime::from(ClockSource::default());
        assert_eq!((t.hours(), t.minutes()), (8, 0));
    }

    #[test]
    fn test_add_minutes_wraps_silently() {
        let t = GameTime::new(23, 30).add_minutes(45);
        assert_eq!((t.hours(), t.minutes()), (0, 15));

        // Negative delta clamps to zero
        let t = GameTime::new(10, 0).add_minutes(-30);
        assert_eq!((t.hours(), t.minutes()), (10, 0));
    }

    #[test]
    fn test_to_total_minutes() {
        assert_eq!(to_total_minutes(8, 25), 505);
        assert_eq!(to_total_minutes(-3, 10), 10);
        assert_eq!(to_total_minutes(25, 0), 1500); // not wrapped
    }

    #[test]
    fn test_production_duration() {
        assert_eq!(production_duration(100, TimeSpeed::DOUBLE), 50);
        assert_eq!(production_duration(5, TimeSpeed::NORMAL), 5);
        // Rounds up: 100 / 3 = 33.33 -> 34
        assert_eq!(production_duration(100, TimeSpeed::TRIPLE), 34);
        // Zero base clamps to 1 minute
        assert_eq!(production_duration(0, TimeSpeed::NORMAL), 1);
        // Zero speed clamps to 0.1 -> duration is 10x base
        let crawl = TimeSpeed::new(Fixed::from_num(0));
        assert_eq!(production_duration(10, crawl), 100);
    }

    #[test]
    fn test_duration_monotonic_in_speed() {
        let mut last = u32::MAX;
        for s in 1..=30 {
            let speed = TimeSpeed::new(Fixed::from_num(s) / Fixed::from_num(10));
            let d = production_duration(120, speed);
            assert!(d <= last, "duration increased as speed rose");
            last = d;
        }
    }

    #[test]
    fn test_progress_bounds() {
        let before = progress(100, 200, 50);
        assert_eq!(before.percent, 0);
        assert!(!before.is_complete);
        assert_eq!(before.remaining, 150);

        let mid = progress(100, 200, 150);
        assert_eq!(mid.percent, 50);
        assert!(!mid.is_complete);
        assert_eq!(mid.remaining, 50);

        let exact = progress(100, 200, 200);
        assert_eq!(exact.percent, 100);
        assert!(exact.is_complete);
        assert_eq!(exact.remaining, 0);

        let past = progress(100, 200, 500);
        assert_eq!(past.percent, 100);
        assert!(past.is_complete);
        assert_eq!(past.remaining, 0);
    }

    #[test]
    fn test_progress_degenerate_window() {
        // end <= start is forced to a one minute span, so the job is
        // still pending at the start instant and done one minute later
        let r = progress(100, 100, 100);
        assert!(!r.is_complete);
        assert_eq!(r.percent, 0);
        assert_eq!(r.remaining, 1);
        assert!(progress(100, 100, 101).is_complete);

        let r = progress(100, 50, 100);
        assert!(!r.is_complete);
        assert_eq!(r.remaining, 1);
        assert!(progress(100, 50, 101).is_complete);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Fixed::from_num(0.5)), "< 1m");
        assert_eq!(format_duration_minutes(0), "< 1m");
        assert_eq!(format_duration_minutes(45), "45m");
        assert_eq!(format_duration_minutes(60), "1h");
        assert_eq!(format_duration_minutes(65), "1h 5m");
        assert_eq!(format_duration_minutes(120), "2h");
        assert_eq!(format_duration_minutes(125), "2h 5m");
        // Fractional remainder rounds up - never shows 0m while pending
        assert_eq!(format_duration(Fixed::from_num(60.5)), "1h 1m");
        assert_eq!(format_duration(Fixed::from_num(59.5)), "1h");
    }

    #[test]
    fn test_completion_helpers() {
        let now = GameTime::new(23, 0);
        let done = completion_clock(now, 90);
        assert_eq!((done.hours(), done.minutes()), (0, 30));
        assert_eq!(completion_total_minutes(now, 90), 30);
    }

    #[test]
    fn test_schedule() {
        let active = schedule(500, 100, TimeSpeed::DOUBLE, false);
        assert_eq!(active.start, 500);
        assert_eq!(active.end, 550);
        assert_eq!(active.duration, 50);

        let queued = schedule(500, 100, TimeSpeed::DOUBLE, true);
        assert_eq!(queued.start, 0);
        assert_eq!(queued.end, 0);
        assert_eq!(queued.duration, 50);
    }

    #[test]
    fn test_time_speed_clamp() {
        let s = TimeSpeed::new(Fixed::from_num(-2));
        assert_eq!(s, TimeSpeed::MIN);
        assert_eq!(TimeSpeed::default(), TimeSpeed::NORMAL);
    }
}
