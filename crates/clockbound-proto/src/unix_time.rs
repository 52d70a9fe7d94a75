// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

use core::time::Duration;
#[cfg(feature = "std")]
use std::time;

use crate::error::ParseError;

/// The number of nanoseconds in one second.
pub const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Describes an instant relative to the `UNIX_EPOCH` - 00:00:00 Coordinated Universal Time (UTC),
/// Thursday, 1 January 1970 in seconds with the fractional part in nanoseconds.
///
/// If the **Instant** describes some moment prior to `UNIX_EPOCH`, both the `secs` and
/// `subsec_nanos` components will be negative.
///
/// Unlike a signed 64-bit count of nanoseconds, which overflows in the year 2262, an
/// **Instant** can describe every value of the daemon's [`UnixNanos`] encoding, up to and
/// including `2554-07-21T23:34:33.709551615Z`.
///
/// ## Example
///
/// Displaying an **Instant** with the chrono crate:
///
/// ```ignore
/// use chrono::TimeZone;
///
/// let instant = clockbound_proto::unix_time::Instant::now();
/// let utc = chrono::Utc.timestamp_opt(instant.secs(), instant.subsec_nanos() as _).unwrap();
/// println!("{}", utc);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Instant {
    secs: i64,
    subsec_nanos: i32,
}

impl Instant {
    /// Create a new **Instant** given its `secs` and `subsec_nanos` components.
    ///
    /// To indicate a time following `UNIX_EPOCH`, both `secs` and `subsec_nanos` must be positive.
    /// To indicate a time prior to `UNIX_EPOCH`, both `secs` and `subsec_nanos` must be negative.
    /// `subsec_nanos` must have a magnitude below one second.
    /// Violating these invariants will result in a **panic!**.
    pub fn new(secs: i64, subsec_nanos: i32) -> Instant {
        if secs > 0 && subsec_nanos < 0 {
            panic!("invalid instant: secs was positive but subsec_nanos was negative");
        }
        if secs < 0 && subsec_nanos > 0 {
            panic!("invalid instant: secs was negative but subsec_nanos was positive");
        }
        if subsec_nanos.unsigned_abs() as u64 >= NANOS_PER_SEC {
            panic!("invalid instant: subsec_nanos must be less than one second");
        }
        Instant { secs, subsec_nanos }
    }

    /// Uses `std::time::SystemTime::now` and `std::time::UNIX_EPOCH` to determine the current
    /// **Instant**.
    ///
    /// ## Example
    ///
    /// ```
    /// println!("{:?}", clockbound_proto::unix_time::Instant::now());
    /// ```
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        time::SystemTime::now().into()
    }

    /// The "seconds" component of the **Instant**.
    pub fn secs(&self) -> i64 {
        self.secs
    }

    /// The fractional component of the **Instant** in nanoseconds.
    pub fn subsec_nanos(&self) -> i32 {
        self.subsec_nanos
    }

    /// Returns the amount of time elapsed from `earlier` to `self`, or `None` if `earlier`
    /// is later than `self`.
    pub fn duration_since(&self, earlier: &Instant) -> Option<Duration> {
        let diff = self.total_nanos() - earlier.total_nanos();
        if diff < 0 {
            return None;
        }
        let secs = u64::try_from(diff / NANOS_PER_SEC as i128).ok()?;
        let nanos = (diff % NANOS_PER_SEC as i128) as u32;
        Some(Duration::new(secs, nanos))
    }

    /// Converts back to a [`time::SystemTime`], or `None` if the platform cannot represent it.
    #[cfg(feature = "std")]
    pub fn to_system_time(&self) -> Option<time::SystemTime> {
        let magnitude = Duration::new(self.secs.unsigned_abs(), self.subsec_nanos.unsigned_abs());
        if self.secs < 0 || self.subsec_nanos < 0 {
            time::UNIX_EPOCH.checked_sub(magnitude)
        } else {
            time::UNIX_EPOCH.checked_add(magnitude)
        }
    }

    fn total_nanos(&self) -> i128 {
        self.secs as i128 * NANOS_PER_SEC as i128 + self.subsec_nanos as i128
    }
}

#[cfg(feature = "std")]
impl From<time::SystemTime> for Instant {
    fn from(t: time::SystemTime) -> Self {
        match t.duration_since(time::UNIX_EPOCH) {
            Ok(duration) => {
                let secs = duration.as_secs() as i64;
                let subsec_nanos = duration.subsec_nanos() as i32;
                Instant::new(secs, subsec_nanos)
            }
            Err(sys_time_err) => {
                let duration_pre_unix_epoch = sys_time_err.duration();
                let secs = -(duration_pre_unix_epoch.as_secs() as i64);
                let subsec_nanos = -(duration_pre_unix_epoch.subsec_nanos() as i32);
                Instant::new(secs, subsec_nanos)
            }
        }
    }
}

/// An instant encoded as an **unsigned** 64-bit count of nanoseconds since the Unix epoch.
///
/// This is the representation `clockboundd` uses on the wire (big-endian). Using an unsigned
/// counter moves the overflow point from the year 2262 (signed) to the year 2554. The value
/// `u64::MAX` is meaningful: the daemon uses it as the maximum representable instant.
///
/// Conversions never pass through a signed nanosecond count:
///
/// - encoding computes `secs * 1_000_000_000 + subsec_nanos` in `u64` arithmetic;
/// - decoding splits into `nanos / 1_000_000_000` and `nanos % 1_000_000_000` and widens the
///   seconds into an [`Instant`].
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UnixNanos(pub u64);

impl UnixNanos {
    /// The Unix epoch.
    pub const EPOCH: UnixNanos = UnixNanos(0);

    /// The maximum representable instant, `2554-07-21T23:34:33.709551615Z`.
    pub const MAX: UnixNanos = UnixNanos(u64::MAX);

    /// Builds a value from whole seconds and a sub-second nanosecond part, or `None` if the
    /// result does not fit.
    pub fn from_secs_nanos(secs: u64, subsec_nanos: u32) -> Option<UnixNanos> {
        if subsec_nanos as u64 >= NANOS_PER_SEC {
            return None;
        }
        secs.checked_mul(NANOS_PER_SEC)?
            .checked_add(subsec_nanos as u64)
            .map(UnixNanos)
    }

    /// Whole seconds since the epoch.
    pub fn secs(self) -> u64 {
        self.0 / NANOS_PER_SEC
    }

    /// The sub-second part in nanoseconds.
    pub fn subsec_nanos(self) -> u32 {
        (self.0 % NANOS_PER_SEC) as u32
    }

    /// The midpoint of the bound `[earliest, latest]`.
    ///
    /// Computed as `latest - (latest - earliest) / 2` so it cannot overflow near
    /// [`UnixNanos::MAX`]; an odd width truncates toward `earliest`. An inverted bound
    /// (`earliest > latest`) yields the midpoint of the two values instead of wrapping.
    pub fn midpoint(earliest: UnixNanos, latest: UnixNanos) -> UnixNanos {
        let (lo, hi) = if earliest.0 <= latest.0 {
            (earliest.0, latest.0)
        } else {
            (latest.0, earliest.0)
        };
        UnixNanos(hi - (hi - lo) / 2)
    }

    /// Width of the bound `[earliest, latest]`, or `None` for an inverted bound.
    pub fn width(earliest: UnixNanos, latest: UnixNanos) -> Option<Duration> {
        latest.0.checked_sub(earliest.0).map(Duration::from_nanos)
    }
}

impl TryFrom<Instant> for UnixNanos {
    type Error = ParseError;

    /// Encodes an [`Instant`], failing for instants before the epoch or past
    /// [`UnixNanos::MAX`].
    fn try_from(t: Instant) -> Result<Self, Self::Error> {
        if t.secs() < 0 || t.subsec_nanos() < 0 {
            return Err(ParseError::TimeOutOfRange);
        }
        UnixNanos::from_secs_nanos(t.secs() as u64, t.subsec_nanos() as u32)
            .ok_or(ParseError::TimeOutOfRange)
    }
}

impl From<UnixNanos> for Instant {
    fn from(n: UnixNanos) -> Self {
        // secs() is at most u64::MAX / 1e9, far inside i64.
        Instant::new(n.secs() as i64, n.subsec_nanos() as i32)
    }
}

#[cfg(feature = "std")]
impl TryFrom<time::SystemTime> for UnixNanos {
    type Error = ParseError;

    fn try_from(t: time::SystemTime) -> Result<Self, Self::Error> {
        UnixNanos::try_from(Instant::from(t))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn max_decodes_past_signed_overflow() {
        let instant = Instant::from(UnixNanos::MAX);
        assert_eq!(instant.secs(), 18_446_744_073);
        assert_eq!(instant.subsec_nanos(), 709_551_615);
    }

    #[test]
    fn max_encodes_back_to_max() {
        let instant = Instant::new(18_446_744_073, 709_551_615);
        assert_eq!(UnixNanos::try_from(instant), Ok(UnixNanos::MAX));
    }

    #[test]
    fn one_past_max_is_out_of_range() {
        let instant = Instant::new(18_446_744_073, 709_551_616);
        assert_eq!(
            UnixNanos::try_from(instant),
            Err(ParseError::TimeOutOfRange)
        );
    }

    #[test]
    fn pre_epoch_is_out_of_range() {
        assert_eq!(
            UnixNanos::try_from(Instant::new(-1, 0)),
            Err(ParseError::TimeOutOfRange)
        );
        assert_eq!(
            UnixNanos::try_from(Instant::new(0, -1)),
            Err(ParseError::TimeOutOfRange)
        );
    }

    #[test]
    fn raw_nanos_encode_unchanged() {
        let instant = Instant::from(UnixNanos(0x1234_5678_9abc_def0));
        assert_eq!(
            UnixNanos::try_from(instant),
            Ok(UnixNanos(0x1234_5678_9abc_def0))
        );
    }

    #[test]
    fn midpoint_truncates_toward_earliest() {
        let earliest = UnixNanos(0x16b9_6a09_7f4d_0687);
        let latest = UnixNanos(0x16b9_6a09_7f50_d7bc);
        assert_eq!(
            UnixNanos::midpoint(earliest, latest),
            UnixNanos(0x16b9_6a09_7f4e_ef22)
        );
        assert_eq!(UnixNanos::midpoint(UnixNanos(0), UnixNanos(3)), UnixNanos(2));
    }

    #[test]
    fn midpoint_at_ceiling() {
        assert_eq!(
            UnixNanos::midpoint(UnixNanos::MAX, UnixNanos::MAX),
            UnixNanos::MAX
        );
        assert_eq!(
            UnixNanos::midpoint(UnixNanos(u64::MAX - 10), UnixNanos::MAX),
            UnixNanos(u64::MAX - 5)
        );
    }

    #[test]
    fn midpoint_inverted_bound_does_not_panic() {
        assert_eq!(
            UnixNanos::midpoint(UnixNanos(10), UnixNanos(4)),
            UnixNanos(7)
        );
        assert_eq!(UnixNanos::width(UnixNanos(10), UnixNanos(4)), None);
    }

    #[test]
    fn width_of_bound() {
        assert_eq!(
            UnixNanos::width(UnixNanos(1_000), UnixNanos(251_165)),
            Some(Duration::from_nanos(250_165))
        );
    }

    #[test]
    fn system_time_roundtrip() {
        let now = time::SystemTime::now();
        let instant = Instant::from(now);
        assert_eq!(instant.to_system_time(), Some(now));
    }

    #[test]
    fn pre_epoch_system_time_has_negative_parts() {
        let t = time::UNIX_EPOCH - Duration::new(1, 500_000_000);
        let instant = Instant::from(t);
        assert_eq!(instant.secs(), -1);
        assert_eq!(instant.subsec_nanos(), -500_000_000);
        assert_eq!(instant.to_system_time(), Some(t));
    }

    #[test]
    fn duration_since_orders_instants() {
        let earlier = Instant::new(1, 900_000_000);
        let later = Instant::new(3, 100_000_000);
        assert_eq!(
            later.duration_since(&earlier),
            Some(Duration::new(1, 200_000_000))
        );
        assert_eq!(earlier.duration_since(&later), None);
        assert!(earlier < later);
    }

    #[test]
    #[should_panic(expected = "secs was positive")]
    fn mixed_signs_panic() {
        Instant::new(1, -1);
    }
}
