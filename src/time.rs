//! Timestamp formatting.
//!
//! A timestamp is rendered in the shortest of three layouts that loses no
//! information it carries:
//!
//! | components | layout | example |
//! |---|---|---|
//! | date is `0000-01-01` | clock only | `15:04:05.5Z` |
//! | clock is `00:00:00` | date only | `2006-01-02` |
//! | otherwise | date and clock | `2006-01-02T15:04:05+07:00` |
//!
//! Fractional seconds keep nanosecond precision with trailing zeros trimmed,
//! and a zero UTC offset renders as `Z`.
//!
//! Use [`serialize`] (or [`option::serialize`]) on timestamp fields:
//!
//! ```rust
//! use chrono::{TimeZone, Utc, DateTime};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Event {
//!     #[serde(serialize_with = "serde_form::time::serialize")]
//!     at: DateTime<Utc>,
//! }
//!
//! let event = Event { at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap() };
//! assert_eq!(serde_form::to_string(&event).unwrap(), "at=2024-01-15");
//! ```
//!
//! Other serde formats see the same layout as a plain string.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeZone, Timelike};
use serde::{Serialize, Serializer};

/// Newtype struct name marking a non-zero timestamp.
pub(crate) const TIME_TOKEN: &str = "$serde_form::private::Time";
/// Newtype struct name marking the zero timestamp.
pub(crate) const ZERO_TIME_TOKEN: &str = "$serde_form::private::ZeroTime";

/// Date and time values with a form layout.
pub trait Timestamp {
    /// Wall-clock date and time, and offset from UTC in seconds.
    fn parts(&self) -> (NaiveDateTime, i32);

    /// Returns `true` for `0001-01-01T00:00:00Z`, the zero timestamp.
    fn is_zero(&self) -> bool {
        let (local, offset) = self.parts();
        local
            .checked_sub_signed(chrono::Duration::seconds(i64::from(offset)))
            .map_or(false, |utc| {
                utc.year() == 1
                    && utc.month() == 1
                    && utc.day() == 1
                    && utc.num_seconds_from_midnight() == 0
                    && utc.nanosecond() == 0
            })
    }

    /// Renders the timestamp in its form layout.
    fn to_form_string(&self) -> String {
        let (local, offset) = self.parts();
        format_parts(&local, offset)
    }
}

impl<Tz: TimeZone> Timestamp for DateTime<Tz> {
    fn parts(&self) -> (NaiveDateTime, i32) {
        (self.naive_local(), self.offset().fix().local_minus_utc())
    }
}

/// Naive date-times are taken to be in UTC.
impl Timestamp for NaiveDateTime {
    fn parts(&self) -> (NaiveDateTime, i32) {
        (*self, 0)
    }
}

/// Dates are taken to be midnight UTC.
impl Timestamp for NaiveDate {
    fn parts(&self) -> (NaiveDateTime, i32) {
        (self.and_time(chrono::NaiveTime::MIN), 0)
    }
}

impl<T: Timestamp + ?Sized> Timestamp for &T {
    fn parts(&self) -> (NaiveDateTime, i32) {
        (**self).parts()
    }
}

/// Formats any [`Timestamp`] in its form layout.
///
/// # Examples
///
/// ```rust
/// use chrono::{FixedOffset, NaiveDate, TimeZone};
///
/// let tz = FixedOffset::east_opt(7 * 3600).unwrap();
/// let t = tz.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
/// assert_eq!(serde_form::time::format(&t), "2006-01-02T15:04:05+07:00");
///
/// let d = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();
/// assert_eq!(serde_form::time::format(&d), "2006-01-02");
/// ```
#[must_use]
pub fn format<T: Timestamp + ?Sized>(value: &T) -> String {
    value.to_form_string()
}

fn format_parts(local: &NaiveDateTime, offset: i32) -> String {
    let date_unset = local.year() == 0 && local.month() == 1 && local.day() == 1;
    let clock_zero = local.num_seconds_from_midnight() == 0 && local.nanosecond() == 0;

    if date_unset {
        format!("{}{}", clock(local), zone(offset))
    } else if clock_zero {
        date(local)
    } else {
        format!("{}T{}{}", date(local), clock(local), zone(offset))
    }
}

fn date(t: &NaiveDateTime) -> String {
    format!("{:04}-{:02}-{:02}", t.year(), t.month(), t.day())
}

fn clock(t: &NaiveDateTime) -> String {
    let mut out = format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second());
    // Leap seconds carry their extra second in the nanosecond field.
    let nanos = t.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

fn zone(offset: i32) -> String {
    if offset == 0 {
        return "Z".to_string();
    }
    let sign = if offset < 0 { '-' } else { '+' };
    let minutes = offset.unsigned_abs() / 60;
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Serializes a timestamp in its form layout.
///
/// Intended for `#[serde(serialize_with = "serde_form::time::serialize")]`.
/// The form serializer additionally learns whether the timestamp is zero, so
/// zero elision and `omitempty` treat it like any other zero value.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Timestamp + ?Sized,
    S: Serializer,
{
    let token = if value.is_zero() {
        ZERO_TIME_TOKEN
    } else {
        TIME_TOKEN
    };
    serializer.serialize_newtype_struct(token, &value.to_form_string())
}

/// Serialization of optional timestamps.
pub mod option {
    use super::Timestamp;
    use serde::Serializer;

    /// Serializes `Some` timestamps like [`super::serialize`] and `None` as none.
    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Timestamp,
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_some(&super::Time(t)),
            None => serializer.serialize_none(),
        }
    }
}

/// Wraps a [`Timestamp`] so it serializes in its form layout.
///
/// ```rust
/// use chrono::NaiveDate;
/// use serde_form::time::Time;
///
/// let d = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(serde_form::to_string(&vec![Time(d)]).unwrap(), "0=2024-02-29");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Time<T>(pub T);

impl<T: Timestamp> Serialize for Time<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}
