//! Instants tied to a fixed zone.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::format::write_layout;
use crate::zone::FixedZone;

/// Layout used by `Display` for [`Moment`].
pub const DEFAULT_LAYOUT: &str = "2006-01-02 15:04:05.999999999 -0700 MST";

const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Wall-clock fields, interpreted in whatever zone they are paired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
    #[serde(default)]
    pub nanosecond: u32,
}

impl CivilTime {
    /// Midnight on the given date.
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
            nanosecond: 0,
        }
    }

    pub const fn at(self, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    pub const fn with_nanosecond(self, nanosecond: u32) -> Self {
        Self { nanosecond, ..self }
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:09}",
            self.year, self.month, self.day, self.hour, self.minute, self.second, self.nanosecond
        )
    }
}

/// A point in time together with the zone it is displayed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moment {
    at: DateTime<FixedOffset>,
    zone: FixedZone,
}

impl Moment {
    /// Build a moment from wall-clock fields in `zone`.
    ///
    /// # Examples
    ///
    /// ```
    /// use reflayout_core::{layout::named, CivilTime, FixedZone, Moment};
    ///
    /// let civil = CivilTime::date(2008, 9, 17).at(20, 4, 26);
    /// let moment = Moment::from_civil(civil, FixedZone::utc()).unwrap();
    /// assert_eq!(moment.format(named::RFC3339), "2008-09-17T20:04:26Z");
    ///
    /// let feb30 = CivilTime::date(2009, 2, 30);
    /// assert!(Moment::from_civil(feb30, FixedZone::utc()).is_err());
    /// ```
    pub fn from_civil(civil: CivilTime, zone: FixedZone) -> LayoutResult<Self> {
        let invalid = || LayoutError::InvalidCivilTime {
            civil: civil.to_string(),
        };

        // chrono encodes leap seconds as nanosecond >= 1e9; those are not wall-clock input.
        if i64::from(civil.nanosecond) >= NANOS_PER_SECOND {
            return Err(invalid());
        }

        let naive = NaiveDate::from_ymd_opt(civil.year, civil.month, civil.day)
            .and_then(|date| {
                date.and_hms_nano_opt(civil.hour, civil.minute, civil.second, civil.nanosecond)
            })
            .ok_or_else(invalid)?;
        let at = zone
            .offset()
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(invalid)?;

        Ok(Self { at, zone })
    }

    /// Build a moment from seconds and nanoseconds since the Unix epoch.
    pub fn from_unix(unix_seconds: i64, nanos: u32, zone: FixedZone) -> LayoutResult<Self> {
        let out_of_range = LayoutError::OutOfRange {
            unix_seconds,
            nanos,
        };
        if i64::from(nanos) >= NANOS_PER_SECOND {
            return Err(out_of_range);
        }
        let utc = DateTime::from_timestamp(unix_seconds, nanos).ok_or(out_of_range)?;
        Ok(Self {
            at: utc.with_timezone(&zone.offset()),
            zone,
        })
    }

    /// Build a moment from a signed count of nanoseconds since the Unix epoch.
    pub fn from_unix_nanos(unix_nanos: i64, zone: FixedZone) -> LayoutResult<Self> {
        let seconds = unix_nanos.div_euclid(NANOS_PER_SECOND);
        // rem_euclid is in 0..1e9, always fits.
        let nanos = unix_nanos.rem_euclid(NANOS_PER_SECOND) as u32;
        Self::from_unix(seconds, nanos, zone)
    }

    /// The same instant, displayed in another zone.
    pub fn in_zone(&self, zone: FixedZone) -> Self {
        Self {
            at: self.at.with_timezone(&zone.offset()),
            zone,
        }
    }

    pub fn zone(&self) -> &FixedZone {
        &self.zone
    }

    /// Nanoseconds since the Unix epoch, if they fit in an `i64`.
    pub fn unix_nanos(&self) -> Option<i64> {
        self.at.timestamp_nanos_opt()
    }

    pub fn year(&self) -> i32 {
        self.at.year()
    }

    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.at.month()
    }

    pub fn day(&self) -> u32 {
        self.at.day()
    }

    /// Day of the year, 1-366.
    pub fn ordinal(&self) -> u32 {
        self.at.ordinal()
    }

    pub fn weekday(&self) -> Weekday {
        self.at.weekday()
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn minute(&self) -> u32 {
        self.at.minute()
    }

    pub fn second(&self) -> u32 {
        self.at.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.at.nanosecond()
    }

    /// Render this moment under `layout`.
    pub fn format(&self, layout: &str) -> String {
        let mut out = String::with_capacity(layout.len() + 16);
        self.format_into(&mut out, layout);
        out
    }

    /// Append the rendering of this moment under `layout` to `out`.
    pub fn format_into(&self, out: &mut String, layout: &str) {
        // fmt::Write for String never returns an error.
        let _ = write_layout(out, self, layout);
    }
}

impl std::fmt::Display for Moment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_layout(f, self, DEFAULT_LAYOUT)
    }
}
