//! Fixture records and the built-in tables.
//!
//! Both record shapes use `Cow<'static, str>` so the built-in tables can be
//! `static` while suite files deserialize into owned strings.

use std::borrow::Cow;

use reflayout_core::layout::named;
use reflayout_core::{CivilTime, FixedZone, LayoutResult, Moment};
use serde::{Deserialize, Serialize};

/// Unix nanoseconds of the shared instant: Wed Feb 4 21:00:57.0123456 PST 2009.
pub const FIXED_INSTANT_UNIX_NANOS: i64 = 1_233_810_057_012_345_600;

/// Zone of the shared instant (UTC-8, no DST).
pub const FIXED_INSTANT_ZONE: ZoneSpec = ZoneSpec::new("PST", -8 * 3600);

/// A named fixed offset as written in a fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneSpec {
    pub name: Cow<'static, str>,
    pub offset_seconds: i32,
}

impl ZoneSpec {
    pub const fn new(name: &'static str, offset_seconds: i32) -> Self {
        Self {
            name: Cow::Borrowed(name),
            offset_seconds,
        }
    }

    pub fn to_zone(&self) -> LayoutResult<FixedZone> {
        FixedZone::new(self.name.as_ref(), self.offset_seconds)
    }
}

/// RFC3339 conversion record: `instant().format(RFC3339) == expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeFormatTest {
    pub civil: CivilTime,
    pub zone: ZoneSpec,
    pub expected: Cow<'static, str>,
}

impl TimeFormatTest {
    pub fn instant(&self) -> LayoutResult<Moment> {
        Moment::from_civil(self.civil, self.zone.to_zone()?)
    }

    /// Diagnostic label, e.g. `1994-09-17 20:04:26.000000000 EST`.
    pub fn label(&self) -> String {
        format!("{} {}", self.civil, self.zone.name)
    }
}

/// Layout record: `shared_instant.format(layout) == expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatTest {
    /// Diagnostic only.
    pub name: Cow<'static, str>,
    pub layout: Cow<'static, str>,
    pub expected: Cow<'static, str>,
}

const fn conversion(civil: CivilTime, zone: ZoneSpec, expected: &'static str) -> TimeFormatTest {
    TimeFormatTest {
        civil,
        zone,
        expected: Cow::Borrowed(expected),
    }
}

const fn layout(name: &'static str, layout: &'static str, expected: &'static str) -> FormatTest {
    FormatTest {
        name: Cow::Borrowed(name),
        layout: Cow::Borrowed(layout),
        expected: Cow::Borrowed(expected),
    }
}

pub static RFC3339_FORMATS: &[TimeFormatTest] = &[
    conversion(
        CivilTime::date(2008, 9, 17).at(20, 4, 26),
        ZoneSpec::new("UTC", 0),
        "2008-09-17T20:04:26Z",
    ),
    conversion(
        CivilTime::date(1994, 9, 17).at(20, 4, 26),
        ZoneSpec::new("EST", -18000),
        "1994-09-17T20:04:26-05:00",
    ),
    conversion(
        CivilTime::date(2000, 12, 26).at(1, 15, 6),
        ZoneSpec::new("OTO", 15600),
        "2000-12-26T01:15:06+04:20",
    ),
];

pub static FORMAT_TESTS: &[FormatTest] = &[
    layout("ANSIC", named::ANSIC, "Wed Feb  4 21:00:57 2009"),
    layout("UnixDate", named::UNIX_DATE, "Wed Feb  4 21:00:57 PST 2009"),
    layout("RubyDate", named::RUBY_DATE, "Wed Feb 04 21:00:57 -0800 2009"),
    layout("RFC822", named::RFC822, "04 Feb 09 21:00 PST"),
    layout("RFC850", named::RFC850, "Wednesday, 04-Feb-09 21:00:57 PST"),
    layout("RFC1123", named::RFC1123, "Wed, 04 Feb 2009 21:00:57 PST"),
    layout("RFC1123Z", named::RFC1123Z, "Wed, 04 Feb 2009 21:00:57 -0800"),
    layout("RFC3339", named::RFC3339, "2009-02-04T21:00:57-08:00"),
    layout("RFC3339Nano", named::RFC3339_NANO, "2009-02-04T21:00:57.0123456-08:00"),
    layout("Kitchen", named::KITCHEN, "9:00PM"),
    layout("am/pm", "3pm", "9pm"),
    layout("AM/PM", "3PM", "9PM"),
    layout("two-digit year", "06 01 02", "09 02 04"),
    // Three-letter months and days must not be followed by a lower-case letter.
    layout("Janet", "Hi Janet, the Month is January", "Hi Janet, the Month is February"),
    // Time stamps, fractional seconds.
    layout("Stamp", named::STAMP, "Feb  4 21:00:57"),
    layout("StampMilli", named::STAMP_MILLI, "Feb  4 21:00:57.012"),
    layout("StampMicro", named::STAMP_MICRO, "Feb  4 21:00:57.012345"),
    layout("StampNano", named::STAMP_NANO, "Feb  4 21:00:57.012345600"),
];

/// The instant every [`FORMAT_TESTS`] record is rendered from.
pub fn fixed_instant() -> LayoutResult<Moment> {
    Moment::from_unix_nanos(FIXED_INSTANT_UNIX_NANOS, FIXED_INSTANT_ZONE.to_zone()?)
}
