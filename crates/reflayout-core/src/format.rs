//! Rendering a [`Moment`] under a layout.

use std::fmt::Write;

use crate::layout::{next_chunk, Field, Fraction, OffsetPrecision, OffsetStyle};
use crate::moment::Moment;

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// Indexed from Monday, matching chrono's `num_days_from_monday`.
const LONG_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Write `moment` rendered under `layout` into `w`.
///
/// Literal text is copied as is; see [`crate::layout`] for the tokens.
pub fn write_layout<W: Write>(w: &mut W, moment: &Moment, layout: &str) -> std::fmt::Result {
    let mut rest = layout;
    while let Some((prefix, field, suffix)) = next_chunk(rest) {
        w.write_str(prefix)?;
        write_field(w, moment, field)?;
        rest = suffix;
    }
    w.write_str(rest)
}

fn write_field<W: Write>(w: &mut W, m: &Moment, field: Field) -> std::fmt::Result {
    match field {
        Field::LongMonth => w.write_str(long_month(m)),
        Field::Month => w.write_str(&long_month(m)[..3]),
        Field::NumMonth => write!(w, "{}", m.month()),
        Field::ZeroMonth => write!(w, "{:02}", m.month()),
        Field::LongWeekday => w.write_str(long_weekday(m)),
        Field::Weekday => w.write_str(&long_weekday(m)[..3]),
        Field::Day => write!(w, "{}", m.day()),
        Field::UnderDay => write!(w, "{:>2}", m.day()),
        Field::ZeroDay => write!(w, "{:02}", m.day()),
        Field::UnderYearDay => write!(w, "{:>3}", m.ordinal()),
        Field::ZeroYearDay => write!(w, "{:03}", m.ordinal()),
        Field::Hour => write!(w, "{:02}", m.hour()),
        Field::Hour12 => write!(w, "{}", hour12(m)),
        Field::ZeroHour12 => write!(w, "{:02}", hour12(m)),
        Field::Minute => write!(w, "{}", m.minute()),
        Field::ZeroMinute => write!(w, "{:02}", m.minute()),
        Field::Second => write!(w, "{}", m.second()),
        Field::ZeroSecond => write!(w, "{:02}", m.second()),
        Field::LongYear => write_long_year(w, m.year()),
        Field::Year => write!(w, "{:02}", m.year().rem_euclid(100)),
        Field::UpperMeridiem => w.write_str(if m.hour() >= 12 { "PM" } else { "AM" }),
        Field::LowerMeridiem => w.write_str(if m.hour() >= 12 { "pm" } else { "am" }),
        Field::ZoneName => write_zone_name(w, m),
        Field::Offset(style) => write_offset(w, m.zone().offset_seconds(), style),
        Field::Fraction(fraction) => write_fraction(w, m.nanosecond(), fraction),
    }
}

fn long_month(m: &Moment) -> &'static str {
    // month() is 1-12
    LONG_MONTHS[(m.month() - 1) as usize]
}

fn long_weekday(m: &Moment) -> &'static str {
    LONG_WEEKDAYS[m.weekday().num_days_from_monday() as usize]
}

fn hour12(m: &Moment) -> u32 {
    match m.hour() % 12 {
        0 => 12,
        h => h,
    }
}

fn write_long_year<W: Write>(w: &mut W, year: i32) -> std::fmt::Result {
    if year < 0 {
        w.write_char('-')?;
    }
    write!(w, "{:04}", year.unsigned_abs())
}

fn write_zone_name<W: Write>(w: &mut W, m: &Moment) -> std::fmt::Result {
    let name = m.zone().name();
    if !name.is_empty() {
        return w.write_str(name);
    }
    // No abbreviation: fall back to a compact numeric offset.
    let style = OffsetStyle {
        utc_as_z: false,
        precision: OffsetPrecision::Minutes,
        colons: false,
    };
    write_offset(w, m.zone().offset_seconds(), style)
}

fn write_offset<W: Write>(w: &mut W, offset_seconds: i32, style: OffsetStyle) -> std::fmt::Result {
    if style.utc_as_z && offset_seconds == 0 {
        return w.write_char('Z');
    }
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, abs / 60 % 60, abs % 60);
    let sep = if style.colons { ":" } else { "" };

    write!(w, "{sign}{hours:02}")?;
    match style.precision {
        OffsetPrecision::Hours => Ok(()),
        OffsetPrecision::Minutes => write!(w, "{sep}{minutes:02}"),
        OffsetPrecision::Seconds => write!(w, "{sep}{minutes:02}{sep}{seconds:02}"),
    }
}

fn write_fraction<W: Write>(w: &mut W, nanos: u32, fraction: Fraction) -> std::fmt::Result {
    if fraction.trim && nanos == 0 {
        return Ok(());
    }
    let all = format!("{nanos:09}");
    let mut digits = &all[..fraction.digits.min(9)];
    if fraction.trim {
        digits = digits.trim_end_matches('0');
        if digits.is_empty() {
            return Ok(());
        }
    }
    w.write_char(fraction.separator)?;
    w.write_str(digits)
}
