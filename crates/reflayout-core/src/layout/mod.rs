//! Layout tokenizer.
//!
//! Layouts are scanned left to right; at each byte the first matching
//! token wins. Bytes that start no token are literal text.

pub mod named;

/// A field token recognised in a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `January`
    LongMonth,
    /// `Jan`
    Month,
    /// `1`
    NumMonth,
    /// `01`
    ZeroMonth,
    /// `Monday`
    LongWeekday,
    /// `Mon`
    Weekday,
    /// `2`
    Day,
    /// `_2`
    UnderDay,
    /// `02`
    ZeroDay,
    /// `__2`
    UnderYearDay,
    /// `002`
    ZeroYearDay,
    /// `15`
    Hour,
    /// `3`
    Hour12,
    /// `03`
    ZeroHour12,
    /// `4`
    Minute,
    /// `04`
    ZeroMinute,
    /// `5`
    Second,
    /// `05`
    ZeroSecond,
    /// `2006`
    LongYear,
    /// `06`
    Year,
    /// `PM`
    UpperMeridiem,
    /// `pm`
    LowerMeridiem,
    /// `MST`
    ZoneName,
    /// `-0700`, `Z07:00`, ...
    Offset(OffsetStyle),
    /// `.000`, `,999`, ...
    Fraction(Fraction),
}

/// How a numeric UTC offset is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetStyle {
    /// ISO 8601 form: print `Z` for a zero offset.
    pub utc_as_z: bool,
    pub precision: OffsetPrecision,
    /// Separate hours, minutes and seconds with `:`.
    pub colons: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetPrecision {
    Hours,
    Minutes,
    Seconds,
}

/// Fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction {
    /// `.` or `,`
    pub separator: char,
    /// Length of the digit run in the layout.
    pub digits: usize,
    /// `9` runs drop trailing zeros (and the separator if nothing is left).
    pub trim: bool,
}

// Suffixes after the leading `-` or `Z`, longest first.
const OFFSET_TOKENS: [(&[u8], OffsetPrecision, bool); 5] = [
    (b"070000", OffsetPrecision::Seconds, false),
    (b"07:00:00", OffsetPrecision::Seconds, true),
    (b"0700", OffsetPrecision::Minutes, false),
    (b"07:00", OffsetPrecision::Minutes, true),
    (b"07", OffsetPrecision::Hours, false),
];

const ZERO_FIELDS: [Field; 6] = [
    Field::ZeroMonth,
    Field::ZeroDay,
    Field::ZeroHour12,
    Field::ZeroMinute,
    Field::ZeroSecond,
    Field::Year,
];

/// Split `layout` at its first field token.
///
/// Returns the literal text before the token, the token, and the rest of
/// the layout, or `None` when the whole layout is literal text.
///
/// # Examples
///
/// ```
/// use reflayout_core::{next_chunk, Field};
///
/// assert_eq!(
///     next_chunk("Hi Janet, the Month is January"),
///     Some(("Hi Janet, the Month is ", Field::LongMonth, ""))
/// );
/// assert_eq!(next_chunk("plain text"), None);
/// ```
pub fn next_chunk(layout: &str) -> Option<(&str, Field, &str)> {
    let bytes = layout.as_bytes();
    (0..bytes.len()).find_map(|i| {
        let (lead, field, end) = match_token(&bytes[i..])?;
        // Every token byte is ASCII, so both cut points are char boundaries.
        Some((&layout[..i + lead], field, &layout[i + end..]))
    })
}

/// Match a token at the start of `rest`.
///
/// Returns `(lead, field, end)`: bytes `lead..end` are the token, bytes
/// before `lead` are still literal text.
fn match_token(rest: &[u8]) -> Option<(usize, Field, usize)> {
    let at = |token: &[u8]| rest.starts_with(token);
    let (field, len) = match rest[0] {
        b'J' if at(b"January") => (Field::LongMonth, 7),
        b'J' if at(b"Jan") && !starts_with_lower(&rest[3..]) => (Field::Month, 3),
        b'M' if at(b"Monday") => (Field::LongWeekday, 6),
        b'M' if at(b"Mon") && !starts_with_lower(&rest[3..]) => (Field::Weekday, 3),
        b'M' if at(b"MST") => (Field::ZoneName, 3),
        b'0' if matches!(rest.get(1), Some(b'1'..=b'6')) => {
            (ZERO_FIELDS[usize::from(rest[1] - b'1')], 2)
        }
        b'0' if at(b"002") => (Field::ZeroYearDay, 3),
        b'1' if at(b"15") => (Field::Hour, 2),
        b'1' => (Field::NumMonth, 1),
        b'2' if at(b"2006") => (Field::LongYear, 4),
        b'2' => (Field::Day, 1),
        // `_2006` is a literal underscore followed by the year.
        b'_' if at(b"_2006") => return Some((1, Field::LongYear, 5)),
        b'_' if at(b"_2") => (Field::UnderDay, 2),
        b'_' if at(b"__2") => (Field::UnderYearDay, 3),
        b'3' => (Field::Hour12, 1),
        b'4' => (Field::Minute, 1),
        b'5' => (Field::Second, 1),
        b'P' if at(b"PM") => (Field::UpperMeridiem, 2),
        b'p' if at(b"pm") => (Field::LowerMeridiem, 2),
        b'-' | b'Z' => return offset_token(rest),
        b'.' | b',' => return fraction_token(rest),
        _ => return None,
    };
    Some((0, field, len))
}

fn starts_with_lower(rest: &[u8]) -> bool {
    rest.first().is_some_and(u8::is_ascii_lowercase)
}

fn offset_token(rest: &[u8]) -> Option<(usize, Field, usize)> {
    let utc_as_z = rest[0] == b'Z';
    OFFSET_TOKENS
        .iter()
        .find(|(suffix, _, _)| rest[1..].starts_with(suffix))
        .map(|&(suffix, precision, colons)| {
            let style = OffsetStyle {
                utc_as_z,
                precision,
                colons,
            };
            (0, Field::Offset(style), 1 + suffix.len())
        })
}

fn fraction_token(rest: &[u8]) -> Option<(usize, Field, usize)> {
    let digit = *rest.get(1)?;
    if digit != b'0' && digit != b'9' {
        return None;
    }
    let digits = rest[1..].iter().take_while(|&&b| b == digit).count();
    let end = 1 + digits;
    // A run followed by another digit is not a fraction.
    if rest.get(end).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    let fraction = Fraction {
        separator: char::from(rest[0]),
        digits,
        trim: digit == b'9',
    };
    Some((0, Field::Fraction(fraction), end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(layout: &str) -> Vec<Field> {
        let mut out = Vec::new();
        let mut rest = layout;
        while let Some((_, field, suffix)) = next_chunk(rest) {
            out.push(field);
            rest = suffix;
        }
        out
    }

    #[test]
    fn test_month_and_weekday_names() {
        assert_eq!(
            fields("Monday Mon January Jan"),
            vec![
                Field::LongWeekday,
                Field::Weekday,
                Field::LongMonth,
                Field::Month
            ]
        );
    }

    #[test]
    fn test_lowercase_suffix_blocks_short_names() {
        assert_eq!(next_chunk("Janet"), None);
        assert_eq!(next_chunk("Monty"), None);
        // Uppercase and punctuation do not block.
        assert_eq!(next_chunk("JanX"), Some(("", Field::Month, "X")));
        assert_eq!(next_chunk("Mon,"), Some(("", Field::Weekday, ",")));
    }

    #[test]
    fn test_zone_name() {
        assert_eq!(next_chunk("at MST"), Some(("at ", Field::ZoneName, "")));
    }

    #[test]
    fn test_numeric_fields() {
        assert_eq!(
            fields("01 02 03 04 05 06 002 15 1 2 3 4 5 2006"),
            vec![
                Field::ZeroMonth,
                Field::ZeroDay,
                Field::ZeroHour12,
                Field::ZeroMinute,
                Field::ZeroSecond,
                Field::Year,
                Field::ZeroYearDay,
                Field::Hour,
                Field::NumMonth,
                Field::Day,
                Field::Hour12,
                Field::Minute,
                Field::Second,
                Field::LongYear,
            ]
        );
    }

    #[test]
    fn test_underscore_forms() {
        assert_eq!(next_chunk("_2"), Some(("", Field::UnderDay, "")));
        assert_eq!(next_chunk("__2"), Some(("", Field::UnderYearDay, "")));
        assert_eq!(next_chunk("_2006"), Some(("_", Field::LongYear, "")));
        assert_eq!(next_chunk("_x"), None);
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(fields("PM pm"), vec![Field::UpperMeridiem, Field::LowerMeridiem]);
        assert_eq!(next_chunk("Pm"), None);
    }

    #[test]
    fn test_offset_tokens_longest_first() {
        let cases = [
            ("-070000", false, OffsetPrecision::Seconds, false),
            ("-07:00:00", false, OffsetPrecision::Seconds, true),
            ("-0700", false, OffsetPrecision::Minutes, false),
            ("-07:00", false, OffsetPrecision::Minutes, true),
            ("-07", false, OffsetPrecision::Hours, false),
            ("Z070000", true, OffsetPrecision::Seconds, false),
            ("Z07:00:00", true, OffsetPrecision::Seconds, true),
            ("Z0700", true, OffsetPrecision::Minutes, false),
            ("Z07:00", true, OffsetPrecision::Minutes, true),
            ("Z07", true, OffsetPrecision::Hours, false),
        ];
        for (layout, utc_as_z, precision, colons) in cases {
            let expected = Field::Offset(OffsetStyle {
                utc_as_z,
                precision,
                colons,
            });
            assert_eq!(next_chunk(layout), Some(("", expected, "")), "{layout}");
        }
    }

    #[test]
    fn test_dash_without_offset_is_literal() {
        assert_eq!(next_chunk("-01"), Some(("-", Field::ZeroMonth, "")));
        assert_eq!(next_chunk("Z"), None);
    }

    #[test]
    fn test_fraction_runs() {
        assert_eq!(
            next_chunk(".000"),
            Some((
                "",
                Field::Fraction(Fraction {
                    separator: '.',
                    digits: 3,
                    trim: false
                }),
                ""
            ))
        );
        assert_eq!(
            next_chunk(",999999999Z"),
            Some((
                "",
                Field::Fraction(Fraction {
                    separator: ',',
                    digits: 9,
                    trim: true
                }),
                "Z"
            ))
        );
    }

    #[test]
    fn test_fraction_followed_by_digit_is_literal() {
        // `.00` then `1` is not a fraction: `.0` stays literal, `01` is the month.
        assert_eq!(next_chunk(".001"), Some((".0", Field::ZeroMonth, "")));
        assert_eq!(next_chunk("05.0000005"), Some(("", Field::ZeroSecond, ".0000005")));
        assert_eq!(fields(".0000005"), vec![Field::ZeroSecond]);
    }

    #[test]
    fn test_non_ascii_literal_text() {
        assert_eq!(
            next_chunk("día 02 — año 2006"),
            Some(("día ", Field::ZeroDay, " — año 2006"))
        );
    }
}
