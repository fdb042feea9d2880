//! Predefined layouts.
//!
//! All of them are written in terms of the reference time
//! `Mon Jan 2 15:04:05 MST 2006` (Unix time 1136239445).

pub const LAYOUT: &str = "01/02 03:04:05PM '06 -0700";
pub const ANSIC: &str = "Mon Jan _2 15:04:05 2006";
pub const UNIX_DATE: &str = "Mon Jan _2 15:04:05 MST 2006";
pub const RUBY_DATE: &str = "Mon Jan 02 15:04:05 -0700 2006";
pub const RFC822: &str = "02 Jan 06 15:04 MST";
/// RFC 822 with a numeric zone.
pub const RFC822Z: &str = "02 Jan 06 15:04 -0700";
pub const RFC850: &str = "Monday, 02-Jan-06 15:04:05 MST";
pub const RFC1123: &str = "Mon, 02 Jan 2006 15:04:05 MST";
/// RFC 1123 with a numeric zone.
pub const RFC1123Z: &str = "Mon, 02 Jan 2006 15:04:05 -0700";
pub const RFC3339: &str = "2006-01-02T15:04:05Z07:00";
pub const RFC3339_NANO: &str = "2006-01-02T15:04:05.999999999Z07:00";
pub const KITCHEN: &str = "3:04PM";

// Handy time stamps.
pub const STAMP: &str = "Jan _2 15:04:05";
pub const STAMP_MILLI: &str = "Jan _2 15:04:05.000";
pub const STAMP_MICRO: &str = "Jan _2 15:04:05.000000";
pub const STAMP_NANO: &str = "Jan _2 15:04:05.000000000";

pub const DATE_TIME: &str = "2006-01-02 15:04:05";
pub const DATE_ONLY: &str = "2006-01-02";
pub const TIME_ONLY: &str = "15:04:05";

/// Every predefined layout under its conventional name.
pub const NAMED_LAYOUTS: &[(&str, &str)] = &[
    ("Layout", LAYOUT),
    ("ANSIC", ANSIC),
    ("UnixDate", UNIX_DATE),
    ("RubyDate", RUBY_DATE),
    ("RFC822", RFC822),
    ("RFC822Z", RFC822Z),
    ("RFC850", RFC850),
    ("RFC1123", RFC1123),
    ("RFC1123Z", RFC1123Z),
    ("RFC3339", RFC3339),
    ("RFC3339Nano", RFC3339_NANO),
    ("Kitchen", KITCHEN),
    ("Stamp", STAMP),
    ("StampMilli", STAMP_MILLI),
    ("StampMicro", STAMP_MICRO),
    ("StampNano", STAMP_NANO),
    ("DateTime", DATE_TIME),
    ("DateOnly", DATE_ONLY),
    ("TimeOnly", TIME_ONLY),
];

/// Look up a predefined layout by its conventional name (case-sensitive).
///
/// ```
/// use reflayout_core::layout::named;
///
/// assert_eq!(named::lookup("Kitchen"), Some(named::KITCHEN));
/// assert_eq!(named::lookup("kitchen"), None);
/// ```
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED_LAYOUTS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, layout)| *layout)
}
