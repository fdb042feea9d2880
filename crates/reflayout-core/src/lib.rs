//! Reference-time layout formatting.
//!
//! A layout is ordinary text in which pieces of the reference time
//! `Mon Jan 2 15:04:05 MST 2006` stand for the matching field of the
//! instant being formatted:
//!
//! - `2006-01-02T15:04:05Z07:00` → `2009-02-04T21:00:57-08:00`
//! - `3:04PM` → `9:00PM`
//! - `Jan _2 15:04:05.000` → `Feb  4 21:00:57.012`
//!
//! Calendar arithmetic is delegated to `chrono`; this crate only owns the
//! layout language and fixed zones that carry an abbreviation.
//!
//! # Quick Start
//!
//! ```
//! use reflayout_core::{layout::named, FixedZone, Moment};
//!
//! # fn example() -> reflayout_core::LayoutResult<()> {
//! let pst = FixedZone::new("PST", -8 * 3600)?;
//! let moment = Moment::from_unix_nanos(1_233_810_057_012_345_600, pst)?;
//!
//! assert_eq!(moment.format(named::RFC3339), "2009-02-04T21:00:57-08:00");
//! assert_eq!(moment.format(named::KITCHEN), "9:00PM");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod moment;
pub mod zone;

pub use error::{LayoutError, LayoutResult};
pub use format::write_layout;
pub use layout::{next_chunk, Field, Fraction, OffsetPrecision, OffsetStyle};
pub use moment::{CivilTime, Moment, DEFAULT_LAYOUT};
pub use zone::FixedZone;
