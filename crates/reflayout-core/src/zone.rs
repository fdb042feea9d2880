//! Fixed zones: a UTC offset plus the abbreviation printed for `MST`.

use chrono::{FixedOffset, Offset, Utc};

use crate::error::{LayoutError, LayoutResult};

/// A zone whose offset never changes.
///
/// There is no daylight-saving lookup: the name is whatever the caller
/// says it is, and the offset is attached directly to every instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixedZone {
    name: String,
    offset: FixedOffset,
}

impl FixedZone {
    /// Create a zone `offset_seconds` east of UTC.
    ///
    /// # Examples
    ///
    /// ```
    /// use reflayout_core::FixedZone;
    ///
    /// let est = FixedZone::new("EST", -5 * 3600).unwrap();
    /// assert_eq!(est.name(), "EST");
    /// assert_eq!(est.offset_seconds(), -18000);
    ///
    /// assert!(FixedZone::new("BAD", 86_400).is_err());
    /// ```
    pub fn new(name: impl Into<String>, offset_seconds: i32) -> LayoutResult<Self> {
        let name = name.into();
        let offset =
            FixedOffset::east_opt(offset_seconds).ok_or_else(|| LayoutError::InvalidOffset {
                name: name.clone(),
                seconds: offset_seconds,
            })?;
        Ok(Self { name, offset })
    }

    /// The `UTC` zone.
    pub fn utc() -> Self {
        Self {
            name: "UTC".to_string(),
            offset: Utc.fix(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Seconds east of UTC (negative west of Greenwich).
    pub fn offset_seconds(&self) -> i32 {
        self.offset.local_minus_utc()
    }

    pub(crate) fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl Default for FixedZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl std::fmt::Display for FixedZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.offset)
    }
}
