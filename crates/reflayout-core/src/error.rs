//! Error types for building zones and instants.
//!
//! Formatting itself never fails: every layout renders, unknown text is
//! copied through. Only constructing the values being formatted can fail.

/// Construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Zone offset outside of the representable ±24h window.
    #[error("invalid offset for zone '{name}': {seconds}s (must be strictly within ±86400s)")]
    InvalidOffset { name: String, seconds: i32 },

    /// Wall-clock fields that do not name a real moment (month 13, Feb 30, ...).
    #[error("invalid civil time: {civil}")]
    InvalidCivilTime { civil: String },

    /// Unix time outside of the range chrono can represent.
    #[error("instant out of range: {unix_seconds}s + {nanos}ns")]
    OutOfRange { unix_seconds: i64, nanos: u32 },
}

/// Result type for construction operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
