//! Error types for loading and running suites.

use std::path::PathBuf;

use reflayout_core::LayoutError;

use crate::exit_codes;

/// Suite errors. Every variant is a configuration problem; layout
/// mismatches are never errors, they are recorded in the report.
#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    /// Suite file could not be read.
    #[error("failed to read suite {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Suite file is not valid YAML or does not match the schema.
    #[error("failed to parse suite: {message}")]
    Parse { message: String },

    #[error("unsupported suite version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// `@Name` does not match a predefined layout.
    #[error("unknown named layout '@{name}'")]
    UnknownLayout { name: String },

    /// Layout records present but no shared instant to format.
    #[error("suite '{suite}' has layout records but no instant")]
    MissingInstant { suite: String },

    /// An instant or zone in the suite cannot be built.
    #[error("invalid instant in {context}: {source}")]
    Instant {
        context: String,
        #[source]
        source: LayoutError,
    },

    /// Summary could not be written.
    #[error("failed to write summary {}: {message}", path.display())]
    Output { path: PathBuf, message: String },
}

impl SuiteError {
    pub(crate) fn instant(context: impl Into<String>, source: LayoutError) -> Self {
        Self::Instant {
            context: context.into(),
            source,
        }
    }

    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        exit_codes::CONFIG_ERROR
    }

    /// Stable machine-readable reason code.
    pub fn reason_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_SUITE_IO",
            Self::Parse { .. } => "E_SUITE_PARSE",
            Self::UnsupportedVersion { .. } => "E_SUITE_VERSION",
            Self::UnknownLayout { .. } => "E_UNKNOWN_LAYOUT",
            Self::MissingInstant { .. } => "E_MISSING_INSTANT",
            Self::Instant { .. } => "E_INVALID_INSTANT",
            Self::Output { .. } => "E_OUTPUT",
        }
    }
}

/// Result type for suite operations.
pub type SuiteResult<T> = Result<T, SuiteError>;
