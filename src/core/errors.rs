//! Error types for the rankscale-rs library.
//!
//! Scaling and ordering failures are reported as structured variants so callers
//! can tell a missing statistic apart from a degenerate range or a broken
//! comparator without parsing messages.

use std::io;

use thiserror::Error;

/// Main result type for rankscale operations.
pub type Result<T> = std::result::Result<T, RankscaleError>;

/// Error type for all rankscale operations.
#[derive(Error, Debug)]
pub enum RankscaleError {
    /// A scaling operation ran before its statistics were attached
    #[error("Missing statistic '{statistic}' for {operation} on feature '{feature}'")]
    MissingStatistics {
        /// Scaling operation that was requested
        operation: &'static str,
        /// Name of the absent statistic
        statistic: &'static str,
        /// Feature label (empty when unlabeled)
        feature: String,
    },

    /// The divisor of a scaling formula is zero (or within the configured epsilon)
    #[error("Degenerate range [{low}, {high}] for {operation} on feature '{feature}'")]
    DegenerateRange {
        /// Scaling operation that was requested
        operation: &'static str,
        /// Lower bound (or mean for standardization)
        low: f64,
        /// Upper bound (or mean plus std-dev for standardization)
        high: f64,
        /// Feature label (empty when unlabeled)
        feature: String,
    },

    /// A value or statistic fed into a scaling formula is NaN or infinite
    #[error("Non-finite input to {operation} on feature '{feature}'")]
    NonFinite {
        /// Scaling operation that was requested
        operation: &'static str,
        /// Feature label (empty when unlabeled)
        feature: String,
    },

    /// The samples' order is not total: an element is both or neither of `<=` and `>` the pivot
    #[error("Inconsistent comparator between element {index} and pivot {pivot_index}")]
    InvalidComparator {
        /// Position of the offending element
        index: usize,
        /// Position of the pivot it was compared with
        pivot_index: usize,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Input exceeds a configured limit
    #[error("Resource exhaustion: {message}")]
    ResourceExhaustion {
        /// Error description
        message: String,
        /// Limit that was exceeded
        limit: usize,
    },

    /// I/O related errors
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RankscaleError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error tied to a field
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a validation error tied to a field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// True for errors caused by absent statistics rather than bad data
    pub fn is_missing_statistics(&self) -> bool {
        matches!(self, Self::MissingStatistics { .. })
    }

    /// Prefix the message of message-carrying variants with context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Validation { message, .. }
            | Self::Config { message, .. }
            | Self::Io { message, .. }
            | Self::Serialization { message, .. } => {
                *message = format!("{}: {message}", context.into());
            }
            _ => {}
        }
        self
    }
}

impl From<io::Error> for RankscaleError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for RankscaleError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for RankscaleError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<RankscaleError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}
