//! Application error types with rich context

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The two failure kinds a screen distinguishes when a service call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// The request could not complete, or the service answered with a non-2xx status
    NetworkFailure,
    /// A body arrived but could not be decoded into the expected shape
    MalformedResponse,
}

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Prediction Service Errors
    // ─────────────────────────────────────────────────────────────
    /// Transport-level failure (connection refused, DNS, reset, ...)
    #[error("Network error: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status.
    ///
    /// `message` is the user-facing description and always names the status.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    #[error("Malformed response: {message}")]
    MalformedBody { message: String },

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown district: {name}")]
    UnknownDistrict { name: String },

    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<String> },

    #[error("Out of range or not a number: {}", fields.join(", "))]
    InvalidFields { fields: Vec<String> },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_body(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn unknown_district(name: impl Into<String>) -> Self {
        Self::UnknownDistrict { name: name.into() }
    }

    /// Status code carried by an [`Error::HttpStatus`], if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Classify a service call failure into the two kinds the screens care about.
    ///
    /// Returns `None` for errors that do not originate from a service call.
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            Error::Network { .. } | Error::HttpStatus { .. } => {
                Some(ServiceErrorKind::NetworkFailure)
            }
            Error::MalformedBody { .. } => Some(ServiceErrorKind::MalformedResponse),
            _ => None,
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Network { .. }
                | Error::HttpStatus { .. }
                | Error::MalformedBody { .. }
                | Error::MissingFields { .. }
                | Error::InvalidFields { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::TerminalInit(_) | Error::InvalidUrl { .. } | Error::ConfigNotFound { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = Error::http_status(500, "Server responded with 500");
        assert_eq!(err.to_string(), "Server responded with 500");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_status_only_for_http_errors() {
        assert_eq!(Error::http_status(404, "nope").status(), Some(404));
        assert_eq!(Error::network("down").status(), None);
    }

    #[test]
    fn test_service_kind_classification() {
        assert_eq!(
            Error::network("down").service_kind(),
            Some(ServiceErrorKind::NetworkFailure)
        );
        assert_eq!(
            Error::http_status(503, "unavailable").service_kind(),
            Some(ServiceErrorKind::NetworkFailure)
        );
        assert_eq!(
            Error::malformed_body("expected array").service_kind(),
            Some(ServiceErrorKind::MalformedResponse)
        );
        assert_eq!(Error::config("bad").service_kind(), None);
    }

    #[test]
    fn test_service_errors_are_never_fatal() {
        for err in [
            Error::network("down"),
            Error::http_status(500, "boom"),
            Error::malformed_body("garbage"),
        ] {
            assert!(err.is_recoverable());
            assert!(!err.is_fatal());
        }
    }

    #[test]
    fn test_startup_errors_are_fatal() {
        assert!(Error::TerminalInit("no tty".into()).is_fatal());
        assert!(Error::invalid_url("nope", "relative URL without a base").is_fatal());
        assert!(Error::ConfigNotFound {
            path: PathBuf::from("/missing/config.toml")
        }
        .is_fatal());
        assert!(!Error::config("test").is_fatal());
    }

    #[test]
    fn test_context_keeps_the_original_error() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));
        let err = io.context("Failed to draw frame").unwrap_err();
        assert!(matches!(err, Error::Io(_)));

        let ok: Result<u8> = Ok(7);
        assert_eq!(ok.with_context(|| "never evaluated".to_string()).unwrap(), 7);
    }

    #[test]
    fn test_missing_fields_lists_every_field() {
        let err = Error::MissingFields {
            fields: vec!["Crop Name".into(), "Soil pH".into()],
        };
        assert_eq!(err.to_string(), "Missing required fields: Crop Name, Soil pH");
    }

    #[test]
    fn test_unknown_district_names_the_input() {
        let err = Error::unknown_district("Atlantis");
        assert!(err.to_string().contains("Atlantis"));
    }
}
