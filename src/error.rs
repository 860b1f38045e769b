//! Error handling for findthename

use thiserror::Error;

/// Main error type for findthename
#[derive(Error, Debug, Clone)]
pub enum FindTheNameError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("TLD catalog error: {message}")]
    Catalog {
        message: String,
        source_name: Option<String>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl FindTheNameError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a catalog error, optionally naming the source that produced it
    pub fn catalog(message: impl Into<String>, source_name: Option<String>) -> Self {
        Self::Catalog {
            message: message.into(),
            source_name,
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check your .env file or FINDTHENAME_* variables", message)
            }
            Self::Catalog { message, source_name } => {
                let source = source_name.as_ref().map_or(String::new(), |s| format!(" ({})", s));
                format!("❌ Could not load the TLD catalog{}: {}\n💡 Unset FINDTHENAME_TLD_FILE to use the built-in list", source, message)
            }
            Self::Network { message, status_code, .. } => {
                let status = status_code.map_or(String::new(), |c| format!(" ({})", c));
                format!("❌ Network error{}: {}\n💡 Check your internet connection", status, message)
            }
            Self::Timeout { operation, timeout_secs } => {
                format!("⏱️  Operation '{}' timed out after {}s\n💡 Try again later", operation, timeout_secs)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the file format", message)
            }
            Self::Validation { message } => {
                format!("❌ Validation error: {}\n💡 Check your input format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
            Self::Internal { message } => {
                format!("❌ Internal error: {}\n💡 This is a bug, please report it", message)
            }
            Self::Cli { message } => {
                format!("❌ Command error: {}\n💡 Use --help for usage information", message)
            }
        }
    }
}

/// Convert from common error types
impl From<reqwest::Error> for FindTheNameError {
    fn from(err: reqwest::Error) -> Self {
        let status_code = err.status().map(|s| s.as_u16());
        let url = err.url().map(|u| u.to_string());

        if err.is_timeout() {
            Self::timeout("HTTP request", 30)
        } else if err.is_connect() {
            Self::network("Connection failed", status_code, url)
        } else {
            Self::network(err.to_string(), status_code, url)
        }
    }
}

impl From<serde_json::Error> for FindTheNameError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for FindTheNameError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<inquire::InquireError> for FindTheNameError {
    fn from(err: inquire::InquireError) -> Self {
        Self::cli(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FindTheNameError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::FindTheNameError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::FindTheNameError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::FindTheNameError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::FindTheNameError::validation(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = FindTheNameError::validation("bad tld");
        assert!(err.to_string().contains("bad tld"));

        let err = config_error!("limit must be positive, got {}", 0);
        assert_eq!(err.to_string(), "Configuration error: limit must be positive, got 0");
    }

    #[test]
    fn test_user_message_mentions_path() {
        let err = FindTheNameError::io("permission denied", Some("/tmp/favs.json".to_string()));
        let msg = err.user_message();
        assert!(msg.contains("/tmp/favs.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FindTheNameError = io.into();
        assert!(matches!(err, FindTheNameError::Io { .. }));
    }
}
