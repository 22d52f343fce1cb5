//! Error types and handling infrastructure for playloop.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context.
//!
//! The frame operations themselves (clear, poll, draw, present) are expected to
//! succeed; the variants here cover the terminal plumbing around them, the
//! configuration layer, and misuse of the loop API.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for playloop operations.
#[derive(Error, Debug)]
pub enum PlayloopError {
    /// Terminal I/O failed (raw mode, drawing, event polling)
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read
    #[error("Failed to read configuration file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was read but its contents are invalid
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A frame was requested after the loop reached its terminal state
    #[error("Render loop already stopped after {frames} frames")]
    LoopStopped { frames: u64 },
}

/// Standard Result type for playloop operations.
pub type Result<T> = std::result::Result<T, PlayloopError>;

impl PlayloopError {
    /// Create a Terminal error from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Everything that surfaces a bare io::Error in this crate talks to the terminal
impl From<std::io::Error> for PlayloopError {
    fn from(err: std::io::Error) -> Self {
        Self::terminal("terminal I/O failed", err)
    }
}

impl From<toml::de::Error> for PlayloopError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let stopped = PlayloopError::LoopStopped { frames: 12 };
        assert_eq!(
            stopped.to_string(),
            "Render loop already stopped after 12 frames"
        );

        let config = PlayloopError::config("surface width must be positive");
        assert_eq!(
            config.to_string(),
            "Configuration error: surface width must be positive"
        );

        let read = PlayloopError::ConfigRead {
            path: PathBuf::from("/tmp/playloop.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            read.to_string(),
            "Failed to read configuration file: /tmp/playloop.toml"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            PlayloopError::invalid_argument("fps"),
            PlayloopError::InvalidArgument { .. }
        ));
        assert_eq!(
            PlayloopError::invalid_argument("--frames must be at least 1").to_string(),
            "Invalid argument: --frames must be at least 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: PlayloopError = io_err.into();

        match err {
            PlayloopError::Terminal { message, source } => {
                assert_eq!(message, "terminal I/O failed");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            _ => panic!("Expected Terminal variant"),
        }
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Table>("frame_rate = = 3").unwrap_err();
        let err: PlayloopError = parse_err.into();
        assert!(matches!(err, PlayloopError::ConfigError { .. }));
    }
}
