//! Error types for cuegen.
//!
//! Defines all error codes and types used throughout the generator for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by cue generation.
///
/// These codes identify the failure class so callers (and the process
/// exit path) can report precisely what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Tone frequency is outside the valid range.
    /// Trigger: Negative or non-finite frequency.
    InvalidFrequency,

    /// Tone duration is outside the valid range.
    /// Trigger: Zero, negative, or non-finite duration.
    InvalidDuration,

    /// Volume is outside the full-scale fraction range.
    /// Trigger: Volume below 0.0, above 1.0, or non-finite.
    InvalidVolume,

    /// Sample rate is not a positive integer.
    /// Trigger: Sample rate of zero.
    InvalidSampleRate,

    /// Failed to write the WAV file.
    /// Trigger: Unwritable path, permission error, disk full.
    WavWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "INVALID_FREQUENCY",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidVolume => "INVALID_VOLUME",
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => "Tone frequency must be finite and non-negative",
            ErrorCode::InvalidDuration => "Tone duration must be finite and greater than zero",
            ErrorCode::InvalidVolume => "Volume must be between 0.0 and 1.0",
            ErrorCode::InvalidSampleRate => "Sample rate must be greater than zero",
            ErrorCode::WavWriteFailed => "Failed to write the WAV file",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFrequency => {
                "Specify a finite frequency of 0 Hz or more (e.g., 880 for the bip cue)"
            }
            ErrorCode::InvalidDuration => {
                "Specify a finite duration greater than zero seconds (e.g., 0.1)"
            }
            ErrorCode::InvalidVolume => {
                "Specify a volume between 0.0 (silence) and 1.0 (full scale); \
                 the built-in cues use 0.5"
            }
            ErrorCode::InvalidSampleRate => {
                "Specify a sample rate of at least 1 Hz; CD-quality audio uses 44100"
            }
            ErrorCode::WavWriteFailed => {
                "Check that the output directory exists, is writable, and has free disk space, \
                 or select another directory with --out-dir"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for cue generation.
#[derive(Debug)]
pub struct CueError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CueError {
    /// Creates a new CueError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new CueError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_FREQUENCY error.
    pub fn invalid_frequency(frequency: f64) -> Self {
        Self::new(
            ErrorCode::InvalidFrequency,
            format!("Invalid frequency: {} Hz (must be finite and >= 0)", frequency),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(duration: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Invalid duration: {} seconds (must be finite and > 0)", duration),
        )
    }

    /// Creates an INVALID_VOLUME error.
    pub fn invalid_volume(volume: f64) -> Self {
        Self::new(
            ErrorCode::InvalidVolume,
            format!("Invalid volume: {} (must be between 0.0 and 1.0)", volume),
        )
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(sample_rate: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!("Invalid sample rate: {} Hz (must be > 0)", sample_rate),
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV: {}", reason.into()),
        )
    }
}

impl fmt::Display for CueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for CueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using CueError.
pub type Result<T> = std::result::Result<T, CueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::InvalidFrequency.as_str(), "INVALID_FREQUENCY");
        assert_eq!(ErrorCode::InvalidDuration.as_str(), "INVALID_DURATION");
        assert_eq!(ErrorCode::InvalidVolume.as_str(), "INVALID_VOLUME");
        assert_eq!(ErrorCode::InvalidSampleRate.as_str(), "INVALID_SAMPLE_RATE");
        assert_eq!(ErrorCode::WavWriteFailed.as_str(), "WAV_WRITE_FAILED");
    }

    #[test]
    fn error_code_recovery_hints_not_empty() {
        // Ensure all error codes have non-empty recovery hints
        assert!(!ErrorCode::InvalidFrequency.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidDuration.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidVolume.recovery_hint().is_empty());
        assert!(!ErrorCode::InvalidSampleRate.recovery_hint().is_empty());
        assert!(!ErrorCode::WavWriteFailed.recovery_hint().is_empty());
    }

    #[test]
    fn error_code_descriptions_not_empty() {
        assert!(!ErrorCode::InvalidFrequency.description().is_empty());
        assert!(!ErrorCode::WavWriteFailed.description().is_empty());
    }

    #[test]
    fn cue_error_display() {
        let err = CueError::invalid_duration(-0.5);
        assert!(err.to_string().contains("INVALID_DURATION"));
        assert!(err.to_string().contains("-0.5"));
        assert!(err.to_string().contains("Recovery:"));
    }

    #[test]
    fn cue_error_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CueError::with_source(ErrorCode::WavWriteFailed, "Failed to write WAV", io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
