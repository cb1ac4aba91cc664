//! Error types for the few fallible surfaces of the session.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure to load or validate a `SessionConfig`.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: io::Error },
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::Invalid { field, reason } => write!(f, "invalid config `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Failure reported by a controller's haptic actuator.
///
/// The session never propagates these; a failed pulse must not block firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The controller exposes no actuator.
    NoActuator,
    /// The device refused the pulse.
    Rejected(String),
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActuator => write!(f, "controller has no haptic actuator"),
            Self::Rejected(reason) => write!(f, "haptic pulse rejected: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}
