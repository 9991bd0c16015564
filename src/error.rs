// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the settings and logging layers.
///
/// The toast itself never fails: a missing foreground container or a dropped
/// delegate are silent no-ops, so nothing on that path returns this type.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Telemetry(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Telemetry(e) => write!(f, "Telemetry Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
