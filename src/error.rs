//! Error types for configuration and host-boundary failures
//!
//! The simulation itself never fails; these only surface while a host is
//! wiring up settings, the drawing surface, or the GPU.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    /// A tuning value is out of its allowed range
    InvalidTuning { field: &'static str, reason: String },
    /// Settings JSON could not be parsed
    SettingsParse(String),
    /// The host could not provide a drawing surface
    SurfaceUnavailable(String),
    /// No GPU adapter compatible with the surface
    AdapterUnavailable,
    /// The adapter refused to create a device
    DeviceRequest(String),
}

impl GameError {
    pub(crate) fn invalid_tuning(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTuning {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTuning { field, reason } => {
                write!(f, "invalid tuning `{field}`: {reason}")
            }
            Self::SettingsParse(msg) => write!(f, "could not parse settings: {msg}"),
            Self::SurfaceUnavailable(msg) => write!(f, "drawing surface unavailable: {msg}"),
            Self::AdapterUnavailable => write!(f, "no compatible GPU adapter"),
            Self::DeviceRequest(msg) => write!(f, "GPU device request failed: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::SettingsParse(err.to_string())
    }
}
