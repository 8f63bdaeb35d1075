//! Error types for the countdown page controller.
//!
//! Missing page elements are never errors; they make the dependent feature
//! a no-op. These variants cover configuration problems only.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    /// The target instant could not be parsed as a local date-time
    #[error("Invalid target instant '{value}': expected YYYY-MM-DDTHH:MM[:SS]")]
    InvalidTargetInstant {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The target instant falls in a daylight-saving gap of the local zone
    #[error("Target instant '{value}' does not exist in the local time zone")]
    NonexistentLocalTime { value: String },

    /// A settings value is out of range
    #[error("Invalid setting {field}: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    /// Settings file could not be decoded
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// Settings could not be encoded
    #[error("Settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
}

pub type PageResult<T> = std::result::Result<T, PageError>;
