use thiserror::Error;

#[derive(Debug, Error)]
pub enum WxError {
    #[error("Failed to decode API payload")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String, #[source] chrono::ParseError),

    #[error("Invalid clock time '{0}'")]
    InvalidClockTime(String, #[source] chrono::ParseError),

    #[error("Local time {0} does not exist in the requested time zone")]
    NonexistentLocalTime(chrono::NaiveDateTime),

    #[error("Year {0} is out of range")]
    YearOutOfRange(i32),

    // Raised when a colour scale is requested by name and no scale exists for it.
    #[error("Unknown colour kind '{0}'")]
    UnknownColourKind(String),

    #[error("Unknown row filter '{0}'")]
    UnknownFilter(String),
}
