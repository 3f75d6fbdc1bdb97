use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    NoMessages,
    NoMessageIds,
    TooManyMessages { max: usize, actual: usize },
    MissingClientId { index: usize },
    RawLineBreak { field: &'static str },
    InvalidPhoneNumber { input: String },
    InvalidTimestamp { input: String },
    InvalidCallbackUrl { input: String },
    InvalidBaseUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::NoMessages => write!(f, "at least one message is required"),
            Self::NoMessageIds => write!(f, "at least one msgid is required"),
            Self::TooManyMessages { max, actual } => {
                write!(f, "too many messages: {actual} (max {max})")
            }
            Self::MissingClientId { index } => {
                write!(f, "message {index}: clientid is required")
            }
            Self::RawLineBreak { field } => {
                write!(
                    f,
                    "{field} must not contain raw line breaks (encode them as ASCII 0x06)"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::InvalidTimestamp { input } => {
                write!(f, "invalid timestamp: {input} (expected YYYYMMDDHHMMSS)")
            }
            Self::InvalidCallbackUrl { input } => write!(f, "invalid callback url: {input}"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
