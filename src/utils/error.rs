use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid selector '{selector}': {message}")]
    SelectorError { selector: String, message: String },

    #[error("Page description error: {message}")]
    FixtureError { message: String },
}

impl PageError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PageError::IoError(_) => "Check that the file exists and is readable",
            PageError::SerializationError(_) => "The run report could not be encoded; re-run without --json to see the plain output",
            PageError::ConfigValidationError { .. } | PageError::InvalidConfigValueError { .. } => {
                "Review the behavior config file; omitted tables and fields fall back to the documented defaults"
            }
            PageError::SelectorError { .. } => {
                "Use a simple selector: tag, #id, .class, [attr] or [attr=\"value\"], optionally combined"
            }
            PageError::FixtureError { .. } => {
                "Check the page description file: a [viewport] table plus nested [[element]] tables"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
