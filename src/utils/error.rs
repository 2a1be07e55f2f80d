use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl LinkError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LinkError::IoError(e) => format!("Failed to write the link page: {}", e),
            LinkError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LinkError::IoError(_) => {
                "Check that the link path's directory exists and is writable".to_string()
            }
            LinkError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for {}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
