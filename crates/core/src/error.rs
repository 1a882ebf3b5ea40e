use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration parse error: {0}")]
    ConfigParse(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid record set for page '{page}': {reason}")]
    InvalidRecordSet { page: String, reason: String },
    #[error("Invalid rendering policy for page '{page}': {reason}")]
    InvalidPolicy { page: String, reason: String },
    #[error("Unknown page: {0}")]
    UnknownPage(String),
}

impl Error {
    pub fn invalid_record_set(page: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecordSet {
            page: page.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_policy(page: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            page: page.into(),
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
