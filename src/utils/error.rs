use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProspectError {
    #[error("Generator request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("No JSON payload found in response: {message}")]
    Extraction { message: String },

    #[error("Response payload is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Response JSON does not match the expected schema: {message}")]
    Schema { message: String },

    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ProspectError>;

impl ProspectError {
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema {
            message: message.into(),
        }
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
