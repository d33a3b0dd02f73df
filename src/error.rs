use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntrospectError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Invalid weight {weight} for category '{label}'")]
    InvalidWeight { label: String, weight: f64 },

    #[error("Cannot compute percentages over a zero total")]
    ZeroTotal,
}

pub type IntroResult<T> = Result<T, IntrospectError>;
