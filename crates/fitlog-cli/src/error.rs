use thiserror::Error;

/// Main error type for fitlog
#[derive(Error, Debug)]
pub enum FitlogError {
    #[error("Record store error ({status}): {body}")]
    Transport { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date format: {0}. Expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("A submission is already in progress")]
    SubmissionInProgress,

    #[error("Failed to load data: {0}")]
    LoadFailed(Box<FitlogError>),
}

pub type Result<T> = std::result::Result<T, FitlogError>;

impl FitlogError {
    /// Create a transport error from a status code and raw body
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid response error from a message
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Create an invalid parameter error from a message
    pub fn invalid_param(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// HTTP status carried by the error, if it came from the record store
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::LoadFailed(inner) => inner.status(),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Render an error for the terminal, adding a hint where one helps
pub fn format_user_error(err: &FitlogError) -> String {
    match err {
        FitlogError::LoadFailed(_) => {
            format!("{}\nRun the command again to retry.", err)
        }
        FitlogError::Transport { status: 401, .. } | FitlogError::Transport { status: 403, .. } => {
            format!(
                "{}\nCheck the api_key in your config file or FITLOG_API_KEY.",
                err
            )
        }
        FitlogError::Config(_) => {
            format!("{}\nRun 'fitlog config path' to locate the config file.", err)
        }
        _ => err.to_string(),
    }
}
