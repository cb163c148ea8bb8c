use thiserror::Error;

/// 透過 `Transport` 送出請求時可能發生的錯誤。
///
/// These never reach callers of the review client: `ReviewClient` logs
/// them and replaces them with a generic [`ReviewError`].
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid header: {name}")]
    InvalidHeader { name: String },
}

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Failed to submit rating")]
    SubmitFailed,

    #[error("Failed to fetch reviews")]
    FetchFailed,

    #[error("No route matches path: {path}")]
    RouteNotFound { path: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Transport setup failed: {0}")]
    TransportSetup(#[from] TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Navigation,
    Configuration,
    System,
}

impl ReviewError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReviewError::SubmitFailed | ReviewError::FetchFailed => ErrorCategory::Request,
            ReviewError::RouteNotFound { .. } => ErrorCategory::Navigation,
            ReviewError::ConfigError { .. }
            | ReviewError::InvalidConfigValueError { .. }
            | ReviewError::MissingConfigError { .. }
            | ReviewError::TomlError(_)
            | ReviewError::TransportSetup(_) => ErrorCategory::Configuration,
            ReviewError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReviewError::SubmitFailed | ReviewError::FetchFailed => self.to_string(),
            ReviewError::RouteNotFound { path } => {
                format!("Page not found: {} (try \"/\" or \"/reviews\")", path)
            }
            ReviewError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            ReviewError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReviewError>;
