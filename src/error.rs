// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("API Error: {0}")]
    Api(#[from] ApiError),
}

/// Failures talking to the notification API.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The session cookie is missing or expired (HTTP 401)
    #[error("Not signed in")]
    Unauthorized,

    /// Any other non-success HTTP status
    #[error("HTTP {status} from {path}")]
    Status { status: u16, path: String },

    /// Connection refused, DNS failure, broken stream...
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected JSON shape
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Configured base URL cannot be parsed or joined
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built (bad cookie header, TLS init...)
    #[error("Client setup failed: {0}")]
    Setup(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "error-api-unauthorized",
            ApiError::Status { .. } => "error-api-status",
            ApiError::Network(_) => "error-api-network",
            ApiError::Decode(_) => "error-api-decode",
            ApiError::InvalidUrl(_) => "error-api-invalid-url",
            ApiError::Setup(_) => "error-api-setup",
        }
    }

    /// Maps a reqwest failure, keeping decode errors apart from transport ones.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Setup(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
