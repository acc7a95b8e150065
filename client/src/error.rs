use std::fmt;
use std::io;

use reqwest::StatusCode;

use common::ApiErrorBody;

/// A non-2xx response, kept intact for the caller to inspect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    /// `error.error_code` of the response, when the body carried one.
    pub code: Option<String>,
    /// `error.error_message` of the response, when the body carried one.
    pub message: Option<String>,
    pub body: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, body: String) -> Self {
        let (code, message) = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| (Some(b.error.error_code), Some(b.error.error_message)))
            .unwrap_or_default();
        Self {
            status,
            code,
            message,
            body,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error:\n  Status: {}", self.status)?;
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => {
                write!(f, "\n  Code: {code}\n  Message: {message}")
            }
            _ if self.body.is_empty() => Ok(()),
            _ => write!(f, "\n  Body: {}", self.body),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UpCloudError {
    #[error("Invalid credentials, please provide a username and password")]
    InvalidCredentials,
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Not found: {0}")]
    NotFound(ApiError),
    #[error("{0}")]
    Api(ApiError),
    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing field in response: {0}")]
    MissingField(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<reqwest::Error> for UpCloudError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e)
        } else {
            Self::Http(e)
        }
    }
}

impl UpCloudError {
    pub(crate) fn from_status(status: StatusCode, body: String) -> Self {
        let error = ApiError::new(status.as_u16(), body);
        if status == StatusCode::NOT_FOUND {
            Self::NotFound(error)
        } else {
            Self::Api(error)
        }
    }

    /// HTTP status of an API error response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(e) | Self::Api(e) => Some(e.status),
            Self::InvalidCredentials
            | Self::InvalidArgument(_)
            | Self::Timeout(_)
            | Self::Http(_)
            | Self::Json(_)
            | Self::MissingField(_)
            | Self::Config(_)
            | Self::Io(_)
            | Self::Toml(_)
            | Self::InvalidHeader(_)
            | Self::UrlParse(_) => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_decodes_error_body() {
        let error = ApiError::new(
            409,
            r#"{"error": {"error_code": "SERVER_STATE_ILLEGAL", "error_message": "The server is running."}}"#
                .to_string(),
        );
        assert_eq!(error.code.as_deref(), Some("SERVER_STATE_ILLEGAL"));
        assert_eq!(error.message.as_deref(), Some("The server is running."));
        let display = error.to_string();
        assert!(display.contains("Status: 409"));
        assert!(display.contains("Code: SERVER_STATE_ILLEGAL"));
    }

    #[test]
    fn test_api_error_keeps_unstructured_body() {
        let error = ApiError::new(502, "<html>Bad Gateway</html>".to_string());
        assert_eq!(error.code, None);
        assert_eq!(error.body, "<html>Bad Gateway</html>");
        assert!(error.to_string().contains("Body: <html>Bad Gateway</html>"));
    }

    #[test]
    fn test_from_status_not_found() {
        let error = UpCloudError::from_status(StatusCode::NOT_FOUND, String::new());
        assert!(error.is_not_found());
        assert_eq!(error.status(), Some(404));
    }

    #[test]
    fn test_from_status_other() {
        let error = UpCloudError::from_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(!error.is_not_found());
        assert!(matches!(error, UpCloudError::Api(ApiError { status: 401, .. })));
    }

    #[test]
    fn test_status_of_local_errors() {
        assert_eq!(UpCloudError::InvalidCredentials.status(), None);
        assert_eq!(UpCloudError::MissingField("/host".to_string()).status(), None);
    }
}
