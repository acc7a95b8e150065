use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{Credentials, DEFAULT_API_URL, DEFAULT_TIMEOUT, UpCloudError};

pub const ENV_USERNAME: &str = "UPCLOUD_USERNAME";
pub const ENV_PASSWORD: &str = "UPCLOUD_PASSWORD";
pub const ENV_TIMEOUT: &str = "UPCLOUD_TIMEOUT";
pub const ENV_API_URL: &str = "UPCLOUD_API_URL";

/// Disables the request timeout when used as the `timeout` value.
const NO_TIMEOUT: &str = "none";

/// Everything needed to build an [`UpCloudClient`](crate::UpCloudClient).
#[derive(Clone)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    /// `None` waits forever.
    pub timeout: Option<Duration>,
    /// Scheme and host of the API, without the version segment.
    pub api_url: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// On-disk form:
///
/// ```toml
/// username = "api-user"
/// password = "secret"
/// timeout = "90s"   # humantime duration, or "none"
/// api_url = "https://api.upcloud.com"
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    username: String,
    password: String,
    #[serde(default)]
    timeout: Option<String>,
    #[serde(default)]
    api_url: Option<String>,
}

impl ClientConfig {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, UpCloudError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, UpCloudError> {
        let file: ConfigFile = toml::from_str(content)?;
        let timeout = match file.timeout {
            Some(value) => parse_timeout(&value)?,
            None => Some(DEFAULT_TIMEOUT),
        };
        Ok(Self {
            username: file.username,
            password: file.password,
            timeout,
            api_url: file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// Reads `UPCLOUD_USERNAME`, `UPCLOUD_PASSWORD` and the optional
    /// `UPCLOUD_TIMEOUT` and `UPCLOUD_API_URL`.
    pub fn from_env() -> Result<Self, UpCloudError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, UpCloudError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| UpCloudError::Config(format!("{key} is not set")))
        };
        let mut config = Self::new(required(ENV_USERNAME)?, required(ENV_PASSWORD)?);
        if let Some(value) = lookup(ENV_TIMEOUT) {
            config.timeout = parse_timeout(&value)?;
        }
        if let Some(url) = lookup(ENV_API_URL) {
            config.api_url = url;
        }
        Ok(config)
    }

    pub(crate) fn credentials(&self) -> Result<Credentials, UpCloudError> {
        Credentials::new(self.username.as_str(), self.password.as_str())
    }
}

fn parse_timeout(value: &str) -> Result<Option<Duration>, UpCloudError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case(NO_TIMEOUT) {
        return Ok(None);
    }
    humantime::parse_duration(value)
        .map(Some)
        .map_err(|e| UpCloudError::Config(format!("invalid timeout '{value}': {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn test_from_toml_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            username = "api-user"
            password = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(config.username, "api-user");
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_toml_custom_timeout() {
        let config = ClientConfig::from_toml(
            r#"
            username = "u"
            password = "p"
            timeout = "2m 30s"
            api_url = "http://127.0.0.1:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(150)));
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_from_toml_no_timeout() {
        let config = ClientConfig::from_toml(
            r#"
            username = "u"
            password = "p"
            timeout = "None"
            "#,
        )
        .unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_from_toml_invalid_timeout() {
        let result = ClientConfig::from_toml(
            r#"
            username = "u"
            password = "p"
            timeout = "soon"
            "#,
        );
        assert!(matches!(result, Err(UpCloudError::Config(_))));
    }

    #[test]
    fn test_from_toml_unknown_field() {
        let result = ClientConfig::from_toml(
            r#"
            username = "u"
            password = "p"
            token = "x"
            "#,
        );
        assert!(matches!(result, Err(UpCloudError::Toml(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "username = \"file-user\"\npassword = \"file-pass\"").unwrap();
        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.username, "file-user");
        assert!(config.credentials().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let result = ClientConfig::from_file("/nonexistent/upcloud.toml");
        assert!(matches!(result, Err(UpCloudError::Io(_))));
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_USERNAME, "env-user"),
            (ENV_PASSWORD, "env-pass"),
            (ENV_TIMEOUT, "10s"),
        ]);
        let config = ClientConfig::from_lookup(|k| env.get(k).map(ToString::to_string)).unwrap();
        assert_eq!(config.username, "env-user");
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_from_lookup_missing_password() {
        let env: HashMap<&str, &str> = HashMap::from([(ENV_USERNAME, "env-user")]);
        let result = ClientConfig::from_lookup(|k| env.get(k).map(ToString::to_string));
        let err = result.unwrap_err();
        assert!(err.to_string().contains(ENV_PASSWORD));
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let config = ClientConfig::new("", "p");
        assert!(matches!(
            config.credentials(),
            Err(UpCloudError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = ClientConfig::new("u", "hunter2");
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
