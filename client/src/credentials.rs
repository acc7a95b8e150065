use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::UpCloudError;

/// API username and password. Both must be non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UpCloudError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(UpCloudError::InvalidCredentials);
        }
        Ok(Self { username, password })
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn token(&self) -> AuthToken {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        AuthToken(format!("Basic {encoded}"))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Pre-encoded `Authorization` header value: `Basic base64(username:password)`.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn decode(token: &AuthToken) -> String {
        let encoded = token.as_str().strip_prefix("Basic ").unwrap();
        String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap()
    }

    #[test]
    fn test_token_known_value() {
        let credentials = Credentials::new("username", "password").unwrap();
        assert_eq!(
            credentials.token().as_str(),
            "Basic dXNlcm5hbWU6cGFzc3dvcmQ="
        );
    }

    #[test]
    fn test_token_decodes_to_username_password() {
        let pairs = [
            ("a", "b"),
            ("api-user", "s3cr3t!"),
            ("user", "pass:with:colons"),
            ("üser", "pässwörd"),
            ("user@example.com", " spaces in password "),
        ];
        for (username, password) in pairs {
            let token = Credentials::new(username, password).unwrap().token();
            assert_eq!(decode(&token), format!("{username}:{password}"));
        }
    }

    #[test]
    fn test_empty_username_rejected() {
        let result = Credentials::new("", "password");
        assert!(matches!(result, Err(UpCloudError::InvalidCredentials)));
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = Credentials::new("username", "");
        assert!(matches!(result, Err(UpCloudError::InvalidCredentials)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("username", "hunter2").unwrap();
        assert!(!format!("{credentials:?}").contains("hunter2"));
        assert!(!format!("{:?}", credentials.token()).contains("dXNl"));
    }
}
