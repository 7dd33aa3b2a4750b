//! Authentication types for the domain layer.
//!
//! Basic-Auth credentials are decoded here, independent of any HTTP
//! framework. Verifying them is the job of the `UserDirectory` port.
//!
//! # Example
//!
//! ```ignore
//! // "shop:secret" base64-encoded
//! let creds = Credentials::from_basic_header("Basic c2hvcDpzZWNyZXQ=").unwrap();
//! assert_eq!(creds.username(), "shop");
//! ```

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use super::Username;

/// Username and password taken from a single request.
///
/// Never persisted. The password is wrapped in a [`SecretString`] so it
/// does not leak through `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    /// Creates credentials from their parts.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Decodes the value of an `Authorization` header.
    ///
    /// The `Basic` scheme prefix is optional and matched case-insensitively.
    /// The decoded text is split on the first `:` only, so passwords may
    /// contain colons. Returns `None` when decoding fails, the separator is
    /// missing, or either part is empty.
    pub fn from_basic_header(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let encoded = match trimmed.split_once(' ') {
            Some((scheme, rest)) if scheme.eq_ignore_ascii_case("basic") => rest.trim(),
            Some(_) => return None,
            None => trimmed,
        };

        let decoded = STANDARD.decode(encoded).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        if username.is_empty() || password.is_empty() {
            return None;
        }

        Some(Self::new(username, password))
    }

    /// Encodes the credentials as an `Authorization` header value.
    pub fn to_basic_header(&self) -> String {
        let joined = format!("{}:{}", self.username, self.password.expose_secret());
        format!("Basic {}", STANDARD.encode(joined))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecretString {
        &self.password
    }
}

/// A user whose credentials were verified for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: Username,
}

impl AuthenticatedUser {
    pub fn new(username: Username) -> Self {
        Self { username }
    }
}

/// Authentication errors that can occur during credential verification.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No usable `Authorization` header was sent.
    #[error("Missing or malformed credentials")]
    MissingCredentials,

    /// Unknown user or wrong password. Deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user directory could not be consulted.
    #[error("User directory unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encode(text: &str) -> String {
        STANDARD.encode(text)
    }

    #[test]
    fn decodes_bare_base64_value() {
        let creds = Credentials::from_basic_header(&encode("user:pass")).unwrap();
        assert_eq!(creds.username(), "user");
        assert_eq!(creds.password().expose_secret(), "pass");
    }

    #[test]
    fn decodes_value_with_basic_scheme() {
        let header = format!("Basic {}", encode("user:pass"));
        let creds = Credentials::from_basic_header(&header).unwrap();
        assert_eq!(creds.username(), "user");

        let header = format!("basic {}", encode("user:pass"));
        assert!(Credentials::from_basic_header(&header).is_some());
    }

    #[test]
    fn rejects_other_schemes() {
        let header = format!("Bearer {}", encode("user:pass"));
        assert!(Credentials::from_basic_header(&header).is_none());
    }

    #[test]
    fn splits_on_first_colon_only() {
        let creds = Credentials::from_basic_header(&encode("user:pa:ss")).unwrap();
        assert_eq!(creds.username(), "user");
        assert_eq!(creds.password().expose_secret(), "pa:ss");
    }

    #[test]
    fn rejects_missing_colon() {
        assert!(Credentials::from_basic_header(&encode("userpass")).is_none());
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(Credentials::from_basic_header(&encode(":pass")).is_none());
        assert!(Credentials::from_basic_header(&encode("user:")).is_none());
        assert!(Credentials::from_basic_header(&encode(":")).is_none());
        assert!(Credentials::from_basic_header("").is_none());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(Credentials::from_basic_header("not base64!!").is_none());
    }

    #[test]
    fn rejects_non_utf8_payload() {
        let header = STANDARD.encode([0xff, 0xfe, b':', b'x']);
        assert!(Credentials::from_basic_header(&header).is_none());
    }

    #[test]
    fn debug_output_hides_password() {
        let creds = Credentials::new("user", "hunter2");
        assert!(!format!("{:?}", creds).contains("hunter2"));
    }

    #[test]
    fn header_encoding_round_trips() {
        let creds = Credentials::new("shop", "s3cret");
        let decoded = Credentials::from_basic_header(&creds.to_basic_header()).unwrap();
        assert_eq!(decoded.username(), "shop");
        assert_eq!(decoded.password().expose_secret(), "s3cret");
    }

    #[test]
    fn service_unavailable_is_transient() {
        assert!(AuthError::service_unavailable("down").is_transient());
        assert!(!AuthError::InvalidCredentials.is_transient());
    }

    proptest! {
        #[test]
        fn decoding_recovers_user_and_password(
            user in "[^:\\x00]{1,24}",
            pass in "[^\\x00]{1,24}",
        ) {
            let header = encode(&format!("{}:{}", user, pass));
            let creds = Credentials::from_basic_header(&header).unwrap();
            prop_assert_eq!(creds.username(), user.as_str());
            prop_assert_eq!(creds.password().expose_secret().as_str(), pass.as_str());
        }
    }
}
