//! API key handling and credential resolution.
//!
//! A credential is resolved once, when tools are constructed: an explicit
//! value always wins and the environment is only consulted when none was
//! supplied.
//!
//! ```rust
//! use sgclient::{API_KEY_ENV_VAR, resolve_api_key_with};
//!
//! let key = resolve_api_key_with(None, API_KEY_ENV_VAR, |_| Some("sgai-123".to_string()))
//!     .expect("key should resolve from lookup");
//! assert_eq!(key.expose(), "sgai-123");
//! assert_eq!(format!("{key:?}"), "ApiKey([REDACTED])");
//! ```

use crate::ClientError;

pub const API_KEY_ENV_VAR: &str = "SGAI_API_KEY";

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Non-empty API key for the scrape service.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(SecretString);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Result<Self, ClientError> {
        let secret = SecretString::new(value.into().trim());
        if secret.is_blank() {
            return Err(ClientError::configuration("api key must not be empty"));
        }

        Ok(Self(secret))
    }

    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolves an API key from an explicit value or the process environment.
pub fn resolve_api_key(explicit: Option<&str>, env_var: &str) -> Result<ApiKey, ClientError> {
    resolve_api_key_with(explicit, env_var, |name| std::env::var(name).ok())
}

/// Resolves an API key, reading fallbacks through `lookup` instead of the
/// process environment.
///
/// `lookup` is never called when `explicit` is `Some`, even if the explicit
/// value is rejected.
pub fn resolve_api_key_with<F>(
    explicit: Option<&str>,
    env_var: &str,
    lookup: F,
) -> Result<ApiKey, ClientError>
where
    F: FnOnce(&str) -> Option<String>,
{
    if let Some(value) = explicit {
        return ApiKey::new(value);
    }

    match lookup(env_var) {
        Some(value) if !value.trim().is_empty() => ApiKey::new(value),
        _ => Err(ClientError::configuration(format!(
            "no api key supplied and environment variable '{env_var}' is not set"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::ClientErrorKind;

    #[test]
    fn explicit_key_never_consults_lookup() {
        let consulted = Cell::new(false);
        let key = resolve_api_key_with(Some("sgai-explicit"), API_KEY_ENV_VAR, |_| {
            consulted.set(true);
            Some("sgai-env".to_string())
        })
        .expect("explicit key should resolve");

        assert_eq!(key.expose(), "sgai-explicit");
        assert!(!consulted.get());
    }

    #[test]
    fn blank_explicit_key_is_rejected_without_fallback() {
        let consulted = Cell::new(false);
        let error = resolve_api_key_with(Some("   "), API_KEY_ENV_VAR, |_| {
            consulted.set(true);
            Some("sgai-env".to_string())
        })
        .expect_err("blank key should fail");

        assert_eq!(error.kind, ClientErrorKind::Configuration);
        assert!(!consulted.get());
    }

    #[test]
    fn missing_environment_value_is_a_configuration_error() {
        let error = resolve_api_key_with(None, "SGAI_TEST_UNSET", |_| None)
            .expect_err("missing env should fail");
        assert_eq!(error.kind, ClientErrorKind::Configuration);
        assert!(error.message.contains("SGAI_TEST_UNSET"));

        let blank = resolve_api_key_with(None, API_KEY_ENV_VAR, |_| Some(" ".to_string()))
            .expect_err("blank env should fail");
        assert_eq!(blank.kind, ClientErrorKind::Configuration);
    }

    #[test]
    fn lookup_receives_the_configured_variable_name() {
        let key = resolve_api_key_with(None, "CUSTOM_KEY_VAR", |name| {
            assert_eq!(name, "CUSTOM_KEY_VAR");
            Some(" sgai-trimmed ".to_string())
        })
        .expect("key should resolve");

        assert_eq!(key.expose(), "sgai-trimmed");
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = SecretString::new("top-secret");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");

        let key = ApiKey::new("sgai-abc").expect("key should be valid");
        assert!(!format!("{key:?}").contains("sgai-abc"));
    }
}
