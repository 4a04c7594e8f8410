//! Credential provider for the Deepnote API key.
//!
//! The key is owned by the host: the system keyring (keychain on macOS) or
//! the `DEEPNOTE_API_KEY` environment variable. The core only reads it.
//!
//! # Lookup order
//!
//! `ChainedCredentials::system()` checks the environment first, then the
//! keyring, so a key exported in the shell overrides the stored one.

use std::env;
use std::fmt;

use crate::error::{LauncherError, Result};

/// Environment variable that overrides the stored key
pub const API_KEY_ENV_VAR: &str = "DEEPNOTE_API_KEY";

/// Keyring entry name under the configured service
pub const API_KEY_ENTRY: &str = "apiKey";

/// A non-empty API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap `raw` if it passes `validate_api_key`. Surrounding whitespace is dropped.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let raw = raw.as_ref();
        validate_api_key(raw).then(|| Self(raw.trim().to_string()))
    }

    /// The raw key, for the Authorization header only. Never log it.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Placeholder validation: a non-empty trimmed string.
///
/// This never calls the remote service, so a malformed key and a revoked key
/// look the same until the first fetch fails.
pub fn validate_api_key(api_key: &str) -> bool {
    !api_key.trim().is_empty()
}

/// Source of the API key.
pub trait CredentialProvider {
    /// The key, or `None` if it is unset or blank.
    fn credential(&self) -> Option<ApiKey>;
}

/// Fixed key, for dependency injection and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Option<ApiKey>);

impl StaticCredentials {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(ApiKey::new(raw))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn credential(&self) -> Option<ApiKey> {
        self.0.clone()
    }
}

/// Key read from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredentials {
    fn credential(&self) -> Option<ApiKey> {
        env::var(&self.var).ok().and_then(ApiKey::new)
    }
}

/// Key stored in the system keyring.
#[derive(Debug, Clone)]
pub struct KeyringCredentials {
    service: String,
}

impl KeyringCredentials {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, API_KEY_ENTRY).map_err(|e| {
            LauncherError::Credential(format!("Failed to create keyring entry: {}", e))
        })
    }

    /// Store `api_key`, replacing any previous value.
    pub fn store(&self, api_key: &ApiKey) -> Result<()> {
        self.entry()?
            .set_password(api_key.expose())
            .map_err(|e| LauncherError::Credential(format!("Failed to store API key: {}", e)))?;
        tracing::info!(service = %self.service, "Stored API key in keyring");
        Ok(())
    }

    /// Remove the stored key. Removing a missing key is not an error.
    pub fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => {
                tracing::info!(service = %self.service, "Cleared API key from keyring");
                Ok(())
            }
            Err(e) => Err(LauncherError::Credential(format!(
                "Failed to delete API key: {}",
                e
            ))),
        }
    }
}

impl CredentialProvider for KeyringCredentials {
    fn credential(&self) -> Option<ApiKey> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(service = %self.service, error = %e, "Keyring unavailable");
                return None;
            }
        };
        match entry.get_password() {
            Ok(value) => ApiKey::new(value),
            Err(keyring::Error::NoEntry) => {
                tracing::debug!(service = %self.service, "No API key in keyring");
                None
            }
            Err(e) => {
                tracing::warn!(
                    service = %self.service,
                    error = %e,
                    "Error reading API key from keyring"
                );
                None
            }
        }
    }
}

/// First provider that yields a key wins.
pub struct ChainedCredentials {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainedCredentials {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Environment variable, then keyring under `service`.
    pub fn system(service: &str) -> Self {
        Self::new(vec![
            Box::new(EnvCredentials::default()),
            Box::new(KeyringCredentials::new(service)),
        ])
    }
}

impl CredentialProvider for ChainedCredentials {
    fn credential(&self) -> Option<ApiKey> {
        self.providers.iter().find_map(|provider| provider.credential())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_key() {
        assert!(validate_api_key("dn_abc"));
        assert!(validate_api_key("  dn_abc  "));
        assert!(!validate_api_key(""));
        assert!(!validate_api_key("   \n\t"));
    }

    #[test]
    fn test_api_key_trims_and_redacts() {
        let key = ApiKey::new("  secret-key\n").unwrap();
        assert_eq!(key.expose(), "secret-key");
        assert_eq!(format!("{:?}", key), "ApiKey(****)");
        assert!(ApiKey::new(" ").is_none());
    }

    #[test]
    fn test_static_credentials() {
        assert_eq!(
            StaticCredentials::new("k").credential().map(|k| k.expose().to_string()),
            Some("k".to_string())
        );
        assert!(StaticCredentials::new("").credential().is_none());
        assert!(StaticCredentials::none().credential().is_none());
    }

    #[test]
    fn test_env_credentials() {
        let var = "DEEPNOTE_LAUNCHER_TEST_ENV_CREDENTIALS";
        env::set_var(var, "env-key");
        assert_eq!(
            EnvCredentials::new(var).credential().map(|k| k.expose().to_string()),
            Some("env-key".to_string())
        );

        env::set_var(var, "   ");
        assert!(EnvCredentials::new(var).credential().is_none());

        env::remove_var(var);
        assert!(EnvCredentials::new(var).credential().is_none());
    }

    #[test]
    fn test_chained_credentials_first_match_wins() {
        let chain = ChainedCredentials::new(vec![
            Box::new(StaticCredentials::none()),
            Box::new(StaticCredentials::new("second")),
            Box::new(StaticCredentials::new("third")),
        ]);
        assert_eq!(chain.credential().unwrap().expose(), "second");

        let empty = ChainedCredentials::new(vec![Box::new(StaticCredentials::none())]);
        assert!(empty.credential().is_none());
    }

    #[test]
    #[cfg(feature = "system-tests")]
    #[ignore = "Touches the system keyring - run with --features system-tests -- --ignored"]
    fn test_keyring_round_trip() {
        let store = KeyringCredentials::new("com.deepnote.launcher.test");
        let key = ApiKey::new("round-trip-key").unwrap();
        store.store(&key).unwrap();
        assert_eq!(store.credential(), Some(key));
        store.clear().unwrap();
        assert!(store.credential().is_none());
    }
}
