//! Credential verification

use veggie_config::{Account, AuthConfig};
use veggie_core::Role;

/// Decides whether a username/password pair is allowed in, and as what.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Option<Role>;
}

/// Fixed account list from configuration. Comparison is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    accounts: Vec<Account>,
}

impl StaticCredentials {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.accounts.clone())
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Role> {
        self.accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
            .map(|a| a.role)
    }
}
