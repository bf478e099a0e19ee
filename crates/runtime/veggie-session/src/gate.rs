//! Access gate
//!
//! Owns the credential verifier, the attempt log and the lockout flag.

use crate::attempts::{AttemptLog, LoginAttempt};
use crate::auth::{CredentialVerifier, StaticCredentials};
use crate::client::ClientInfo;
use crate::LoginError;
use chrono::{DateTime, Utc};
use veggie_core::Identity;

/// A successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub login_time: DateTime<Utc>,
    pub client: ClientInfo,
}

pub struct AccessGate {
    verifier: Box<dyn CredentialVerifier>,
    attempts: AttemptLog,
    locked: bool,
}

impl AccessGate {
    pub fn new(verifier: Box<dyn CredentialVerifier>) -> Self {
        Self {
            verifier,
            attempts: AttemptLog::new(),
            locked: false,
        }
    }

    /// Try to log in. Every submission with both fields filled is recorded.
    ///
    /// While locked, only admins get through.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        client: &ClientInfo,
    ) -> Result<Session, LoginError> {
        if username.is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let outcome = match self.verifier.verify(username, password) {
            None => Err(LoginError::InvalidCredentials),
            Some(role) if self.locked && !role.is_admin() => Err(LoginError::Locked),
            Some(role) => Ok(role),
        };

        let attempt = LoginAttempt::new(username, client, outcome.is_ok());
        let login_time = attempt.timestamp;
        self.attempts.record(attempt);

        match outcome {
            Ok(role) => {
                tracing::info!(user = username, %role, ip = %client.ip, "login succeeded");
                Ok(Session {
                    identity: Identity::new(username, role),
                    login_time,
                    client: client.clone(),
                })
            }
            Err(e) => {
                tracing::warn!(user = username, ip = %client.ip, reason = e.reason(), "login refused");
                Err(e)
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn set_locked(&mut self, locked: bool) {
        if self.locked != locked {
            tracing::info!(locked, "lockout changed");
        }
        self.locked = locked;
    }

    /// Flip the lockout flag, returning the new state
    pub fn toggle_lock(&mut self) -> bool {
        self.set_locked(!self.locked);
        self.locked
    }

    pub fn attempts(&self) -> &AttemptLog {
        &self.attempts
    }

    pub fn clear_attempts(&mut self) {
        tracing::info!(cleared = self.attempts.len(), "login attempts cleared");
        self.attempts.clear();
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(Box::new(StaticCredentials::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veggie_core::Role;

    fn client() -> ClientInfo {
        ClientInfo::new("192.0.2.10", "test-agent")
    }

    #[test]
    fn test_missing_fields_not_recorded() {
        let mut gate = AccessGate::default();
        assert_eq!(gate.login("", "Veggies", &client()), Err(LoginError::MissingFields));
        assert_eq!(gate.login("Guest", "", &client()), Err(LoginError::MissingFields));
        assert!(gate.attempts().is_empty());
    }

    #[test]
    fn test_guest_login() {
        let mut gate = AccessGate::default();
        let session = gate.login("Guest", "Veggies", &client()).unwrap();
        assert_eq!(session.identity, Identity::guest("Guest"));
        assert_eq!(session.client, client());

        let attempt = gate.attempts().iter().next().unwrap();
        assert!(attempt.success);
        assert_eq!(attempt.timestamp, session.login_time);
    }

    #[test]
    fn test_wrong_password_recorded() {
        let mut gate = AccessGate::default();
        assert_eq!(
            gate.login("Guest", "carrots", &client()),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(gate.attempts().len(), 1);
        assert_eq!(gate.attempts().failures(), 1);
    }

    #[test]
    fn test_username_not_trimmed() {
        let mut gate = AccessGate::default();
        assert_eq!(
            gate.login(" Guest", "Veggies", &client()),
            Err(LoginError::InvalidCredentials)
        );
        assert_eq!(gate.attempts().iter().next().unwrap().username, " Guest");
    }

    #[test]
    fn test_lockout_blocks_guests_only() {
        let mut gate = AccessGate::default();
        gate.set_locked(true);

        assert_eq!(gate.login("Guest", "Veggies", &client()), Err(LoginError::Locked));
        let admin = gate.login("Admin", "VeggiesAdmin", &client()).unwrap();
        assert_eq!(admin.identity.role, Role::Admin);

        let statuses: Vec<bool> = gate.attempts().iter().map(|a| a.success).collect();
        assert_eq!(statuses, vec![false, true]);
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut gate = AccessGate::default();
        assert!(gate.toggle_lock());
        assert!(gate.is_locked());
        assert!(!gate.toggle_lock());

        let _ = gate.login("x", "y", &client());
        gate.clear_attempts();
        assert!(gate.attempts().is_empty());
    }

    #[test]
    fn test_errors_share_message() {
        for e in [LoginError::MissingFields, LoginError::InvalidCredentials, LoginError::Locked] {
            assert_eq!(e.to_string(), "Access denied: Invalid credentials");
        }
    }
}
