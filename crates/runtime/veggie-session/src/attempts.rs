//! Login attempt log
//!
//! Lives for the process. Appended on every submitted login, emptied only
//! when an admin clears it.

use crate::client::ClientInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginAttempt {
    pub id: Uuid,
    pub username: String,
    pub ip: String,
    pub user_agent: String,
    pub timestamp: DateTime<Utc>,
    pub success: bool,
}

impl LoginAttempt {
    pub fn new(username: &str, client: &ClientInfo, success: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.to_string(),
            ip: client.ip.clone(),
            user_agent: client.user_agent.clone(),
            timestamp: Utc::now(),
            success,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.success {
            "SUCCESS"
        } else {
            "FAILED"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttemptLog {
    attempts: Vec<LoginAttempt>,
}

impl AttemptLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, attempt: LoginAttempt) {
        self.attempts.push(attempt);
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoginAttempt> {
        self.attempts.iter()
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn failures(&self) -> usize {
        self.attempts.iter().filter(|a| !a.success).count()
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }
}
