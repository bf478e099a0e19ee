//! Admin console
//!
//! Text rendition of the admin panel: login table, monitoring, access
//! controls. Clearing the log needs a second request inside the confirm window.

use crate::attempts::AttemptLog;
use crate::gate::{AccessGate, Session};
use chrono::Local;
use std::time::{Duration, Instant};
use veggie_core::PRODUCT;

const HELP: &str = r#"
Admin Commands
==============
  logins        Login attempts & IP tracking
  monitor       Real-time system status
  controls      Access control panel
  lock          Block all Guest access
  unlock        Restore Guest access
  toggle        Flip the site lockdown
  clear-logs    Clear login attempts (repeat to confirm)
  help          Show this help
  logout        Leave the admin panel
"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminOutcome {
    Output(String),
    Logout,
}

pub struct AdminConsole {
    session: Session,
    confirm_window: Duration,
    pending_clear: Option<Instant>,
}

impl AdminConsole {
    pub fn new(session: Session, confirm_window: Duration) -> Self {
        Self {
            session,
            confirm_window,
            pending_clear: None,
        }
    }

    pub fn prompt(&self) -> String {
        format!("{}@admin# ", self.session.identity.display_name)
    }

    pub fn header(&self) -> String {
        format!(
            "{} - Admin Panel\nAdministrator: {}",
            PRODUCT, self.session.identity.display_name
        )
    }

    /// First screen after login: header followed by the logins table
    pub fn landing(&self, gate: &AccessGate) -> String {
        format!("{}\n\n{}", self.header(), render_logins(gate.attempts()))
    }

    pub fn handle(&mut self, input: &str, gate: &mut AccessGate) -> AdminOutcome {
        let command = input.trim().to_lowercase();
        if command != "clear-logs" {
            self.pending_clear = None;
        }

        let output = match command.as_str() {
            "" => String::new(),
            "help" | "?" => HELP.to_string(),
            "logins" => render_logins(gate.attempts()),
            "monitor" => self.render_monitor(gate.is_locked()),
            "controls" => render_controls(gate.is_locked()),
            "lock" => {
                gate.set_locked(true);
                render_controls(true)
            }
            "unlock" => {
                gate.set_locked(false);
                render_controls(false)
            }
            "toggle" => {
                let locked = gate.toggle_lock();
                render_controls(locked)
            }
            "clear-logs" => self.clear_logs(gate),
            "logout" | "exit" => return AdminOutcome::Logout,
            other => format!("Unknown command: {}\nType 'help' for admin commands", other),
        };
        AdminOutcome::Output(output)
    }

    fn clear_logs(&mut self, gate: &mut AccessGate) -> String {
        match self.pending_clear.take() {
            Some(armed) if armed.elapsed() < self.confirm_window => {
                gate.clear_attempts();
                "Login attempts cleared".to_string()
            }
            _ => {
                self.pending_clear = Some(Instant::now());
                format!(
                    "CONFIRM CLEAR: run clear-logs again within {}s to delete {} attempts",
                    self.confirm_window.as_secs(),
                    gate.attempts().len()
                )
            }
        }
    }

    fn render_monitor(&self, locked: bool) -> String {
        let login_time = self
            .session
            .login_time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S");
        format!(
            "Real-Time System Status\n\nACTIVE SESSIONS\n  Current User: {}\n  Login Time: {}\n  IP: {}\n\nSYSTEM STATUS\n  Terminal Status: ONLINE\n  OSINT APIs: ACTIVE\n  Security Level: {}",
            self.session.identity.display_name,
            login_time,
            self.session.client.ip,
            if locked { "LOCKED" } else { "NORMAL" }
        )
    }
}

pub fn render_controls(locked: bool) -> String {
    let status = if locked {
        "SYSTEM LOCKED - Guest access denied"
    } else {
        "SYSTEM UNLOCKED - All users active"
    };
    format!(
        "Access Control Panel\n\nSITE LOCKDOWN\n  Blocks all Guest access while maintaining Admin privileges\n\nStatus: {}",
        status
    )
}

pub fn render_logins(log: &AttemptLog) -> String {
    let mut out = String::from("Login Attempts & IP Tracking\n\n");
    if log.is_empty() {
        out.push_str("No login attempts recorded");
        return out;
    }

    let headers = ["TIMESTAMP", "USERNAME", "IP ADDRESS", "USER AGENT", "STATUS"];
    let rows: Vec<[String; 5]> = log
        .iter()
        .map(|a| {
            [
                a.timestamp
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string(),
                a.username.clone(),
                a.ip.clone(),
                a.user_agent.clone(),
                a.status().to_string(),
            ]
        })
        .collect();

    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    out.push_str(&format_row(headers.to_vec()));
    out.push('\n');
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    for row in &rows {
        out.push('\n');
        out.push_str(&format_row(row.iter().map(String::as_str).collect()));
    }
    out
}
