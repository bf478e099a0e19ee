//! Interactive shell: boot, login, then terminal or admin console.
//!
//! Lockout state and the attempt log live as long as the process. Logging
//! out returns to the login prompt; Ctrl-D anywhere ends the shell.

use crate::prompt::{self, read, SecretEditor};
use crate::render;
use anyhow::Result;
use rustyline::DefaultEditor;
use std::time::Duration;

use veggie_config::VeggieConfig;
use veggie_osint::Interpreter;
use veggie_session::{
    AccessGate, AdminConsole, AdminOutcome, ClientInfo, Session, StaticCredentials, Submission,
    TerminalSession,
};

const BOOT_SEQUENCE: [&str; 5] = [
    "VEGGIEWARE BIOS v2.4.1",
    "Initializing secure boot sequence...",
    "Loading OSINT modules... [████████████████████] 100%",
    "Establishing encrypted channels...",
    "Authentication system online",
];

pub async fn run(config: VeggieConfig, boot: bool) -> Result<()> {
    let interpreter = Interpreter::from_config(&config)?;
    let mut gate = AccessGate::new(Box::new(StaticCredentials::from_config(&config.auth)));
    let confirm_window = Duration::from_millis(config.terminal.clear_confirm_ms);
    let mut editor = DefaultEditor::new()?;
    let mut secret = prompt::secret_editor()?;

    if boot {
        boot_sequence(Duration::from_millis(config.terminal.boot_delay_ms)).await?;
    }

    let client = ClientInfo::detect(&config.client).await;
    tracing::debug!(ip = %client.ip, user_agent = %client.user_agent, "client identified");

    while let Some(session) = login(&mut editor, &mut secret, &mut gate, &client)? {
        let again = if session.identity.role.is_admin() {
            admin_loop(&mut editor, AdminConsole::new(session, confirm_window), &mut gate)?
        } else {
            terminal_loop(&mut editor, TerminalSession::new(session), &gate, &interpreter).await?
        };
        if !again {
            break;
        }
    }

    render::info("Connection terminated")?;
    Ok(())
}

async fn boot_sequence(total: Duration) -> Result<()> {
    let step = total / BOOT_SEQUENCE.len() as u32;
    for line in BOOT_SEQUENCE {
        render::output(line)?;
        tokio::time::sleep(step).await;
    }
    Ok(())
}

fn login(
    editor: &mut DefaultEditor,
    secret: &mut SecretEditor,
    gate: &mut AccessGate,
    client: &ClientInfo,
) -> Result<Option<Session>> {
    render::info("\nSECURE ACCESS REQUIRED")?;
    loop {
        let Some(username) = read(editor, "Username: ")? else {
            return Ok(None);
        };
        let Some(password) = read(secret, "Password: ")? else {
            return Ok(None);
        };

        match gate.login(&username, &password, client) {
            Ok(session) => return Ok(Some(session)),
            Err(e) => render::error(&e.to_string())?,
        }
    }
}

/// Returns `false` when the user closed input instead of logging out.
async fn terminal_loop(
    editor: &mut DefaultEditor,
    mut terminal: TerminalSession,
    gate: &AccessGate,
    interpreter: &Interpreter,
) -> Result<bool> {
    render::clear()?;
    render::output(&terminal.welcome())?;

    loop {
        let Some(line) = read(editor, &terminal.prompt())? else {
            return Ok(false);
        };
        if !line.trim().is_empty() {
            editor.add_history_entry(line.as_str())?;
        }

        match terminal.submit(&line, gate.is_locked(), interpreter).await {
            Submission::Ignored => {}
            Submission::Denied(message) => render::error(&message)?,
            Submission::Output(output) => render::output(&output)?,
            Submission::Cleared => render::clear()?,
            Submission::Logout => {
                render::info("Logged out")?;
                return Ok(true);
            }
        }
    }
}

fn admin_loop(
    editor: &mut DefaultEditor,
    mut console: AdminConsole,
    gate: &mut AccessGate,
) -> Result<bool> {
    render::clear()?;
    render::output(&console.landing(gate))?;

    loop {
        let Some(line) = read(editor, &console.prompt())? else {
            return Ok(false);
        };

        match console.handle(&line, gate) {
            AdminOutcome::Output(output) => render::output(&output)?,
            AdminOutcome::Logout => {
                render::info("Logged out")?;
                return Ok(true);
            }
        }
    }
}
