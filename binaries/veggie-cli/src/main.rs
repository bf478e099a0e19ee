//! VEGGIEWARE CLI
//!
//! Interactive OSINT terminal with a login gate and admin console, plus a
//! one-shot `exec` mode for scripting.

mod prompt;
mod render;
mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use veggie_config::VeggieConfig;
use veggie_core::{Identity, Role};
use veggie_osint::Interpreter;

#[derive(Parser)]
#[command(name = "veggie")]
#[command(about = "VEGGIEWARE - OSINT Intelligence Terminal")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/veggieware/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at info level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Boot the terminal and log in
    Shell {
        /// Skip the boot sequence
        #[arg(long)]
        no_boot: bool,
    },

    /// Run a single command line and print the report
    Exec {
        /// Identity role
        #[arg(long, default_value = "guest")]
        role: Role,

        /// Display name (defaults to the role's account name)
        #[arg(long)]
        user: Option<String>,

        /// Command line, e.g. `whois example.com`
        #[arg(required = true, trailing_var_arg = true)]
        line: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json_logs);

    let config = VeggieConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Shell { no_boot } => shell::run(config, !no_boot).await,
        Commands::Exec { role, user, line } => exec(config, role, user, line).await,
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn exec(config: VeggieConfig, role: Role, user: Option<String>, line: Vec<String>) -> Result<()> {
    let interpreter = Interpreter::from_config(&config)?;
    let name = user.unwrap_or_else(|| match role {
        Role::Admin => "Admin".to_string(),
        Role::Guest => "Guest".to_string(),
    });
    let identity = Identity::new(name, role);

    let output = interpreter.execute(&line.join(" "), &identity).await;
    render::output(&output)?;
    Ok(())
}
