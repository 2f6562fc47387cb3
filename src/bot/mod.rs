//! Interactive assistant bot.
//!
//! This module provides the command handlers and the read-eval-print loop
//! that exposes the address book on a text console.

pub mod commands;
pub mod handlers;
pub mod repl;

pub use commands::{parse_input, Command, ParsedInput};
pub use handlers::AssistantBot;
pub use repl::{dispatch, Reply};

use crate::config::Config;
use anyhow::Result;
use std::io;

/// Run the bot on the process's stdin and stdout.
///
/// This function blocks until the user exits or stdin is closed.
///
/// # Arguments
/// * `config` - Loaded configuration (prompt and birthday window)
pub fn run_bot(config: &Config) -> Result<()> {
    let mut bot = AssistantBot::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut bot, stdin.lock(), stdout.lock(), &config.prompt)?;

    tracing::info!(contacts = bot.book().len(), "Session finished");
    Ok(())
}
