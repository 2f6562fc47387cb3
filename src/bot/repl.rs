//! Read-eval-print loop driving the bot.

use super::commands::{parse_input, Command, ParsedInput, HELP_TEXT};
use super::handlers::AssistantBot;
use std::borrow::Cow;
use std::io::{self, BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Good bye!";

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Continue(String),
    /// Print the message and stop
    Exit(String),
}

/// Run one parsed command against the bot.
pub fn dispatch(bot: &mut AssistantBot, input: &ParsedInput) -> Reply {
    let args = input.args.as_slice();

    let message = match &input.command {
        Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => HELP_TEXT.to_string(),
        Command::Add => bot.add_contact(args),
        Command::Change => bot.change_contact(args),
        Command::Phone => bot.show_phone(args),
        Command::All => bot.show_all(),
        Command::AddBirthday => bot.add_birthday(args),
        Command::ShowBirthday => bot.show_birthday(args),
        Command::Birthdays => bot.list_upcoming_birthdays(),
        Command::Delete => bot.delete_contact(args),
        Command::Unknown(word) => {
            tracing::debug!(command = %word, "Unrecognized command");
            "Invalid command.".to_string()
        }
    };

    Reply::Continue(message)
}

/// Run the conversation until `close`/`exit` or end of input.
///
/// Blank lines are skipped and bytes that are not UTF-8 are replaced, so a
/// garbled line is answered like any other. Only I/O errors on
/// `input`/`output` are returned.
pub fn run<R, W>(bot: &mut AssistantBot, mut input: R, mut output: W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::info!("End of input, leaving");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!("Input line was not valid UTF-8, replaced invalid bytes");
        }

        let Some(parsed) = parse_input(&line) else {
            continue;
        };

        tracing::debug!(command = %parsed.command, args = parsed.args.len(), "Dispatching");

        match dispatch(bot, &parsed) {
            Reply::Continue(message) => writeln!(output, "{}", message)?,
            Reply::Exit(message) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
        }
    }
}
