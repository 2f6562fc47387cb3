//! Command words understood by the bot and input-line parsing.

use std::fmt;

/// A command word typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept for logging
    Unknown(String),
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "help" => Command::Help,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word: &str = match self {
            Command::Hello => "hello",
            Command::Help => "help",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::Exit => "exit",
            Command::Unknown(word) => word.as_str(),
        };
        f.write_str(word)
    }
}

/// One line of input split into its command and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// The command word is case-insensitive; arguments are kept as typed.
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;

    Some(ParsedInput {
        command: Command::from(word),
        args: tokens.map(str::to_string).collect(),
    })
}

/// Usage text for the `help` command.
pub const HELP_TEXT: &str = "\
Commands:
  hello                               greet the bot
  add <name> <phone>                  add a contact (replaces one with the same name)
  change <name> <old phone> <new>     replace one of a contact's phones
  phone <name>                        show a contact's phones
  all                                 list every contact
  add-birthday <name> <DD.MM.YYYY>    set a contact's birthday
  show-birthday <name>                show a contact's birthday
  birthdays                           upcoming birthdays by weekday
  delete <name>                       remove a contact
  close | exit                        leave";
