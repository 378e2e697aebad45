//! Line tokenization into a command and its arguments.

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Unknown,
}

impl Command {
    /// Match a command word, ignoring case.
    pub fn from_word(word: &str) -> Self {
        match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// Split a raw input line on whitespace.
///
/// The first token selects the command; the rest are passed through
/// verbatim. An empty line yields `Command::Unknown` with no arguments.
pub fn parse_input(line: &str) -> (Command, Vec<String>) {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().map_or(Command::Unknown, Command::from_word);
    let args = tokens.map(str::to_string).collect();
    (command, args)
}
