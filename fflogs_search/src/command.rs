//! Slash command module
//!
//! Parses `/fflogs` chat commands.

pub const COMMAND_NAME: &str = "/fflogs";
pub const HELP_MESSAGE: &str = "Uses args to search fflogs";

/// Commands recognized from chat input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Search(String),
    Usage,
}

/// Parse a chat line. Returns `None` unless the line invokes [`COMMAND_NAME`].
pub fn parse_slash(input: &str) -> Option<SlashCommand> {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        [cmd] if is_command_word(cmd) => Some(SlashCommand::Usage),
        [cmd, args @ ..] if is_command_word(cmd) => Some(SlashCommand::Search(args.join(" "))),
        _ => None,
    }
}

fn is_command_word(word: &str) -> bool {
    word.eq_ignore_ascii_case(COMMAND_NAME)
}
