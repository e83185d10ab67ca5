//! `handlers` module
//!
//! Glue between parsed commands, the resolver, and a launcher.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use fflogs_data::{WorldEntry, WorldTable};
use log::info;

use crate::command::{COMMAND_NAME, HELP_MESSAGE, SlashCommand};
use crate::launcher::Launcher;
use crate::resolver::{Target, WorldResolver};

/// Heading for worlds that have no data center recorded.
pub const UNASSIGNED_DATA_CENTER: &str = "(unassigned)";

/// What a handler did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Opened(String),
    Usage(String),
}

/// Run a parsed slash command.
///
/// # Errors
/// - if the launcher fails to open the search URL
pub fn run_slash(cmd: &SlashCommand, resolver: &WorldResolver<'_>, launcher: &dyn Launcher) -> Result<CommandOutcome> {
    match cmd {
        SlashCommand::Usage => Ok(CommandOutcome::Usage(format!("{COMMAND_NAME} <name>: {HELP_MESSAGE}"))),
        SlashCommand::Search(term) => {
            let url = resolver.search_url(term);
            info!("{COMMAND_NAME} searching for \"{term}\"");
            launcher
                .open(&url)
                .with_context(|| format!("while opening search for \"{term}\""))?;
            Ok(CommandOutcome::Opened(url))
        },
    }
}

/// Join command-line words into a character name, rejecting blank input.
///
/// # Errors
/// - if the joined name is empty or only whitespace
pub fn character_name(words: &[String]) -> Result<String> {
    let name = words.join(" ").trim().to_string();
    if name.is_empty() {
        bail!("a character name is required");
    }
    Ok(name)
}

/// Resolve a target and open the result.
///
/// # Errors
/// - if the launcher fails to open the URL
pub fn lookup_handler(target: &Target, resolver: &WorldResolver<'_>, launcher: &dyn Launcher) -> Result<String> {
    let url = resolver.resolve(target);
    launcher
        .open(&url)
        .with_context(|| format!("while opening lookup for \"{}\"", target.name))?;
    Ok(url)
}

/// Group the table's worlds by data center, sorted by data center name then world id.
pub fn worlds_by_data_center(table: &WorldTable) -> BTreeMap<&str, Vec<&WorldEntry>> {
    let mut groups: BTreeMap<&str, Vec<&WorldEntry>> = BTreeMap::new();
    for entry in table.iter() {
        let dc = entry.data_center.as_deref().unwrap_or(UNASSIGNED_DATA_CENTER);
        groups.entry(dc).or_default().push(entry);
    }
    groups
}
