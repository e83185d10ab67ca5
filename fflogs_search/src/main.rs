#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** fflogs_search **
//! Look up game characters on FFLogs from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;

use fflogs_search::handlers::{CommandOutcome, character_name, lookup_handler, run_slash, worlds_by_data_center};
use fflogs_search::style::SearchStyle;
use fflogs_search::{
    Config, Launcher, MenuBus, MenuOpened, MenuTarget, PrintLauncher, SystemLauncher, Target, WorldTable,
    parse_slash, register_search_menu,
};

#[derive(Parser)]
#[command(author, version, about = "Open FFLogs character pages and searches.")]
struct Cli {
    /// Print URLs instead of opening them in a browser.
    #[arg(long, global = true)]
    print: bool,
    /// Read configuration from this file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search FFLogs for a name.
    Search {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Open a character's profile, or a search if the world is unknown.
    Lookup {
        #[arg(required = true)]
        name: Vec<String>,
        /// Numeric home world id.
        #[arg(long)]
        world: Option<u32>,
    },
    /// Run a `/fflogs ...` chat command.
    Slash { line: String },
    /// Simulate a right-click menu over a player and pick the FFLogs entry.
    Menu {
        /// Addon the menu was opened from; omit for the in-world target menu.
        #[arg(long)]
        addon: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        world: Option<u32>,
    },
    /// List the worlds that resolve to character profiles.
    Worlds,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = Config::discover(cli.config.as_deref()).context("while loading configuration")?;
    let table = config.world_table().context("while building the world table")?;
    let resolver = config.resolver(&table);
    let launcher: Box<dyn Launcher> = if cli.print {
        Box::new(PrintLauncher)
    } else {
        Box::new(SystemLauncher::default())
    };

    match cli.command {
        Commands::Search { name } => {
            let url = lookup_handler(&Target::named(character_name(&name)?), &resolver, launcher.as_ref())?;
            info!("opened {url}");
        },
        Commands::Lookup { name, world } => {
            let url = lookup_handler(&Target::new(character_name(&name)?, world), &resolver, launcher.as_ref())?;
            info!("opened {url}");
        },
        Commands::Slash { line } => {
            let Some(cmd) = parse_slash(&line) else {
                bail!("not a /fflogs command: {line}");
            };
            if let CommandOutcome::Usage(text) = run_slash(&cmd, &resolver, launcher.as_ref())? {
                println!("{text}");
            }
        },
        Commands::Menu { addon, name, world } => {
            let bus = MenuBus::new();
            let _registration = register_search_menu(&bus);
            let event = MenuOpened {
                addon,
                target: Some(MenuTarget { name, home_world: world }),
            };
            let items = bus.open_menu(&event);
            let Some(item) = items.first() else {
                println!("{}", "No FFLogs entry offered for this menu.".muted_style());
                return Ok(());
            };
            item.click(&resolver, launcher.as_ref())?;
        },
        Commands::Worlds => print_worlds(&table),
    }
    Ok(())
}

fn print_worlds(table: &WorldTable) {
    if table.is_empty() {
        println!("{}", "No worlds configured; every lookup will use search.".muted_style());
        return;
    }
    for (dc, worlds) in worlds_by_data_center(table) {
        println!("{}", dc.data_center_style());
        for world in worlds {
            println!(
                "  {:>4}  {} {}",
                world.world_id,
                world.slug.world_style(),
                format!("[{}]", world.region).dimmed()
            );
        }
    }
}
