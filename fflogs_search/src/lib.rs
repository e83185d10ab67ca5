#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const FFLOGS_SEARCH_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod command;
pub mod config;
pub mod handlers;
pub mod launcher;
pub mod menu;
pub mod resolver;
pub mod style;

// Re-exports for convenience
pub use command::{SlashCommand, parse_slash};
pub use config::Config;
pub use fflogs_data::{Region, WorldEntry, WorldTable};
pub use launcher::{LaunchError, Launcher, PrintLauncher, SystemLauncher, open_url};
pub use menu::{MenuBus, MenuOpened, MenuTarget, register_search_menu};
pub use resolver::{Target, WorldResolver};
