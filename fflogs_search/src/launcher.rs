//! Opening URLs in the system's default browser.
//!
//! The primary mechanism is the `$BROWSER` program, if one is set. When that is
//! missing or fails to start, a platform opener is tried instead: `cmd start`
//! on Windows, `xdg-open` on Linux and the BSDs, `open` on macOS. On any other
//! platform the original failure is returned.
//!
//! Spawned openers are never waited on.

use std::env;
use std::ffi::OsString;
use std::io;
use std::process::Command;

use log::{info, warn};
use thiserror::Error;

use crate::style::SearchStyle;

/// Failure to hand a URL off to a browser.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no browser configured ($BROWSER is unset)")]
    NoBrowser,
    #[error("failed to start {program} for {url}: {source}")]
    Spawn {
        program: String,
        url: String,
        #[source]
        source: io::Error,
    },
}

/// Something that can open a URL.
pub trait Launcher {
    /// Open `url`.
    ///
    /// # Errors
    /// Returns a [`LaunchError`] if the URL could not be handed off.
    fn open(&self, url: &str) -> Result<(), LaunchError>;
}

/// Operating system family, as far as opening URLs is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Map an `std::env::consts::OS` value to a platform family.
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Platform::Windows,
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Platform::Linux,
            "macos" => Platform::MacOs,
            _ => Platform::Other,
        }
    }
}

/// Build the platform-specific opener for `url`, if the platform has one.
pub fn fallback_command(platform: Platform, url: &str) -> Option<Command> {
    match platform {
        Platform::Windows => {
            // cmd treats a bare & as a command separator
            let escaped = url.replace('&', "^&");
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(escaped);
            Some(cmd)
        },
        Platform::Linux => {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            Some(cmd)
        },
        Platform::MacOs => {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            Some(cmd)
        },
        Platform::Other => None,
    }
}

/// Opens URLs through `$BROWSER` or the platform opener.
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    browser: Option<OsString>,
    platform: Platform,
    spawner: Spawner,
}

/// Starts a prepared command without waiting on it.
pub type Spawner = fn(&mut Command) -> io::Result<()>;

/// The real [`Spawner`]; the child is dropped, not awaited.
pub fn spawn_process(cmd: &mut Command) -> io::Result<()> {
    cmd.spawn().map(drop)
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new(env::var_os("BROWSER").filter(|b| !b.is_empty()), Platform::current())
    }
}

impl SystemLauncher {
    pub fn new(browser: Option<OsString>, platform: Platform) -> Self {
        Self {
            browser,
            platform,
            spawner: spawn_process,
        }
    }

    /// Replace how commands are started.
    #[must_use]
    pub fn with_spawner(mut self, spawner: Spawner) -> Self {
        self.spawner = spawner;
        self
    }

    fn open_primary(&self, url: &str) -> Result<(), LaunchError> {
        let browser = self.browser.as_ref().ok_or(LaunchError::NoBrowser)?;
        let mut cmd = Command::new(browser);
        cmd.arg(url);
        self.spawn_detached(cmd, url)
    }

    fn spawn_detached(&self, mut cmd: Command, url: &str) -> Result<(), LaunchError> {
        (self.spawner)(&mut cmd).map_err(|source| LaunchError::Spawn {
            program: cmd.get_program().to_string_lossy().into_owned(),
            url: url.to_string(),
            source,
        })
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        let primary_err = match self.open_primary(url) {
            Ok(()) => {
                info!("opened {url} with $BROWSER");
                return Ok(());
            },
            Err(err) => err,
        };

        let Some(cmd) = fallback_command(self.platform, url) else {
            warn!("no opener for platform {:?}", self.platform);
            return Err(primary_err);
        };
        if !matches!(primary_err, LaunchError::NoBrowser) {
            warn!("{primary_err}; falling back to {:?} opener", self.platform);
        }
        self.spawn_detached(cmd, url)?;
        info!("opened {url} with {:?} opener", self.platform);
        Ok(())
    }
}

/// Writes URLs to stdout instead of opening them.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        println!("{}", url.url_style());
        Ok(())
    }
}

/// Open `url` with the default [`SystemLauncher`].
///
/// ```no_run
/// use fflogs_search::launcher::open_url;
///
/// open_url("https://www.fflogs.com/search/?term=Yda%20Hext")?;
/// # Ok::<(), fflogs_search::launcher::LaunchError>(())
/// ```
///
/// # Errors
/// Returns a [`LaunchError`] if neither `$BROWSER` nor a platform opener could be started.
pub fn open_url(url: &str) -> Result<(), LaunchError> {
    SystemLauncher::default().open(url)
}
