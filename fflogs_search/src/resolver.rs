//! World resolution and URL construction.
//!
//! A [`WorldResolver`] turns a [`Target`] (character name plus optional home
//! world) into the FFLogs page to open: the character profile when the world
//! is in the table, the site search otherwise.

use fflogs_data::{WorldEntry, WorldId, WorldTable};
use log::debug;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_BASE_URL: &str = "https://www.fflogs.com";

/// Everything except the RFC 3986 unreserved characters gets escaped.
const NAME_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// A character to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub world_id: Option<WorldId>,
}

impl Target {
    pub fn new(name: impl Into<String>, world_id: Option<WorldId>) -> Self {
        Self {
            name: name.into(),
            world_id,
        }
    }

    /// A target with no known home world.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Percent-encode a name for use as a single path segment or query value.
pub fn encode_name(name: &str) -> String {
    utf8_percent_encode(name, NAME_COMPONENT).to_string()
}

/// Builds lookup URLs against a borrowed [`WorldTable`].
#[derive(Debug, Clone)]
pub struct WorldResolver<'t> {
    table: &'t WorldTable,
    base_url: String,
    profile_lookup: bool,
}

impl<'t> WorldResolver<'t> {
    pub fn new(table: &'t WorldTable) -> Self {
        Self {
            table,
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_lookup: true,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// When disabled every target resolves to a search, regardless of world.
    #[must_use]
    pub fn with_profile_lookup(mut self, enabled: bool) -> Self {
        self.profile_lookup = enabled;
        self
    }

    pub fn lookup(&self, world_id: WorldId) -> Option<&'t WorldEntry> {
        self.table.get(world_id)
    }

    /// Produce the URL to open for `target`. Unknown or missing worlds fall back to search.
    pub fn resolve(&self, target: &Target) -> String {
        let entry = target
            .world_id
            .filter(|_| self.profile_lookup)
            .and_then(|id| self.lookup(id));

        let url = match entry {
            Some(world) => self.profile_url(world, &target.name),
            None => self.search_url(&target.name),
        };
        debug!("resolved {target:?} to {url}");
        url
    }

    pub fn profile_url(&self, world: &WorldEntry, name: &str) -> String {
        format!(
            "{}/character/{}/{}/{}",
            self.base_url,
            world.region.as_path(),
            world.slug,
            encode_name(name)
        )
    }

    pub fn search_url(&self, term: &str) -> String {
        format!("{}/search/?term={}", self.base_url, encode_name(term))
    }
}
