use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric world (server) identifier as reported by the game client.
pub type WorldId = u32;

/// Site region a world belongs to, as used in FFLogs character routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Na,
    Eu,
    Jp,
    #[serde(alias = "oce")]
    Oc,
}

impl Region {
    /// Path segment FFLogs expects for this region.
    pub fn as_path(self) -> &'static str {
        match self {
            Region::Na => "na",
            Region::Eu => "eu",
            Region::Jp => "jp",
            Region::Oc => "oc",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// One row of the world table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorldEntry {
    #[serde(rename = "id")]
    pub world_id: WorldId,
    pub slug: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_center: Option<String>,
}

impl WorldEntry {
    pub fn new(world_id: WorldId, slug: impl Into<String>, region: Region) -> Self {
        Self {
            world_id,
            slug: slug.into(),
            region,
            data_center: None,
        }
    }

    /// Attach a data center label.
    #[must_use]
    pub fn in_data_center(mut self, name: impl Into<String>) -> Self {
        self.data_center = Some(name.into());
        self
    }
}

/// North-American worlds grouped by data center.
const NORTH_AMERICA: &[(&str, &[(WorldId, &str)])] = &[
    (
        "Aether",
        &[
            (73, "adamantoise"),
            (79, "cactuar"),
            (54, "faerie"),
            (63, "gilgamesh"),
            (40, "jenova"),
            (65, "midgardsormr"),
            (99, "sargatanas"),
            (57, "siren"),
        ],
    ),
    (
        "Crystal",
        &[
            (91, "balmung"),
            (34, "brynhildr"),
            (74, "coeurl"),
            (62, "diabolos"),
            (81, "goblin"),
            (75, "malboro"),
            (37, "mateus"),
            (41, "zalera"),
        ],
    ),
    (
        "Primal",
        &[
            (78, "behemoth"),
            (93, "excalibur"),
            (53, "exodus"),
            (35, "famfrit"),
            (95, "hyperion"),
            (55, "lamia"),
            (64, "leviathan"),
            (77, "ultros"),
        ],
    ),
    (
        "Dynamis",
        &[
            (406, "halicarnassus"),
            (407, "maduin"),
            (404, "marilith"),
            (405, "seraph"),
            (408, "cuchulainn"),
            (411, "golem"),
            (409, "kraken"),
            (410, "rafflesia"),
        ],
    ),
];

/// Built-in entries for every North-American world.
///
/// ```
/// let entries = fflogs_data::north_america_entries();
/// let adamantoise = entries.iter().find(|e| e.world_id == 73).unwrap();
/// assert_eq!(adamantoise.slug, "adamantoise");
/// assert_eq!(adamantoise.data_center.as_deref(), Some("Aether"));
/// ```
pub fn north_america_entries() -> Vec<WorldEntry> {
    NORTH_AMERICA
        .iter()
        .flat_map(|(dc, worlds)| {
            worlds
                .iter()
                .map(move |(id, slug)| WorldEntry::new(*id, *slug, Region::Na).in_data_center(*dc))
        })
        .collect()
}
