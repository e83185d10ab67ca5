use std::collections::HashSet;
use std::fmt;

use crate::{WorldEntry, WorldId};

/// Problem found while checking a list of world entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    DuplicateId { world_id: WorldId },
    EmptySlug { world_id: WorldId },
    InvalidSlug { world_id: WorldId, slug: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::DuplicateId { world_id } => {
                write!(f, "duplicate world id {world_id}")
            },
            TableError::EmptySlug { world_id } => {
                write!(f, "world {world_id} has an empty slug")
            },
            TableError::InvalidSlug { world_id, slug } => {
                write!(f, "world {world_id} slug '{slug}' is not lowercase url-safe")
            },
        }
    }
}

impl std::error::Error for TableError {}

/// Check world ids are unique and slugs are usable in a URL path.
///
/// Every problem is reported, not just the first.
///
/// ```
/// use fflogs_data::{Region, TableError, WorldEntry, validate_table};
///
/// let entries = vec![
///     WorldEntry::new(73, "adamantoise", Region::Na),
///     WorldEntry::new(73, "Cactuar", Region::Na),
/// ];
/// let errors = validate_table(&entries);
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains(&TableError::DuplicateId { world_id: 73 }));
/// ```
pub fn validate_table(entries: &[WorldEntry]) -> Vec<TableError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for entry in entries {
        if !seen.insert(entry.world_id) {
            errors.push(TableError::DuplicateId {
                world_id: entry.world_id,
            });
        }
        if entry.slug.is_empty() {
            errors.push(TableError::EmptySlug {
                world_id: entry.world_id,
            });
        } else if !is_url_safe_slug(&entry.slug) {
            errors.push(TableError::InvalidSlug {
                world_id: entry.world_id,
                slug: entry.slug.clone(),
            });
        }
    }

    errors
}

fn is_url_safe_slug(slug: &str) -> bool {
    slug.chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-')
}
