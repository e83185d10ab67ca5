//! Immutable world lookup table.

use std::collections::HashMap;

use crate::{TableError, WorldEntry, WorldId, north_america_entries, validate_table};

/// World id to entry mapping, built once and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct WorldTable {
    entries: HashMap<WorldId, WorldEntry>,
}

impl WorldTable {
    /// Build a table, rejecting the whole list if any entry is invalid.
    ///
    /// # Errors
    /// Returns every [`TableError`] found in `entries`.
    pub fn from_entries(entries: Vec<WorldEntry>) -> Result<Self, Vec<TableError>> {
        let errors = validate_table(&entries);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Self {
            entries: entries.into_iter().map(|e| (e.world_id, e)).collect(),
        })
    }

    /// The built-in North-American table.
    pub fn north_america() -> Self {
        Self {
            entries: north_america_entries().into_iter().map(|e| (e.world_id, e)).collect(),
        }
    }

    /// Layer `overrides` on top of `base`; an override replaces any base entry with the same id.
    ///
    /// # Errors
    /// Returns every [`TableError`] found in the combined entry list.
    pub fn layered(base: Vec<WorldEntry>, overrides: Vec<WorldEntry>) -> Result<Self, Vec<TableError>> {
        let mut combined: Vec<WorldEntry> = base
            .into_iter()
            .filter(|b| !overrides.iter().any(|o| o.world_id == b.world_id))
            .collect();
        combined.extend(overrides);
        Self::from_entries(combined)
    }

    pub fn get(&self, world_id: WorldId) -> Option<&WorldEntry> {
        self.entries.get(&world_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by world id.
    pub fn iter(&self) -> impl Iterator<Item = &WorldEntry> {
        let mut sorted: Vec<&WorldEntry> = self.entries.values().collect();
        sorted.sort_by_key(|e| e.world_id);
        sorted.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Region;

    #[test]
    fn lookup_by_id() {
        let table = WorldTable::north_america();
        assert_eq!(table.len(), 32);
        assert_eq!(table.get(409).map(|e| e.slug.as_str()), Some("kraken"));
        assert!(table.get(999).is_none());
    }

    #[test]
    fn iter_is_sorted() {
        let table = WorldTable::north_america();
        let ids: Vec<WorldId> = table.iter().map(|e| e.world_id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&34));
    }

    #[test]
    fn from_entries_rejects_duplicates() {
        let entries = vec![
            WorldEntry::new(1, "one", Region::Na),
            WorldEntry::new(1, "uno", Region::Na),
        ];
        let errors = WorldTable::from_entries(entries).unwrap_err();
        assert_eq!(errors, vec![TableError::DuplicateId { world_id: 1 }]);
    }

    #[test]
    fn overrides_replace_base_entries() {
        let overrides = vec![
            WorldEntry::new(73, "adamantoise", Region::Eu),
            WorldEntry::new(21, "ravana", Region::Oc),
        ];
        let table = WorldTable::layered(north_america_entries(), overrides).unwrap();
        assert_eq!(table.len(), 33);
        assert_eq!(table.get(73).map(|e| e.region), Some(Region::Eu));
        assert_eq!(table.get(21).map(|e| e.slug.as_str()), Some("ravana"));
    }

    #[test]
    fn empty_table() {
        let table = WorldTable::from_entries(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
