//! Ordered registry of documentation versions

use indexmap::IndexMap;

use crate::switcher::error::SwitchError;

/// A single documentation version known to the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Identifier used in URLs and option values (e.g. "0.13", "dev")
    pub identifier: String,
    /// Human-readable label shown in the dropdown
    pub label: String,
}

impl VersionEntry {
    pub fn new(identifier: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
        }
    }
}

/// Ordered mapping from version identifier to display label.
///
/// Insertion order determines display order in the dropdown. The registry is
/// fixed at build/config time; versions are never discovered at runtime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VersionRegistry {
    versions: IndexMap<String, String>,
}

impl VersionRegistry {
    /// Build a registry from `(identifier, label)` pairs.
    ///
    /// Identifiers must be unique; a duplicate is a configuration error.
    pub fn from_entries<I>(entries: I) -> Result<Self, SwitchError>
    where
        I: IntoIterator<Item = VersionEntry>,
    {
        let mut versions = IndexMap::new();
        for entry in entries {
            if versions
                .insert(entry.identifier.clone(), entry.label)
                .is_some()
            {
                return Err(SwitchError::DuplicateVersion(entry.identifier));
            }
        }
        Ok(Self { versions })
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.versions.contains_key(identifier)
    }

    /// Display label for a version identifier
    pub fn label_for(&self, identifier: &str) -> Option<&str> {
        self.versions.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl From<IndexMap<String, String>> for VersionRegistry {
    /// Map keys are already unique, so this conversion cannot fail
    fn from(versions: IndexMap<String, String>) -> Self {
        Self { versions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<VersionEntry> {
        vec![
            VersionEntry::new("dev", "dev"),
            VersionEntry::new("0.13", "0.13"),
            VersionEntry::new("0.12c", "0.12c"),
        ]
    }

    #[test]
    fn from_entries_preserves_insertion_order() {
        let registry = VersionRegistry::from_entries(entries()).unwrap();

        let identifiers: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(identifiers, vec!["dev", "0.13", "0.12c"]);
    }

    #[test]
    fn from_entries_rejects_duplicate_identifiers() {
        let mut duplicated = entries();
        duplicated.push(VersionEntry::new("0.13", "0.13 again"));

        let result = VersionRegistry::from_entries(duplicated);

        assert!(matches!(
            result,
            Err(SwitchError::DuplicateVersion(id)) if id == "0.13"
        ));
    }

    #[test]
    fn label_for_returns_label_for_known_identifier() {
        let registry =
            VersionRegistry::from_entries(vec![VersionEntry::new("0.13", "0.13 (stable)")])
                .unwrap();

        assert_eq!(registry.label_for("0.13"), Some("0.13 (stable)"));
        assert_eq!(registry.label_for("0.14"), None);
    }

    #[test]
    fn from_index_map_keeps_map_order() {
        let map = indexmap::IndexMap::from([
            ("0.12c".to_string(), "0.12c".to_string()),
            ("dev".to_string(), "dev".to_string()),
        ]);

        let registry = VersionRegistry::from(map);

        let identifiers: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(identifiers, vec!["0.12c", "dev"]);
        assert!(registry.contains("dev"));
        assert_eq!(registry.len(), 2);
    }
}
