//! Column-name lookup built from a header row.

use indexmap::IndexMap;
use tracing::trace;

/// Maps header names to zero-based column indices.
///
/// When a name repeats, the last occurrence wins.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: IndexMap<String, usize>,
}

impl HeaderIndex {
    /// Build the index from a header row.
    pub fn from_row<S: AsRef<str>>(header: &[S]) -> Self {
        let mut positions = IndexMap::with_capacity(header.len());
        for (index, name) in header.iter().enumerate() {
            let name = name.as_ref();
            trace!(column = name, index, "header column");
            positions.insert(name.to_string(), index);
        }
        Self { positions }
    }

    /// Column index for `name`, if the header has it.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Distinct column names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(|s| s.as_str())
    }

    /// Number of distinct column names.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions() {
        let index = HeaderIndex::from_row(&["name", "age", "has_pet"]);
        assert_eq!(index.position("name"), Some(0));
        assert_eq!(index.position("has_pet"), Some(2));
        assert_eq!(index.position("Name"), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_duplicate_name_uses_last_occurrence() {
        let index = HeaderIndex::from_row(&["id", "value", "id"]);
        assert_eq!(index.position("id"), Some(2));
        assert_eq!(index.len(), 2);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["id", "value"]);
    }

    #[test]
    fn test_empty_header() {
        let header: Vec<String> = Vec::new();
        assert!(HeaderIndex::from_row(&header).is_empty());
    }
}
