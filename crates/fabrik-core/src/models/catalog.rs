//! Reference catalog entries and the read-only lookup index built over them.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalize::{normalize, strip_for_identity, strip_supplier_code_prefix, tokenize};

/// A single reference catalog record.
///
/// Names are not required to be unique; variant SKUs may share a name and
/// are retained as independent match candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Material name as stored in the catalog.
    pub name: String,

    /// Reference purchase price.
    pub price: Decimal,

    /// Default supplier, when the catalog records one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            supplier: None,
        }
    }

    pub fn with_supplier(mut self, supplier: impl Into<String>) -> Self {
        self.supplier = Some(supplier.into());
        self
    }
}

/// Abstract catalog persistence seam.
///
/// Concrete backing stores (CSV file, database) live outside the core; the
/// matching engine only ever sees the loaded entries.
pub trait CatalogSource {
    /// Load all catalog entries in their stored order.
    fn load(&self) -> Result<Vec<CatalogEntry>>;
}

/// A catalog entry with its precomputed comparison forms.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub(crate) entry: CatalogEntry,

    /// Token-normalized name.
    pub(crate) normalized: String,

    /// Identity form with any supplier-code prefix removed.
    pub(crate) identity: String,

    /// Tokens of the normalized name.
    pub(crate) tokens: HashSet<String>,
}

/// Read-only lookup structure over canonicalized catalog entries.
///
/// Built once per processing session and treated as immutable afterwards,
/// so concurrent matching over a shared reference needs no locking. A
/// catalog refresh builds a fresh index and swaps the reference (e.g. an
/// `Arc<CatalogIndex>`) atomically; an index in use by an in-flight match is
/// never mutated.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<IndexedEntry>,

    /// Normalized name -> position of the first entry bearing it. Later
    /// duplicates stay reachable through iteration.
    exact: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Build the index over `entries`, preserving their order.
    ///
    /// Entries whose name normalizes to an empty string carry no comparable
    /// signal and are dropped.
    pub fn build(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut index = Self::default();

        for entry in entries {
            let normalized = normalize(&entry.name);
            if normalized.is_empty() {
                tracing::debug!(name = %entry.name, "dropping catalog entry with empty normalized name");
                continue;
            }

            let identity = strip_for_identity(strip_supplier_code_prefix(&entry.name));
            let tokens = tokenize(&entry.name).into_iter().collect();

            let pos = index.entries.len();
            index.exact.entry(normalized.clone()).or_insert(pos);
            index.entries.push(IndexedEntry {
                entry,
                normalized,
                identity,
                tokens,
            });
        }

        tracing::debug!(entries = index.entries.len(), "catalog index built");
        index
    }

    /// Exact lookup by normalized name. On duplicate names the
    /// first-inserted entry wins.
    pub fn lookup_exact(&self, normalized: &str) -> Option<&CatalogEntry> {
        self.exact.get(normalized).map(|&i| &self.entries[i].entry)
    }

    /// Iterate `(normalized name, entry)` pairs in original catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries
            .iter()
            .map(|ie| (ie.normalized.as_str(), &ie.entry))
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_build_and_exact_lookup() {
        let index = CatalogIndex::build(vec![
            CatalogEntry::new("A - NEW ROYAL FABRIC", dec("549.00")),
            CatalogEntry::new("A - Sarom Cassia 101", dec("720.00")),
        ]);

        assert_eq!(index.len(), 2);
        let hit = index.lookup_exact(&normalize("A - NEW ROYAL FABRIC")).unwrap();
        assert_eq!(hit.price, dec("549.00"));
        assert!(index.lookup_exact("no such fabric").is_none());
    }

    #[test]
    fn test_duplicates_retained_first_wins_exact() {
        let index = CatalogIndex::build(vec![
            CatalogEntry::new("KEIBA 912", dec("570.00")),
            CatalogEntry::new("KEIBA 912", dec("580.00")),
        ]);

        // Both variants stay iterable as independent candidates
        assert_eq!(index.len(), 2);
        // Exact lookup resolves to the first-inserted entry
        assert_eq!(
            index.lookup_exact(&normalize("KEIBA 912")).unwrap().price,
            dec("570.00")
        );
    }

    #[test]
    fn test_iteration_preserves_order_and_restarts() {
        let index = CatalogIndex::build(vec![
            CatalogEntry::new("First", dec("1")),
            CatalogEntry::new("Second", dec("2")),
        ]);

        let names: Vec<_> = index.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        // Restartable
        let again: Vec<_> = index.iter().map(|(_, e)| e.name.as_str()).collect();
        assert_eq!(again, names);
    }

    #[test]
    fn test_empty_normalized_names_dropped() {
        let index = CatalogIndex::build(vec![
            CatalogEntry::new("  12  ", dec("5")),
            CatalogEntry::new("Velvet", dec("9")),
        ]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_identity_strips_supplier_prefix() {
        let index = CatalogIndex::build(vec![CatalogEntry::new(
            "A - NEW ROYAL FABRIC",
            dec("549.00"),
        )]);
        assert_eq!(index.indexed()[0].identity, "newroyalfabric");
    }
}
