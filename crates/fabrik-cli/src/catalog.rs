//! CSV-backed catalog source.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;

use fabrik_core::{CatalogEntry, CatalogError, CatalogSource, Result};

/// Catalog loaded from a CSV export with `material_name`,
/// `default_purchase_price` and optional `default_supplier` columns.
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Deserialize)]
struct Row {
    material_name: String,
    default_purchase_price: String,
    #[serde(default)]
    default_supplier: Option<String>,
}

impl CatalogSource for CsvCatalog {
    fn load(&self) -> Result<Vec<CatalogEntry>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(csv_error)?;
        let mut entries = Vec::new();

        for (idx, record) in reader.deserialize::<Row>().enumerate() {
            let row = match record {
                Ok(row) => row,
                Err(err) => {
                    warn!(row = idx + 1, %err, "skipping malformed catalog row");
                    continue;
                }
            };

            let name = row.material_name.trim();
            if name.is_empty() {
                warn!(row = idx + 1, "skipping catalog row with empty name");
                continue;
            }

            let price: Decimal = match row.default_purchase_price.trim().replace(',', "").parse() {
                Ok(price) => price,
                Err(_) => {
                    warn!(
                        row = idx + 1,
                        name,
                        price = %row.default_purchase_price,
                        "skipping catalog row with unparseable price"
                    );
                    continue;
                }
            };

            let supplier = row
                .default_supplier
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty());

            let entry = match supplier {
                Some(supplier) => CatalogEntry::new(name, price).with_supplier(supplier),
                None => CatalogEntry::new(name, price),
            };
            entries.push(entry);
        }

        // An empty catalog is a degraded state, not a failure: matching
        // proceeds and every line comes back unmatched
        if entries.is_empty() {
            warn!(path = %self.path.display(), "catalog loaded with zero usable rows");
        }
        Ok(entries)
    }
}

fn csv_error(err: csv::Error) -> CatalogError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => CatalogError::Io(io),
        other => CatalogError::Malformed(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_loads_rows_with_and_without_supplier() {
        let file = write_csv(
            "material_name,default_purchase_price,default_supplier\n\
             A - Sarom Cassia 101,720.00,Sarom\n\
             NEW ROYAL FABRIC,549.00,\n",
        );
        let entries = CsvCatalog::new(file.path()).load().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "A - Sarom Cassia 101");
        assert_eq!(entries[0].price, "720.00".parse().unwrap());
        assert_eq!(entries[0].supplier.as_deref(), Some("Sarom"));
        assert_eq!(entries[1].supplier, None);
    }

    #[test]
    fn test_skips_malformed_rows() {
        let file = write_csv(
            "material_name,default_purchase_price\n\
             Good Fabric,100.00\n\
             Bad Price,not-a-number\n\
             ,200.00\n\
             Thousands,\"1,250.00\"\n",
        );
        let entries = CsvCatalog::new(file.path()).load().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Good Fabric");
        assert_eq!(entries[1].name, "Thousands");
        assert_eq!(entries[1].price, "1250.00".parse().unwrap());
    }

    #[test]
    fn test_headers_only_catalog_loads_empty() {
        let file = write_csv("material_name,default_purchase_price\n");
        assert_eq!(CsvCatalog::new(file.path()).load().unwrap().len(), 0);
    }

    #[test]
    fn test_catalog_without_usable_rows_loads_empty() {
        // Every row is skipped; the load itself still succeeds
        let file = write_csv("material_name,default_purchase_price\n,\nBad Price,oops\n");
        assert_eq!(CsvCatalog::new(file.path()).load().unwrap().len(), 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CsvCatalog::new("/nonexistent/catalog.csv").load().unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
