use std::fs;
use std::path::Path;

use hier_core::serde_io::{from_json_slice, to_json_string};
use hier_core::{ErrorInfo, HierError};

use crate::table::{PolynomialTable, TableDocument};

/// Parses a JSON table document.
pub fn table_from_json_slice(data: &[u8]) -> Result<PolynomialTable, HierError> {
    let document: TableDocument = from_json_slice(data)?;
    PolynomialTable::from_document(document)
}

/// Pretty printed JSON document for a table.
pub fn table_to_json_string(table: &PolynomialTable) -> Result<String, HierError> {
    to_json_string(&table.to_document())
}

/// Reads a JSON table document from disk.
pub fn load_table(path: impl AsRef<Path>) -> Result<PolynomialTable, HierError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        HierError::Table(
            ErrorInfo::new("table-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })?;
    table_from_json_slice(&bytes)
}
