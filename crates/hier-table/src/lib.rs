#![deny(missing_docs)]
#![doc = "Expansion table interface for the hierarchy engine: the parameter bundle, truncation depth and a data-driven polynomial table."]

/// Expansion variables and truncation depth.
pub mod depth;
/// Parameter bundle handed to expansion tables.
pub mod inputs;
/// Monomials and polynomials over bundle entries.
pub mod polynomial;
/// Table documents on disk.
#[path = "serde.rs"]
pub mod serde_io;
/// The expansion table trait and the polynomial table.
pub mod table;

pub use depth::{ExpansionDepth, ExpansionVariable};
pub use inputs::{ExpansionInputs, Splittings, StopIndex, Symbol};
pub use polynomial::{Factor, Polynomial, Term};
pub use serde_io::{load_table, table_from_json_slice, table_to_json_string};
pub use table::{ExpansionEntry, ExpansionTable, PolynomialTable, TableDocument, TABLE_SCHEMA};
