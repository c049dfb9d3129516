#![deny(missing_docs)]
#![doc = "Core data types for the lightest-Higgs hierarchy engine: the input spectrum, derived constants, hierarchy tags and symmetric self-energy matrices."]

pub mod constants;
pub mod errors;
pub mod matrix;
pub mod order;
pub mod params;
pub mod provenance;
/// Canonical JSON/YAML helpers and hashing.
#[path = "serde.rs"]
pub mod serde_io;
pub mod tag;

pub use constants::{log_ratio, DerivedConstants, SectorConstants, Transcendentals};
pub use errors::{ErrorInfo, HierError};
pub use matrix::{LoopContribution, SelfEnergyTerms};
pub use order::{LoopFlags, LoopOrder};
pub use params::{ParameterSet, SectorView};
pub use provenance::SchemaVersion;
pub use serde_io::stable_hash_string;
pub use tag::{HierarchyFamily, HierarchyTag};
