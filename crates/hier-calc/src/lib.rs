#![deny(missing_docs)]
#![doc = "Hierarchy selection and Higgs mass-matrix assembly: MDR shifting, suitability, ranking against an exact two-loop oracle and expansion uncertainties."]

mod assemble;
/// Calculation session and full evaluation.
pub mod calculator;
/// Canonical hashing of results.
pub mod hash;
/// Closed-form tree-level and one-loop matrices.
pub mod one_loop;
/// Calculation options.
pub mod opts;
/// Exact two-loop oracle interface.
pub mod oracle;
/// Per-hierarchy registry.
pub mod registry;
/// Result and selection reports.
pub mod result;
mod select;
/// DR-bar to MDR mass conversion.
pub mod shift;
/// Mass-ordering predicates.
pub mod suitability;
mod uncertainty;

pub use calculator::HierarchyCalculator;
pub use hash::hash_result;
pub use opts::{CalcOpts, H9q2Rule, MassScheme};
pub use oracle::{ExactTwoLoop, OracleInput, TwoLoopOracle};
pub use registry::{lookup, FamilySpec, HierarchySpec, ShiftFormula};
pub use result::{CandidateReport, HierarchyResult, Selection, RESULT_SCHEMA};
pub use shift::{MdrMasses, MdrShifter, ShiftOrders};
pub use suitability::{is_suitable, suitable_tags, MassOrdering};
