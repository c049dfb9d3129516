use serde::{Deserialize, Serialize};

use hier_core::{HierarchyTag, LoopContribution, SchemaVersion};

use crate::shift::MdrMasses;

/// Schema version of [`HierarchyResult`] payloads.
pub const RESULT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Outcome of evaluating one suitable hierarchy during selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    /// Evaluated hierarchy.
    pub tag: HierarchyTag,
    /// Lightest mass from the exact two-loop reference.
    pub reference_mass: Option<f64>,
    /// Lightest mass from the leading two-loop expansion.
    pub expanded_mass: Option<f64>,
    /// |reference - expanded|.
    pub error: Option<f64>,
    /// True when the oracle needed the perturbed retry.
    pub retried: bool,
    /// Reason the hierarchy was excluded from the ranking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<String>,
}

impl CandidateReport {
    /// Report for a hierarchy that could not be ranked.
    pub fn excluded(tag: HierarchyTag, retried: bool, reason: impl Into<String>) -> Self {
        Self {
            tag,
            reference_mass: None,
            expanded_mass: None,
            error: None,
            retried,
            excluded: Some(reason.into()),
        }
    }

    /// Returns true when the hierarchy took part in the ranking.
    pub fn is_ranked(&self) -> bool {
        self.excluded.is_none() && self.error.is_some()
    }
}

/// Chosen hierarchy and the ranking that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Minimal-error hierarchy.
    pub tag: HierarchyTag,
    /// Its error.
    pub error: f64,
    /// Reference mass of the chosen hierarchy.
    pub reference_mass: f64,
    /// Every suitable hierarchy in canonical order.
    pub candidates: Vec<CandidateReport>,
}

/// Full evaluation of one (parameter set, sector) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyResult {
    /// Schema version of the payload.
    pub schema_version: SchemaVersion,
    /// Chosen hierarchy.
    pub tag: HierarchyTag,
    /// Sector of the evaluation.
    pub is_bottom: bool,
    /// Tree-level matrix.
    pub tree: LoopContribution,
    /// Exact one-loop matrix at DR-bar masses.
    pub one_loop: LoopContribution,
    /// One-loop DR-bar to MDR conversion.
    pub shift: LoopContribution,
    /// Two-loop expansion of the chosen hierarchy.
    pub two_loop: LoopContribution,
    /// Three-loop expansion of the chosen hierarchy.
    pub three_loop: LoopContribution,
    /// Three-loop expansion converted back to DR-bar' masses.
    pub three_loop_drbar_prime: LoopContribution,
    /// Exact two-loop reference of the chosen hierarchy.
    pub exact_two_loop: LoopContribution,
    /// Cumulative lightest masses: tree, one loop, two loop, three loop.
    pub mh: [f64; 4],
    /// Expansion uncertainty per loop order (tree first).
    pub expansion_uncertainty: [f64; 4],
    /// |Mh(exact two loop) - Mh(expanded two loop)| of the chosen hierarchy.
    pub abs_diff_2l: f64,
    /// `abs_diff_2l` relative to the exact two-loop mass.
    pub rel_diff_2l: f64,
    /// Shifted sfermion masses of the chosen hierarchy.
    pub mdr_masses: MdrMasses,
    /// Selection report.
    pub candidates: Vec<CandidateReport>,
    /// SHA-256 of the canonical payload with this field blank.
    pub result_hash: String,
}

impl HierarchyResult {
    /// Sum of tree, one-loop, shift and both expansions.
    pub fn total(&self) -> LoopContribution {
        self.tree + self.one_loop + self.shift + self.two_loop + self.three_loop
    }
}
