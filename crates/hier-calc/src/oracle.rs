use serde::{Deserialize, Serialize};

use hier_core::{
    DerivedConstants, ErrorInfo, HierError, HierarchyTag, LoopContribution, ParameterSet,
    SelfEnergyTerms,
};

/// Arguments of the exact two-loop self-energy routine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OracleInput {
    /// Running quark mass of the sector.
    pub top_mass: f64,
    /// Gluino mass.
    pub gluino_mass: f64,
    /// Light sfermion mass.
    pub stop1: f64,
    /// Heavy sfermion mass.
    pub stop2: f64,
    /// Sine of the sfermion mixing angle.
    pub sin_mix: f64,
    /// Cosine of the sfermion mixing angle.
    pub cos_mix: f64,
    /// Renormalization scale.
    pub scale: f64,
    /// Higgsino mass in the routine's sign convention.
    pub mu: f64,
    /// tan(beta) in the sector role.
    pub tan_beta: f64,
    /// vu^2 + vd^2.
    pub vev2: f64,
    /// Strong gauge coupling.
    pub gauge_coupling: f64,
    /// On-shell renormalization of the sfermion sector.
    pub on_shell: bool,
}

impl OracleInput {
    /// Arguments for a sector evaluated at `sfermions`.
    pub fn new(
        params: &ParameterSet,
        constants: &DerivedConstants,
        is_bottom: bool,
        sfermions: [f64; 2],
    ) -> Self {
        let view = params.sector(is_bottom);
        let theta = view.s2.asin() / 2.0;
        let (sin_mix, cos_mix) = theta.sin_cos();
        Self {
            top_mass: view.quark_mass,
            gluino_mass: params.mg,
            stop1: sfermions[0],
            stop2: sfermions[1],
            sin_mix,
            cos_mix,
            scale: params.scale,
            mu: -params.mu,
            tan_beta: constants.sector(is_bottom).tbeta,
            vev2: constants.v2,
            gauge_coupling: params.g3,
            on_shell: false,
        }
    }

    /// Copy with the heavy sfermion scaled by `1 + perturbation`.
    pub fn perturbed(&self, perturbation: f64) -> Self {
        Self {
            stop2: self.stop2 * (1.0 + perturbation),
            ..*self
        }
    }
}

/// Exact numerical two-loop self-energy routine.
///
/// Returns (S11, S22, S12) in the sector basis; may yield non-finite values
/// close to mass degeneracies.
pub trait TwoLoopOracle: Send + Sync {
    /// Evaluates the self-energy.
    fn evaluate(&self, input: &OracleInput) -> SelfEnergyTerms;
}

impl<F> TwoLoopOracle for F
where
    F: Fn(&OracleInput) -> SelfEnergyTerms + Send + Sync,
{
    fn evaluate(&self, input: &OracleInput) -> SelfEnergyTerms {
        self(input)
    }
}

/// Oracle result mapped to the (phi1, phi2) basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExactTwoLoop {
    /// The matrix.
    pub matrix: LoopContribution,
    /// True when the perturbed retry was needed.
    pub retried: bool,
}

/// Evaluates the oracle, retrying once with a perturbed heavy sfermion on non-finite output.
pub fn evaluate_with_retry(
    oracle: &dyn TwoLoopOracle,
    input: &OracleInput,
    is_bottom: bool,
    perturbation: f64,
    tag: HierarchyTag,
) -> Result<ExactTwoLoop, HierError> {
    let to_basis = |terms: SelfEnergyTerms| {
        let matrix = LoopContribution::from_terms(terms);
        if is_bottom {
            matrix.swapped()
        } else {
            matrix
        }
    };

    let terms = oracle.evaluate(input);
    if terms.is_finite() {
        return Ok(ExactTwoLoop {
            matrix: to_basis(terms),
            retried: false,
        });
    }
    tracing::warn!(
        tag = %tag,
        perturbation,
        "two-loop oracle returned a non-finite entry, retrying with perturbed heavy stop"
    );
    let terms = oracle.evaluate(&input.perturbed(perturbation));
    if terms.is_finite() {
        return Ok(ExactTwoLoop {
            matrix: to_basis(terms),
            retried: true,
        });
    }
    Err(HierError::NumericalSingularity(
        ErrorInfo::new("oracle-non-finite", "two-loop oracle stayed non-finite after retry")
            .with_context("tag", tag.name())
            .with_context("stop1", input.stop1.to_string())
            .with_context("stop2", input.stop2.to_string()),
    ))
}
