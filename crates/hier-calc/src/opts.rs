use serde::{Deserialize, Serialize};

use hier_core::{ErrorInfo, HierError};

fn config_error(code: &str, message: impl Into<String>) -> HierError {
    HierError::Config(ErrorInfo::new(code, message))
}

/// Renormalization scheme of the sfermion masses fed into the expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassScheme {
    /// Modified DR-bar masses (mdrFlag = 1).
    #[default]
    Mdr,
    /// Plain DR-bar masses (mdrFlag = 0).
    DrBar,
}

impl MassScheme {
    /// Returns true for the MDR scheme.
    pub const fn is_mdr(self) -> bool {
        matches!(self, MassScheme::Mdr)
    }
}

/// Variant of the h9q2 suitability predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum H9q2Rule {
    /// Compares the (always zero) Mst1 - Mst1 difference, as historically implemented.
    #[default]
    AsTranscribed,
    /// Compares the stop splitting Mst2 - Mst1 like h9 does.
    StopSplitting,
}

fn default_threads() -> usize {
    1
}

fn default_dsz_perturbation() -> f64 {
    1e-6
}

/// Options controlling a hierarchy calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcOpts {
    /// Scheme of the masses entering the expansions.
    #[serde(default)]
    pub scheme: MassScheme,
    /// Variant of the h9q2 suitability predicate.
    #[serde(default)]
    pub h9q2_rule: H9q2Rule,
    /// Worker threads used to evaluate candidates; 1 runs sequentially.
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Relative perturbation of the heavy stop on an oracle retry.
    #[serde(default = "default_dsz_perturbation")]
    pub dsz_perturbation: f64,
}

impl Default for CalcOpts {
    fn default() -> Self {
        Self {
            scheme: MassScheme::default(),
            h9q2_rule: H9q2Rule::default(),
            threads: default_threads(),
            dsz_perturbation: default_dsz_perturbation(),
        }
    }
}

impl CalcOpts {
    /// Returns a copy with at least one thread and a usable perturbation.
    pub fn sanitised(&self) -> Self {
        let dsz_perturbation = if self.dsz_perturbation.is_finite() && self.dsz_perturbation > 0.0
        {
            self.dsz_perturbation
        } else {
            default_dsz_perturbation()
        };
        Self {
            scheme: self.scheme,
            h9q2_rule: self.h9q2_rule,
            threads: self.threads.max(1),
            dsz_perturbation,
        }
    }

    /// Rejects options that [`CalcOpts::sanitised`] would have to repair.
    pub fn validate(&self) -> Result<(), HierError> {
        if self.threads == 0 {
            return Err(config_error("threads", "thread count must be at least one"));
        }
        if !self.dsz_perturbation.is_finite() || self.dsz_perturbation <= 0.0 {
            return Err(HierError::Config(
                ErrorInfo::new("dsz_perturbation", "perturbation must be finite and positive")
                    .with_context("value", self.dsz_perturbation.to_string()),
            ));
        }
        Ok(())
    }
}
