use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Small parameter in which a hierarchy is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionVariable {
    /// Stop mass ratio expansion.
    Mst,
    /// Gluino mass expansion.
    Mgl,
    /// Average squark mass expansion.
    Msq,
    /// Trilinear coupling expansion.
    At,
    /// Gluino-stop splitting.
    Dmglst,
    /// Squark-stop splitting.
    Dmsqst,
    /// Stop-stop splitting.
    Dmst12,
    /// Squark-gluino splitting.
    Dmsqg,
}

impl ExpansionVariable {
    /// Every expansion variable.
    pub const ALL: [ExpansionVariable; 8] = [
        ExpansionVariable::Mst,
        ExpansionVariable::Mgl,
        ExpansionVariable::Msq,
        ExpansionVariable::At,
        ExpansionVariable::Dmglst,
        ExpansionVariable::Dmsqst,
        ExpansionVariable::Dmst12,
        ExpansionVariable::Dmsqg,
    ];
}

impl fmt::Display for ExpansionVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpansionVariable::Mst => "mst",
            ExpansionVariable::Mgl => "mgl",
            ExpansionVariable::Msq => "msq",
            ExpansionVariable::At => "at",
            ExpansionVariable::Dmglst => "dmglst",
            ExpansionVariable::Dmsqst => "dmsqst",
            ExpansionVariable::Dmst12 => "dmst12",
            ExpansionVariable::Dmsqg => "dmsqg",
        };
        f.write_str(name)
    }
}

/// Set of expansion variables whose subleading terms are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionDepth {
    truncated: BTreeSet<ExpansionVariable>,
}

impl ExpansionDepth {
    /// Keeps every available term.
    pub fn full() -> Self {
        Self::default()
    }

    /// Keeps only the leading term in every variable.
    pub fn leading() -> Self {
        Self {
            truncated: ExpansionVariable::ALL.into_iter().collect(),
        }
    }

    /// Returns a copy that additionally truncates `variable`.
    pub fn truncating(&self, variable: ExpansionVariable) -> Self {
        let mut truncated = self.truncated.clone();
        truncated.insert(variable);
        Self { truncated }
    }

    /// Returns true when the subleading terms of `variable` are dropped.
    pub fn is_truncated(&self, variable: ExpansionVariable) -> bool {
        self.truncated.contains(&variable)
    }

    /// Truncated variables in canonical order.
    pub fn truncated(&self) -> impl Iterator<Item = ExpansionVariable> + '_ {
        self.truncated.iter().copied()
    }
}
