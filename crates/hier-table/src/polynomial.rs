use serde::{Deserialize, Serialize};

use crate::depth::ExpansionVariable;
use crate::inputs::{ExpansionInputs, Symbol};

/// Integer power of a bundle entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    /// Bundle entry.
    pub symbol: Symbol,
    /// Exponent, negative for denominators.
    pub power: i32,
}

/// Monomial `coefficient * prod(symbol^power)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Numerical coefficient.
    pub coefficient: f64,
    /// Multiplicative factors.
    #[serde(default)]
    pub factors: Vec<Factor>,
    /// Expansion variable whose subleading order this term belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<ExpansionVariable>,
}

impl Term {
    /// Constant term.
    pub fn constant(coefficient: f64) -> Self {
        Self {
            coefficient,
            factors: Vec::new(),
            variable: None,
        }
    }

    /// Multiplies the term by `symbol^power`.
    pub fn times(mut self, symbol: Symbol, power: i32) -> Self {
        self.factors.push(Factor { symbol, power });
        self
    }

    /// Marks the term as subleading in `variable`.
    pub fn subleading_in(mut self, variable: ExpansionVariable) -> Self {
        self.variable = Some(variable);
        self
    }

    fn evaluate(&self, inputs: &ExpansionInputs) -> f64 {
        self.factors.iter().fold(self.coefficient, |acc, factor| {
            acc * inputs.value(factor.symbol).powi(factor.power)
        })
    }
}

/// Sum of terms, evaluated in insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    /// Terms of the polynomial.
    pub terms: Vec<Term>,
}

impl Polynomial {
    /// Polynomial from a list of terms.
    pub fn new(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Single constant term.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![Term::constant(value)])
    }

    /// Evaluates the retained terms at `inputs`.
    ///
    /// Terms tagged with a variable that `inputs.depth` truncates are skipped.
    pub fn evaluate(&self, inputs: &ExpansionInputs) -> f64 {
        self.terms
            .iter()
            .filter(|term| {
                term.variable
                    .map_or(true, |variable| !inputs.depth.is_truncated(variable))
            })
            .map(|term| term.evaluate(inputs))
            .sum()
    }
}
