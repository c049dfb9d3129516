//! Symmetric 2x2 self-energy matrices and their diagonalization.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use nalgebra::{Matrix2, SymmetricEigen};
use serde::{Deserialize, Serialize};

/// Three independent self-energy entries as produced by expansions and oracles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelfEnergyTerms {
    /// Upper diagonal entry.
    pub s1: f64,
    /// Lower diagonal entry.
    pub s2: f64,
    /// Off-diagonal entry.
    pub s12: f64,
}

impl SelfEnergyTerms {
    /// Creates a new triple.
    pub const fn new(s1: f64, s2: f64, s12: f64) -> Self {
        Self { s1, s2, s12 }
    }

    /// Returns true when all entries are finite.
    pub fn is_finite(&self) -> bool {
        self.s1.is_finite() && self.s2.is_finite() && self.s12.is_finite()
    }
}

/// Symmetric 2x2 real matrix in Higgs-field space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoopContribution {
    /// (1,1) entry.
    pub s11: f64,
    /// (1,2) = (2,1) entry.
    pub s12: f64,
    /// (2,2) entry.
    pub s22: f64,
}

impl LoopContribution {
    /// The zero matrix.
    pub const ZERO: LoopContribution = LoopContribution {
        s11: 0.0,
        s12: 0.0,
        s22: 0.0,
    };

    /// Creates a matrix from its independent entries.
    pub const fn new(s11: f64, s12: f64, s22: f64) -> Self {
        Self { s11, s12, s22 }
    }

    /// Arranges a self-energy triple as a matrix.
    pub const fn from_terms(terms: SelfEnergyTerms) -> Self {
        Self {
            s11: terms.s1,
            s12: terms.s12,
            s22: terms.s2,
        }
    }

    /// Exchanges the two diagonal entries.
    pub const fn swapped(self) -> Self {
        Self {
            s11: self.s22,
            s12: self.s12,
            s22: self.s11,
        }
    }

    /// Returns true when all entries are finite.
    pub fn is_finite(&self) -> bool {
        self.s11.is_finite() && self.s12.is_finite() && self.s22.is_finite()
    }

    /// Dense nalgebra representation.
    pub fn to_matrix(&self) -> Matrix2<f64> {
        Matrix2::new(self.s11, self.s12, self.s12, self.s22)
    }

    /// Eigenvalues in ascending order; NaN entries when the matrix is not finite.
    pub fn eigenvalues(&self) -> [f64; 2] {
        if !self.is_finite() {
            return [f64::NAN, f64::NAN];
        }
        let eigen = SymmetricEigen::new(self.to_matrix());
        let (a, b) = (eigen.eigenvalues[0], eigen.eigenvalues[1]);
        if a <= b {
            [a, b]
        } else {
            [b, a]
        }
    }

    /// Square root of the smaller eigenvalue; NaN for tachyonic or non-finite input.
    pub fn lightest_mass(&self) -> f64 {
        let lowest = self.eigenvalues()[0];
        if lowest.is_finite() && lowest >= 0.0 {
            lowest.sqrt()
        } else {
            f64::NAN
        }
    }

    /// Largest relative deviation between the entries of two matrices.
    pub fn max_relative_difference(&self, other: &LoopContribution) -> f64 {
        [
            (self.s11, other.s11),
            (self.s12, other.s12),
            (self.s22, other.s22),
        ]
        .into_iter()
        .map(|(a, b)| {
            let scale = a.abs().max(b.abs());
            if scale == 0.0 {
                0.0
            } else {
                (a - b).abs() / scale
            }
        })
        .fold(0.0, f64::max)
    }
}

impl Add for LoopContribution {
    type Output = LoopContribution;

    fn add(self, rhs: LoopContribution) -> LoopContribution {
        LoopContribution::new(self.s11 + rhs.s11, self.s12 + rhs.s12, self.s22 + rhs.s22)
    }
}

impl AddAssign for LoopContribution {
    fn add_assign(&mut self, rhs: LoopContribution) {
        *self = *self + rhs;
    }
}

impl Sub for LoopContribution {
    type Output = LoopContribution;

    fn sub(self, rhs: LoopContribution) -> LoopContribution {
        LoopContribution::new(self.s11 - rhs.s11, self.s12 - rhs.s12, self.s22 - rhs.s22)
    }
}

impl Neg for LoopContribution {
    type Output = LoopContribution;

    fn neg(self) -> LoopContribution {
        LoopContribution::new(-self.s11, -self.s12, -self.s22)
    }
}

impl Mul<f64> for LoopContribution {
    type Output = LoopContribution;

    fn mul(self, factor: f64) -> LoopContribution {
        LoopContribution::new(self.s11 * factor, self.s12 * factor, self.s22 * factor)
    }
}

impl Sum for LoopContribution {
    fn sum<I: Iterator<Item = LoopContribution>>(iter: I) -> LoopContribution {
        iter.fold(LoopContribution::ZERO, |acc, item| acc + item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal_matrix_eigenvalues_are_sorted() {
        let matrix = LoopContribution::new(9.0, 0.0, 4.0);
        assert_eq!(matrix.eigenvalues(), [4.0, 9.0]);
        assert_eq!(matrix.lightest_mass(), 2.0);
    }

    #[test]
    fn tachyonic_matrix_has_no_mass() {
        let matrix = LoopContribution::new(-1.0, 0.0, 4.0);
        assert!(matrix.lightest_mass().is_nan());
    }
}
