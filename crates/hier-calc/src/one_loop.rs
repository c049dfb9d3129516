//! Closed-form tree-level and one-loop matrices.

use std::f64::consts::PI;

use hier_core::{DerivedConstants, LoopContribution, ParameterSet};

/// Tree-level CP-even mass matrix from MZ, MA and beta.
pub fn tree_level(params: &ParameterSet, constants: &DerivedConstants) -> LoopContribution {
    let (s, c) = (constants.sbeta, constants.cbeta);
    let mz2 = params.mz * params.mz;
    let ma2 = params.ma * params.ma;
    LoopContribution::new(
        mz2 * c * c + ma2 * s * s,
        -(mz2 + ma2) * s * c,
        mz2 * s * s + ma2 * c * c,
    )
}

/// Loop functions F1, F2, F3 of the O(alpha_q) correction.
fn loop_functions(quark: f64, m1: f64, m2: f64) -> (f64, f64, f64) {
    let k = 3.0 / (16.0 * PI * PI);
    let (m1s, m2s) = (m1 * m1, m2 * m2);
    let f1 = k * (m1s * m2s / quark.powi(4)).ln();
    if (m1s - m2s).abs() <= f64::EPSILON * m1s.max(m2s) {
        return (f1, 0.0, 0.0);
    }
    let ratio_log = (m1s / m2s).ln();
    let f2 = k * ratio_log;
    let f3 = k * (2.0 - (m1s + m2s) / (m1s - m2s) * ratio_log);
    (f1, f2, f3)
}

/// Exact one-loop matrix of a quark sector at the given sfermion masses.
///
/// Computed in the sector basis and returned in the (phi1, phi2) basis.
pub fn one_loop(
    params: &ParameterSet,
    constants: &DerivedConstants,
    is_bottom: bool,
    sfermions: [f64; 2],
) -> LoopContribution {
    let view = params.sector(is_bottom);
    let sector = constants.sector(is_bottom);
    let (m, s2) = (view.quark_mass, view.s2);
    let [m1, m2] = sfermions;
    let (sb, cb) = (sector.sbeta, sector.cbeta);

    let h2 = 2.0 * m * m / (constants.v2 * sb * sb);
    let (f1, f2, f3) = loop_functions(m, m1, m2);
    let x = s2 * (m1 * m1 - m2 * m2) / (2.0 * m);
    let a = x + params.mu * cb / sb;
    let mu = -params.mu;
    let s2sq = s2 * s2;

    let sector_matrix = LoopContribution::new(
        0.5 * h2 * mu * mu * s2sq * f3,
        h2 * mu * m * s2 * f2 + 0.5 * h2 * a * mu * s2sq * f3,
        2.0 * h2 * m * m * f1 + 2.0 * h2 * a * m * s2 * f2 + 0.5 * h2 * a * a * s2sq * f3,
    );
    if is_bottom {
        sector_matrix.swapped()
    } else {
        sector_matrix
    }
}
