//! Transcendental constants and quantities derived once per parameter set.

use std::f64::consts::{PI, SQRT_2};

use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;

/// Riemann zeta(2).
pub const ZETA2: f64 = 1.644_934_066_848_226_4;
/// Riemann zeta(3).
pub const ZETA3: f64 = 1.202_056_903_159_594_3;
/// Riemann zeta(4).
pub const ZETA4: f64 = 1.082_323_233_711_138_2;
/// Li4(1/2).
pub const LI4_HALF: f64 = 0.517_479_061_673_899_4;
/// Clausen function Cl2(pi/3).
pub const CLAUSEN_PI_3: f64 = 1.014_941_606_409_653_6;
/// B4 = 16 Li4(1/2) + 2/3 ln^4 2 - 2/3 pi^2 ln^2 2 - 13/180 pi^4.
pub const B4: f64 = -1.762_800_087_073_770_9;
/// S2 = 4/(9 sqrt 3) Cl2(pi/3).
pub const CLAUSEN_S2: f64 = 0.260_434_137_632_162_1;
/// D3 = 6 zeta(3) - 15/4 zeta(4) - 6 Cl2(pi/3)^2.
pub const D3: f64 = -3.027_009_493_987_652;

/// Transcendental constants bundled for the expansion inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transcendentals {
    /// zeta(2).
    pub z2: f64,
    /// zeta(3).
    pub z3: f64,
    /// zeta(4).
    pub z4: f64,
    /// B4.
    pub b4: f64,
    /// D3.
    pub d3: f64,
    /// S2.
    pub clausen_s2: f64,
}

impl Default for Transcendentals {
    fn default() -> Self {
        Self {
            z2: ZETA2,
            z3: ZETA3,
            z4: ZETA4,
            b4: B4,
            d3: D3,
            clausen_s2: CLAUSEN_S2,
        }
    }
}

/// Sector specific derived quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorConstants {
    /// Average mass of the ten squarks outside the sector.
    pub msq: f64,
    /// ln(Q^2 / Msq^2).
    pub lm_msq: f64,
    /// ln(Q^2 / m_q^2) for the sector quark.
    pub lm_mq: f64,
    /// Sine of beta in the role of the doublet coupling to the sector quark.
    pub sbeta: f64,
    /// Cosine of beta in the same role.
    pub cbeta: f64,
    /// sbeta / cbeta.
    pub tbeta: f64,
    /// Normalization applied to expansion output.
    pub prefac: f64,
}

/// Quantities computed once from a [`ParameterSet`] and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedConstants {
    /// vu^2 + vd^2.
    pub v2: f64,
    /// Mixing angle beta of the Higgs doublets.
    pub beta: f64,
    /// sin(beta).
    pub sbeta: f64,
    /// cos(beta).
    pub cbeta: f64,
    /// tan(beta) = vu / vd.
    pub tbeta: f64,
    /// alpha_s / (4 pi) = g3^2 / (16 pi^2).
    pub al4p: f64,
    /// ln(Q^2 / Mgl^2).
    pub lm_mgl: f64,
    /// Top sector quantities.
    pub top: SectorConstants,
    /// Bottom sector quantities.
    pub bottom: SectorConstants,
    /// Transcendental constants.
    pub transcendentals: Transcendentals,
}

/// ln(Q^2 / m^2).
pub fn log_ratio(scale: f64, mass: f64) -> f64 {
    (scale * scale / (mass * mass)).ln()
}

fn average_squark_mass(params: &ParameterSet, is_bottom: bool) -> f64 {
    let light = 2.0 * params.mq2[0][0].sqrt()
        + params.mu2[0][0].sqrt()
        + params.md2[0][0].sqrt()
        + 2.0 * params.mq2[1][1].sqrt()
        + params.mu2[1][1].sqrt()
        + params.md2[1][1].sqrt();
    let third = if is_bottom {
        params.mq2[2][2].sqrt() + params.mu2[2][2].sqrt()
    } else {
        params.mq2[2][2].sqrt() + params.md2[2][2].sqrt()
    };
    (light + third) / 10.0
}

fn prefactor(v2: f64, sbeta: f64) -> f64 {
    3.0 / (SQRT_2 * v2 * SQRT_2 * PI * PI * sbeta * sbeta)
}

impl DerivedConstants {
    /// Computes the derived quantities for a parameter set.
    pub fn new(params: &ParameterSet) -> Self {
        let v2 = params.vu * params.vu + params.vd * params.vd;
        let beta = params.vu.atan2(params.vd);
        let (sbeta, cbeta) = beta.sin_cos();
        let tbeta = params.vu / params.vd;

        let sector = |is_bottom: bool| {
            let msq = average_squark_mass(params, is_bottom);
            let (quark, s, c) = if is_bottom {
                (params.mb, cbeta, sbeta)
            } else {
                (params.mt, sbeta, cbeta)
            };
            SectorConstants {
                msq,
                lm_msq: log_ratio(params.scale, msq),
                lm_mq: log_ratio(params.scale, quark),
                sbeta: s,
                cbeta: c,
                tbeta: s / c,
                prefac: prefactor(v2, s),
            }
        };

        Self {
            v2,
            beta,
            sbeta,
            cbeta,
            tbeta,
            al4p: params.g3 * params.g3 / (16.0 * PI * PI),
            lm_mgl: log_ratio(params.scale, params.mg),
            top: sector(false),
            bottom: sector(true),
            transcendentals: Transcendentals::default(),
        }
    }

    /// Returns the constants of the requested sector.
    pub fn sector(&self, is_bottom: bool) -> &SectorConstants {
        if is_bottom {
            &self.bottom
        } else {
            &self.top
        }
    }
}
