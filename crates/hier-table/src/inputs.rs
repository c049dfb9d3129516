use serde::{Deserialize, Serialize};

use hier_core::{log_ratio, DerivedConstants, ParameterSet};

use crate::depth::ExpansionDepth;

/// Which stop enters a mass splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopIndex {
    /// Lighter stop.
    Light,
    /// Heavier stop.
    Heavy,
}

impl StopIndex {
    const fn index(self) -> usize {
        match self {
            StopIndex::Light => 0,
            StopIndex::Heavy => 1,
        }
    }
}

/// Reference stops of the gluino and squark splittings of a hierarchy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Splittings {
    /// Stop subtracted from the gluino mass.
    pub gluino: StopIndex,
    /// Stop subtracted from the average squark mass.
    pub squark: StopIndex,
}

impl Splittings {
    /// Creates a splitting pair.
    pub const fn new(gluino: StopIndex, squark: StopIndex) -> Self {
        Self { gluino, squark }
    }
}

/// Named entry of the parameter bundle that polynomial terms may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Symbol {
    Mt,
    Mu,
    S2t,
    At,
    Tbeta,
    Sbeta,
    Cbeta,
    Al4p,
    Scale,
    Mst1,
    Mst2,
    Mgl,
    Msq,
    Dmglst,
    Dmsqst,
    Dmst12,
    Dmsqg,
    LmMt,
    LmMst1,
    LmMst2,
    LmMgl,
    LmMsq,
    MdrFlag,
    Z2,
    Z3,
    Z4,
    B4,
    D3,
    ClausenS2,
}

/// Parameter bundle handed to the expansion table for one (tag, order) evaluation.
///
/// Quark-sector quantities (`mt`, `s2t`, stop masses, beta roles) refer to the
/// active sector; for the bottom sector they hold the bottom/sbottom values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpansionInputs {
    /// Running quark mass of the sector.
    pub mt: f64,
    /// Higgsino mass parameter.
    pub mu: f64,
    /// Sine of twice the sfermion mixing angle.
    pub s2t: f64,
    /// Trilinear coupling reconstructed from the bundle masses.
    pub at: f64,
    /// tan(beta) in the sector role.
    pub tbeta: f64,
    /// sin(beta) in the sector role.
    pub sbeta: f64,
    /// cos(beta) in the sector role.
    pub cbeta: f64,
    /// alpha_s / (4 pi).
    pub al4p: f64,
    /// Renormalization scale.
    pub scale: f64,
    /// Light sfermion mass.
    pub mst1: f64,
    /// Heavy sfermion mass.
    pub mst2: f64,
    /// Gluino mass.
    pub mgl: f64,
    /// Average squark mass of the sector.
    pub msq: f64,
    /// Gluino minus reference stop.
    pub dmglst: f64,
    /// Msq^2 minus reference stop squared.
    pub dmsqst: f64,
    /// mst1^2 - mst2^2.
    pub dmst12: f64,
    /// Msq - Mgl.
    pub dmsqg: f64,
    /// ln(Q^2 / mt^2).
    pub lm_mt: f64,
    /// ln(Q^2 / mst1^2).
    pub lm_mst1: f64,
    /// ln(Q^2 / mst2^2).
    pub lm_mst2: f64,
    /// ln(Q^2 / Mgl^2).
    pub lm_mgl: f64,
    /// ln(Q^2 / Msq^2).
    pub lm_msq: f64,
    /// 1 for MDR masses, 0 for DR-bar.
    pub mdr_flag: f64,
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
    /// Truncation applied while evaluating.
    pub depth: ExpansionDepth,
}

impl ExpansionInputs {
    /// Builds the bundle for a sector at the given sfermion masses.
    pub fn new(
        params: &ParameterSet,
        constants: &DerivedConstants,
        is_bottom: bool,
        stops: [f64; 2],
        splittings: Splittings,
        mdr: bool,
        depth: ExpansionDepth,
    ) -> Self {
        let view = params.sector(is_bottom);
        let sector = constants.sector(is_bottom);
        let [mst1, mst2] = stops;
        let quark = view.quark_mass;
        let xt = view.s2 * (mst1 * mst1 - mst2 * mst2) / (2.0 * quark);
        let gluino_ref = stops[splittings.gluino.index()];
        let squark_ref = stops[splittings.squark.index()];
        let t = constants.transcendentals;
        Self {
            mt: quark,
            mu: params.mu,
            s2t: view.s2,
            at: xt + params.mu * sector.cbeta / sector.sbeta,
            tbeta: sector.tbeta,
            sbeta: sector.sbeta,
            cbeta: sector.cbeta,
            al4p: constants.al4p,
            scale: params.scale,
            mst1,
            mst2,
            mgl: params.mg,
            msq: sector.msq,
            dmglst: params.mg - gluino_ref,
            dmsqst: sector.msq * sector.msq - squark_ref * squark_ref,
            dmst12: mst1 * mst1 - mst2 * mst2,
            dmsqg: sector.msq - params.mg,
            lm_mt: sector.lm_mq,
            lm_mst1: log_ratio(params.scale, mst1),
            lm_mst2: log_ratio(params.scale, mst2),
            lm_mgl: constants.lm_mgl,
            lm_msq: sector.lm_msq,
            mdr_flag: if mdr { 1.0 } else { 0.0 },
            z2: t.z2,
            z3: t.z3,
            z4: t.z4,
            b4: t.b4,
            d3: t.d3,
            clausen_s2: t.clausen_s2,
            depth,
        }
    }

    /// Returns a copy evaluated at a different truncation depth.
    pub fn with_depth(&self, depth: ExpansionDepth) -> Self {
        Self {
            depth,
            ..self.clone()
        }
    }

    /// Value of a named bundle entry.
    pub fn value(&self, symbol: Symbol) -> f64 {
        match symbol {
            Symbol::Mt => self.mt,
            Symbol::Mu => self.mu,
            Symbol::S2t => self.s2t,
            Symbol::At => self.at,
            Symbol::Tbeta => self.tbeta,
            Symbol::Sbeta => self.sbeta,
            Symbol::Cbeta => self.cbeta,
            Symbol::Al4p => self.al4p,
            Symbol::Scale => self.scale,
            Symbol::Mst1 => self.mst1,
            Symbol::Mst2 => self.mst2,
            Symbol::Mgl => self.mgl,
            Symbol::Msq => self.msq,
            Symbol::Dmglst => self.dmglst,
            Symbol::Dmsqst => self.dmsqst,
            Symbol::Dmst12 => self.dmst12,
            Symbol::Dmsqg => self.dmsqg,
            Symbol::LmMt => self.lm_mt,
            Symbol::LmMst1 => self.lm_mst1,
            Symbol::LmMst2 => self.lm_mst2,
            Symbol::LmMgl => self.lm_mgl,
            Symbol::LmMsq => self.lm_msq,
            Symbol::MdrFlag => self.mdr_flag,
            Symbol::Z2 => self.z2,
            Symbol::Z3 => self.z3,
            Symbol::Z4 => self.z4,
            Symbol::B4 => self.b4,
            Symbol::D3 => self.d3,
            Symbol::ClausenS2 => self.clausen_s2,
        }
    }
}
