//! Input spectrum of a single mass-point evaluation.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HierError};

fn spectrum_error(field: &str, message: impl Into<String>, value: f64) -> HierError {
    HierError::InvalidSpectrum(
        ErrorInfo::new("invalid-parameter", message)
            .with_context("field", field)
            .with_context("value", value.to_string()),
    )
}

/// Immutable snapshot of the low-energy SUSY input (DR-bar, GeV units).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    /// Renormalization scale Q.
    pub scale: f64,
    /// Higgsino mass parameter.
    pub mu: f64,
    /// Strong gauge coupling.
    pub g3: f64,
    /// Down-type VEV.
    pub vd: f64,
    /// Up-type VEV.
    pub vu: f64,
    /// Soft left-handed squark mass-squared matrix.
    pub mq2: [[f64; 3]; 3],
    /// Soft right-handed down squark mass-squared matrix.
    pub md2: [[f64; 3]; 3],
    /// Soft right-handed up squark mass-squared matrix.
    pub mu2: [[f64; 3]; 3],
    /// Gluino mass.
    pub mg: f64,
    /// W boson mass.
    pub mw: f64,
    /// Z boson mass.
    pub mz: f64,
    /// Running top mass.
    pub mt: f64,
    /// Running bottom mass.
    pub mb: f64,
    /// CP-odd Higgs mass.
    pub ma: f64,
    /// Stop masses (light, heavy).
    pub mst: [f64; 2],
    /// Sbottom masses (light, heavy).
    pub msb: [f64; 2],
    /// Sine of twice the stop mixing angle.
    pub s2t: f64,
    /// Sine of twice the sbottom mixing angle.
    pub s2b: f64,
}

/// View of the parameters relevant for one quark sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorView {
    /// True for the bottom/sbottom sector.
    pub is_bottom: bool,
    /// Running quark mass.
    pub quark_mass: f64,
    /// DR-bar sfermion masses (light, heavy).
    pub sfermion: [f64; 2],
    /// Sine of twice the sfermion mixing angle.
    pub s2: f64,
}

impl ParameterSet {
    /// Checks that the spectrum is physical.
    pub fn validate(&self) -> Result<(), HierError> {
        let positive = [
            ("scale", self.scale),
            ("g3", self.g3),
            ("vd", self.vd),
            ("vu", self.vu),
            ("mg", self.mg),
            ("mw", self.mw),
            ("mz", self.mz),
            ("mt", self.mt),
            ("mb", self.mb),
            ("ma", self.ma),
            ("mst1", self.mst[0]),
            ("mst2", self.mst[1]),
            ("msb1", self.msb[0]),
            ("msb2", self.msb[1]),
        ];
        for (field, value) in positive {
            if !value.is_finite() {
                return Err(spectrum_error(field, "parameter is not finite", value));
            }
            if value <= 0.0 {
                return Err(spectrum_error(field, "mass parameter must be positive", value));
            }
        }
        if !self.mu.is_finite() {
            return Err(spectrum_error("mu", "parameter is not finite", self.mu));
        }
        for (field, value) in [("s2t", self.s2t), ("s2b", self.s2b)] {
            if !value.is_finite() || value.abs() > 1.0 {
                return Err(spectrum_error(
                    field,
                    "mixing sine must lie in [-1, 1]",
                    value,
                ));
            }
        }
        for (name, matrix) in [("mq2", &self.mq2), ("md2", &self.md2), ("mu2", &self.mu2)] {
            for (row_idx, row) in matrix.iter().enumerate() {
                for (col_idx, value) in row.iter().enumerate() {
                    let field = format!("{name}[{row_idx}][{col_idx}]");
                    if !value.is_finite() {
                        return Err(spectrum_error(&field, "parameter is not finite", *value));
                    }
                    if row_idx == col_idx && *value <= 0.0 {
                        return Err(spectrum_error(
                            &field,
                            "squark soft mass squared must be positive",
                            *value,
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Validates the spectrum and orders the sfermion masses ascending.
    ///
    /// Swapping a sfermion pair flips the sign of the matching mixing sine.
    pub fn checked(mut self) -> Result<Self, HierError> {
        self.validate()?;
        if self.mst[0] > self.mst[1] {
            self.mst.swap(0, 1);
            self.s2t = -self.s2t;
        }
        if self.msb[0] > self.msb[1] {
            self.msb.swap(0, 1);
            self.s2b = -self.s2b;
        }
        Ok(self)
    }

    /// Returns the top (`false`) or bottom (`true`) sector view.
    pub fn sector(&self, is_bottom: bool) -> SectorView {
        if is_bottom {
            SectorView {
                is_bottom,
                quark_mass: self.mb,
                sfermion: self.msb,
                s2: self.s2b,
            }
        } else {
            SectorView {
                is_bottom,
                quark_mass: self.mt,
                sfermion: self.mst,
                s2: self.s2t,
            }
        }
    }
}
