#![allow(dead_code)]

use hier_core::{DerivedConstants, ParameterSet};
use hier_table::{ExpansionDepth, ExpansionInputs, Splittings, StopIndex};

pub fn diag(a: f64, b: f64, c: f64) -> [[f64; 3]; 3] {
    [[a, 0.0, 0.0], [0.0, b, 0.0], [0.0, 0.0, c]]
}

pub fn sample_params() -> ParameterSet {
    ParameterSet {
        scale: 1500.0,
        mu: 800.0,
        g3: 1.05,
        vd: 40.0,
        vu: 240.0,
        mq2: diag(2.25e6, 2.25e6, 2.0e6),
        md2: diag(2.25e6, 2.25e6, 2.2e6),
        mu2: diag(2.25e6, 2.25e6, 1.5e6),
        mg: 1800.0,
        mw: 80.0,
        mz: 91.0,
        mt: 150.0,
        mb: 2.4,
        ma: 1000.0,
        mst: [1200.0, 1600.0],
        msb: [1450.0, 1480.0],
        s2t: -0.8,
        s2b: -0.3,
    }
}

pub fn sample_inputs(depth: ExpansionDepth) -> ExpansionInputs {
    let params = sample_params();
    let constants = DerivedConstants::new(&params);
    ExpansionInputs::new(
        &params,
        &constants,
        false,
        params.mst,
        Splittings::new(StopIndex::Light, StopIndex::Light),
        true,
        depth,
    )
}
