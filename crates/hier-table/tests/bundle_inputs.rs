mod common;

use hier_core::{log_ratio, DerivedConstants};
use hier_table::{ExpansionDepth, ExpansionInputs, Splittings, StopIndex, Symbol};

use common::{sample_inputs, sample_params};

#[test]
fn splittings_follow_reference_stops() {
    let params = sample_params();
    let constants = DerivedConstants::new(&params);
    let light = sample_inputs(ExpansionDepth::full());
    let heavy = ExpansionInputs::new(
        &params,
        &constants,
        false,
        params.mst,
        Splittings::new(StopIndex::Light, StopIndex::Heavy),
        true,
        ExpansionDepth::full(),
    );
    assert_eq!(light.dmglst, 600.0);
    assert_eq!(light.dmglst, heavy.dmglst);
    let msq = constants.top.msq;
    assert_eq!(light.dmsqst, msq * msq - 1200.0 * 1200.0);
    assert_eq!(heavy.dmsqst, msq * msq - 1600.0 * 1600.0);
    assert_eq!(light.dmst12, 1200.0 * 1200.0 - 1600.0 * 1600.0);
    assert_eq!(light.dmsqg, msq - 1800.0);
}

#[test]
fn bottom_sector_uses_sbottoms_and_swapped_beta() {
    let params = sample_params();
    let constants = DerivedConstants::new(&params);
    let bundle = ExpansionInputs::new(
        &params,
        &constants,
        true,
        params.msb,
        Splittings::new(StopIndex::Heavy, StopIndex::Heavy),
        false,
        ExpansionDepth::leading(),
    );
    assert_eq!(bundle.mt, params.mb);
    assert_eq!(bundle.s2t, params.s2b);
    assert_eq!(bundle.sbeta, constants.cbeta);
    assert_eq!(bundle.mdr_flag, 0.0);
    assert_eq!(bundle.dmglst, params.mg - params.msb[1]);
}

#[test]
fn trilinear_is_rebuilt_from_bundle_masses() {
    let bundle = sample_inputs(ExpansionDepth::full());
    let xt = bundle.s2t * (bundle.mst1.powi(2) - bundle.mst2.powi(2)) / (2.0 * bundle.mt);
    let expected = xt + bundle.mu * bundle.cbeta / bundle.sbeta;
    assert!((bundle.at - expected).abs() <= 1e-12 * expected.abs());
    assert_eq!(bundle.value(Symbol::At), bundle.at);
    assert_eq!(bundle.value(Symbol::MdrFlag), 1.0);
    assert_eq!(bundle.value(Symbol::LmMgl), log_ratio(1500.0, 1800.0));
}
