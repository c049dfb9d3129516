#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use hier_core::serde_io::from_json_slice;
use hier_core::{HierarchyFamily, HierarchyTag, LoopOrder, ParameterSet, SelfEnergyTerms};
use hier_calc::OracleInput;
use hier_table::{load_table, ExpansionEntry, Polynomial, PolynomialTable};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> Vec<u8> {
    fs::read(fixture_path(name)).expect("fixture present")
}

pub fn benchmark_params() -> ParameterSet {
    from_json_slice(&read_fixture("benchmark_point.json")).expect("benchmark spectrum")
}

pub fn h3_table() -> PolynomialTable {
    load_table(fixture_path("h3_table.json")).expect("h3 table")
}

pub fn golden() -> serde_json::Value {
    serde_json::from_slice(&read_fixture("h3_golden.json")).expect("golden values")
}

fn scaled(poly: &Polynomial, factor: f64) -> Polynomial {
    let mut poly = poly.clone();
    for term in &mut poly.terms {
        term.coefficient *= factor;
    }
    poly
}

/// Table covering every hierarchy: family-dependent rescalings of the recorded
/// h3 one-loop entry and tag-dependent rescalings of the two- and three-loop entries.
pub fn full_table() -> PolynomialTable {
    let base = h3_table();
    let mut table = PolynomialTable::new();
    for tag in HierarchyTag::ALL {
        let family = HierarchyFamily::ALL
            .iter()
            .position(|family| *family == tag.family())
            .expect("family listed");
        for order in LoopOrder::ALL {
            let source = base.entry(HierarchyTag::H3, order).expect("h3 entry");
            let factor = match order {
                LoopOrder::One => 1.0 + 0.05 * family as f64,
                LoopOrder::Two | LoopOrder::Three => 1.0 + 0.02 * tag.id() as f64,
            };
            table
                .insert(ExpansionEntry {
                    tag,
                    order,
                    s1: scaled(&source.s1, factor),
                    s2: scaled(&source.s2, factor),
                    s12: scaled(&source.s12, factor),
                })
                .expect("unique entries");
        }
    }
    table
}

/// Smooth stand-in for the exact two-loop routine.
pub fn synthetic_oracle(input: &OracleInput) -> SelfEnergyTerms {
    let ratio = 1745.3 / input.stop1;
    let mixing = input.sin_mix * input.cos_mix;
    SelfEnergyTerms::new(
        -1250.0 * ratio * (2.0 * mixing).powi(2),
        3100.0 * ratio,
        -3700.0 * ratio * 2.0 * mixing,
    )
}

pub fn assert_close(actual: f64, expected: f64, relative: f64) {
    let scale = expected.abs().max(f64::MIN_POSITIVE);
    assert!(
        (actual - expected).abs() <= relative * scale,
        "actual {actual} expected {expected} (relative tolerance {relative})"
    );
}
