mod common;

use hier_calc::{CalcOpts, HierarchyCalculator, ShiftFormula, ShiftOrders};
use hier_core::{HierError, HierarchyTag, LoopContribution, LoopFlags};

use common::{assert_close, benchmark_params, golden, h3_table, synthetic_oracle};

fn golden_matrix(key: &str) -> LoopContribution {
    let value = &golden()[key];
    let entry = |name: &str| value[name].as_f64().expect("golden entry");
    LoopContribution::new(entry("s11"), entry("s12"), entry("s22"))
}

fn assert_matrix(actual: LoopContribution, expected: LoopContribution, relative: f64) {
    let deviation = actual.max_relative_difference(&expected);
    assert!(
        deviation <= relative,
        "actual {actual:?} expected {expected:?} (deviation {deviation:e})"
    );
}

#[test]
fn h3_one_loop_matches_reference_values() {
    let table = h3_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let one_loop = calc
        .calculate_hierarchy(HierarchyTag::H3, false, LoopFlags::from_switches(1, 0, 0))
        .unwrap();
    let expected = LoopContribution::new(
        -1033.437882123761,
        -394.3521101999062,
        17633.47392819223,
    );
    assert_matrix(one_loop, expected, 1e-12);
    assert_matrix(one_loop, golden_matrix("one_loop"), 1e-12);
}

#[test]
fn h3_one_loop_follows_the_stop_masses() {
    let table = h3_table();
    let golden = golden();
    let moved = &golden["moved_stops"];
    let mut params = benchmark_params();
    params.mst = [moved[0].as_f64().unwrap(), moved[1].as_f64().unwrap()];
    let calc = HierarchyCalculator::new(params, &table, &synthetic_oracle, CalcOpts::default())
        .unwrap();
    let one_loop = calc
        .calculate_hierarchy(HierarchyTag::H3, false, LoopFlags::from_switches(1, 0, 0))
        .unwrap();
    assert_matrix(one_loop, golden_matrix("one_loop_moved_stops"), 1e-12);
    assert!(one_loop.max_relative_difference(&golden_matrix("one_loop")) > 0.5);
}

#[test]
fn h3_higher_orders_match_golden_values() {
    let table = h3_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let two_loop = calc
        .calculate_hierarchy(HierarchyTag::H3, false, LoopFlags::from_switches(0, 1, 0))
        .unwrap();
    assert_matrix(two_loop, golden_matrix("two_loop"), 1e-5);
    let three_loop = calc
        .calculate_hierarchy(HierarchyTag::H3, false, LoopFlags::from_switches(0, 0, 1))
        .unwrap();
    assert_matrix(three_loop, golden_matrix("three_loop"), 2e-6);
}

#[test]
fn three_loop_shift_matches_golden_masses() {
    let table = h3_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let shifted = calc
        .shifter()
        .shift(false, ShiftFormula::Common, ShiftOrders::THREE_LOOP);
    let expected = &golden()["mdr_three_loop"];
    assert_close(shifted[0], expected[0].as_f64().unwrap(), 1e-12);
    assert_close(shifted[1], expected[1].as_f64().unwrap(), 1e-12);
}

#[test]
fn prefactor_matches_recorded_value() {
    let table = h3_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let recorded = golden()["prefac"].as_f64().unwrap();
    assert_close(calc.constants().top.prefac, recorded, 1e-14);
}

#[test]
fn missing_hierarchy_is_unsupported() {
    let table = h3_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let err = calc
        .calculate_hierarchy(HierarchyTag::H9, false, LoopFlags::all())
        .unwrap_err();
    assert!(matches!(err, HierError::UnsupportedHierarchy(_)));
}
