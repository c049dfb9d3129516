mod common;

use hier_calc::{CalcOpts, HierarchyCalculator, MassScheme, ShiftFormula};
use hier_core::{
    HierError, HierarchyFamily, HierarchyTag, LoopContribution, LoopFlags, LoopOrder,
    SelfEnergyTerms,
};
use hier_table::ExpansionInputs;

use common::{assert_close, benchmark_params, full_table, synthetic_oracle};

#[test]
fn loop_orders_are_additive() {
    let table = full_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    for tag in [HierarchyTag::H3, HierarchyTag::H6b, HierarchyTag::H9q2] {
        let parts: Vec<LoopContribution> = [(1, 0, 0), (0, 1, 0), (0, 0, 1)]
            .into_iter()
            .map(|(a, b, c)| {
                calc.calculate_hierarchy(tag, false, LoopFlags::from_switches(a, b, c))
                    .unwrap()
            })
            .collect();
        let summed = parts[0] + parts[1] + parts[2];
        let combined = calc
            .calculate_hierarchy(tag, false, LoopFlags::all())
            .unwrap();
        assert_eq!(summed, combined);
    }
}

#[test]
fn no_flags_give_zero() {
    let table = full_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let zero = calc
        .calculate_hierarchy(HierarchyTag::H4, true, LoopFlags::from_switches(0, 0, 0))
        .unwrap();
    assert_eq!(zero, LoopContribution::ZERO);
}

#[test]
fn family_members_agree_at_one_loop() {
    let table = full_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    for family in HierarchyFamily::ALL {
        let mut members = family.members();
        let first = members.next().unwrap();
        let reference = calc
            .calculate_hierarchy(first, false, LoopFlags::from_switches(1, 0, 0))
            .unwrap();
        for tag in members {
            let one_loop = calc
                .calculate_hierarchy(tag, false, LoopFlags::from_switches(1, 0, 0))
                .unwrap();
            assert_close(one_loop.s11, reference.s11, 1e-13);
            assert_close(one_loop.s12, reference.s12, 1e-13);
            assert_close(one_loop.s22, reference.s22, 1e-13);
            let two_loop = calc
                .calculate_hierarchy(tag, false, LoopFlags::from_switches(0, 1, 0))
                .unwrap();
            let first_two = calc
                .calculate_hierarchy(first, false, LoopFlags::from_switches(0, 1, 0))
                .unwrap();
            assert_ne!(two_loop, first_two);
        }
    }
}

fn constant_table(
    _tag: HierarchyTag,
    _order: LoopOrder,
    _inputs: &ExpansionInputs,
) -> Result<SelfEnergyTerms, HierError> {
    Ok(SelfEnergyTerms::new(-3.0e8, 6.0e9, -1.5e8))
}

#[test]
fn bottom_sector_swaps_the_diagonal() {
    let calc = HierarchyCalculator::new(
        benchmark_params(),
        &constant_table,
        &synthetic_oracle,
        CalcOpts::default(),
    )
    .unwrap();
    let top = calc
        .calculate_hierarchy(HierarchyTag::H3, false, LoopFlags::from_switches(1, 0, 0))
        .unwrap();
    let bottom = calc
        .calculate_hierarchy(HierarchyTag::H3, true, LoopFlags::from_switches(1, 0, 0))
        .unwrap();
    // entries are constants, so only the prefactor and basis differ
    let ratio = calc.constants().bottom.prefac / calc.constants().top.prefac;
    assert_close(bottom.s11, top.s22 * ratio, 1e-13);
    assert_close(bottom.s22, top.s11 * ratio, 1e-13);
    assert_close(bottom.s12, top.s12 * ratio, 1e-13);
}

#[test]
fn full_result_is_consistent() {
    let table = full_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let result = calc.calculate_dmh(false).unwrap();
    let selection = calc.select_hierarchy(false).unwrap();
    assert_eq!(result.tag, selection.tag);
    assert_eq!(result.candidates, selection.candidates);
    assert_eq!(result.abs_diff_2l, selection.error);
    assert_close(result.rel_diff_2l, selection.error / selection.reference_mass, 1e-15);

    assert_eq!(result.mh[0], result.tree.lightest_mass());
    assert_eq!(result.mh[1], (result.tree + result.one_loop).lightest_mass());
    assert_eq!(result.mh[3], result.total().lightest_mass());
    assert!(result.mh.iter().all(|mass| mass.is_finite() && *mass > 0.0));

    assert_eq!(result.expansion_uncertainty[0], 0.0);
    assert_eq!(result.expansion_uncertainty[1], 0.0);
    assert!(result.expansion_uncertainty[2] > 0.0);
    assert!(result.expansion_uncertainty[3] >= 0.0);

    let formula = hier_calc::lookup(result.tag).family.shift;
    assert_eq!(result.mdr_masses, calc.shifter().mdr_masses(false, formula));
    let exact = calc.exact_two_loop(result.tag, false).unwrap();
    assert_eq!(result.exact_two_loop, exact.matrix);
    assert_eq!(result.shift, calc.shift_correction(result.tag, false));
    if formula == ShiftFormula::Common {
        assert_eq!(result.shift, LoopContribution::ZERO);
    }
}

#[test]
fn drbar_scheme_leaves_masses_and_three_loop_untouched() {
    let table = full_table();
    let opts = CalcOpts {
        scheme: MassScheme::DrBar,
        ..CalcOpts::default()
    };
    let calc = HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, opts)
        .unwrap();
    let result = calc.calculate_dmh(false).unwrap();
    assert_eq!(result.shift, LoopContribution::ZERO);
    assert_eq!(result.three_loop_drbar_prime, result.three_loop);
    let params = calc.params();
    assert_eq!(result.mdr_masses.two_loop, params.mst);
    assert_eq!(result.mdr_masses.three_loop, params.mst);
}

#[test]
fn bottom_sector_evaluates() {
    let table = full_table();
    let calc =
        HierarchyCalculator::new(benchmark_params(), &table, &synthetic_oracle, CalcOpts::default())
            .unwrap();
    let result = calc.calculate_dmh(true).unwrap();
    assert!(result.is_bottom);
    assert!(result.mh.iter().all(|mass| mass.is_finite()));
    let ordering = hier_calc::MassOrdering::new(calc.params(), calc.constants(), true);
    assert!(hier_calc::is_suitable(result.tag, &ordering, calc.opts().h9q2_rule));
}
