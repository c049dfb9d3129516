use hier_core::{
    DerivedConstants, HierError, HierarchyTag, LoopContribution, LoopFlags, LoopOrder,
    ParameterSet,
};
use hier_table::{ExpansionDepth, ExpansionTable};

use crate::assemble::MassInput;
use crate::hash::seal;
use crate::one_loop::{one_loop, tree_level};
use crate::opts::CalcOpts;
use crate::oracle::{evaluate_with_retry, ExactTwoLoop, OracleInput, TwoLoopOracle};
use crate::registry;
use crate::result::{HierarchyResult, RESULT_SCHEMA};
use crate::shift::{MdrShifter, ShiftOrders};

/// Calculation session for one parameter set.
///
/// Holds the validated spectrum, its derived constants and the two external
/// collaborators. Every method is a pure function of this state.
pub struct HierarchyCalculator<'a> {
    params: ParameterSet,
    constants: DerivedConstants,
    table: &'a dyn ExpansionTable,
    oracle: &'a dyn TwoLoopOracle,
    opts: CalcOpts,
}

impl<'a> HierarchyCalculator<'a> {
    /// Validates the inputs and computes the derived constants.
    pub fn new(
        params: ParameterSet,
        table: &'a dyn ExpansionTable,
        oracle: &'a dyn TwoLoopOracle,
        opts: CalcOpts,
    ) -> Result<Self, HierError> {
        opts.validate()?;
        let params = params.checked()?;
        let constants = DerivedConstants::new(&params);
        Ok(Self {
            params,
            constants,
            table,
            oracle,
            opts,
        })
    }

    /// Validated parameter set.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Derived constants of the parameter set.
    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    /// Options in effect.
    pub fn opts(&self) -> &CalcOpts {
        &self.opts
    }

    pub(crate) fn table(&self) -> &dyn ExpansionTable {
        self.table
    }

    /// MDR shifter bound to this session.
    pub fn shifter(&self) -> MdrShifter<'_> {
        MdrShifter::new(&self.params, &self.constants, self.opts.scheme)
    }

    /// Tree-level mass matrix.
    pub fn tree_level(&self) -> LoopContribution {
        tree_level(&self.params, &self.constants)
    }

    /// Exact one-loop matrix at DR-bar masses.
    pub fn one_loop(&self, is_bottom: bool) -> LoopContribution {
        one_loop(
            &self.params,
            &self.constants,
            is_bottom,
            self.params.sector(is_bottom).sfermion,
        )
    }

    /// One-loop matrix at the two-loop MDR masses of `tag` minus the DR-bar one.
    pub fn shift_correction(&self, tag: HierarchyTag, is_bottom: bool) -> LoopContribution {
        let formula = registry::lookup(tag).family.shift;
        let shifted = self.shifter().shift(is_bottom, formula, ShiftOrders::TWO_LOOP);
        one_loop(&self.params, &self.constants, is_bottom, shifted) - self.one_loop(is_bottom)
    }

    /// Oracle two-loop matrix at the two-loop MDR masses of `tag`.
    pub fn exact_two_loop(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
    ) -> Result<ExactTwoLoop, HierError> {
        let formula = registry::lookup(tag).family.shift;
        let shifted = self.shifter().shift(is_bottom, formula, ShiftOrders::TWO_LOOP);
        let input = OracleInput::new(&self.params, &self.constants, is_bottom, shifted);
        evaluate_with_retry(
            self.oracle,
            &input,
            is_bottom,
            self.opts.dsz_perturbation,
            tag,
        )
    }

    /// Selects a hierarchy and assembles every contribution of the sector.
    pub fn calculate_dmh(&self, is_bottom: bool) -> Result<HierarchyResult, HierError> {
        let selection = self.select_hierarchy(is_bottom)?;
        let tag = selection.tag;
        let full = ExpansionDepth::full();

        let tree = self.tree_level();
        let one_loop = self.one_loop(is_bottom);
        let shift = self.shift_correction(tag, is_bottom);
        let two_loop = self.calculate_hierarchy(tag, is_bottom, LoopFlags::only(LoopOrder::Two))?;
        let three_loop =
            self.calculate_hierarchy(tag, is_bottom, LoopFlags::only(LoopOrder::Three))?;
        let exact_two_loop = self.exact_two_loop(tag, is_bottom)?.matrix;

        let mdr_two_loop = self.expansion(
            tag,
            is_bottom,
            LoopOrder::Two,
            MassInput::Shifted(ShiftOrders::TWO_LOOP),
            &full,
        )?;
        let drbar_two_loop =
            self.expansion(tag, is_bottom, LoopOrder::Two, MassInput::DrBar, &full)?;
        let three_loop_drbar_prime = three_loop + (mdr_two_loop - drbar_two_loop);

        let cumulative = [
            tree,
            tree + one_loop,
            tree + one_loop + shift + two_loop,
            tree + one_loop + shift + two_loop + three_loop,
        ];
        let mh = cumulative.map(|matrix| matrix.lightest_mass());
        let expansion_uncertainty = [
            0.0,
            0.0,
            self.expansion_uncertainty(tag, is_bottom, LoopOrder::Two, cumulative[1] + shift)?,
            self.expansion_uncertainty(tag, is_bottom, LoopOrder::Three, cumulative[2])?,
        ];

        let abs_diff_2l = selection.error;
        let rel_diff_2l = abs_diff_2l / selection.reference_mass;
        tracing::debug!(
            tag = %tag,
            is_bottom,
            mh_3l = mh[3],
            uncertainty_3l = expansion_uncertainty[3],
            "assembled hierarchy result"
        );

        seal(HierarchyResult {
            schema_version: RESULT_SCHEMA,
            tag,
            is_bottom,
            tree,
            one_loop,
            shift,
            two_loop,
            three_loop,
            three_loop_drbar_prime,
            exact_two_loop,
            mh,
            expansion_uncertainty,
            abs_diff_2l,
            rel_diff_2l,
            mdr_masses: self
                .shifter()
                .mdr_masses(is_bottom, registry::lookup(tag).family.shift),
            candidates: selection.candidates,
            result_hash: String::new(),
        })
    }
}
