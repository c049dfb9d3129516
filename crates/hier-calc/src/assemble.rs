use hier_core::{ErrorInfo, HierError, HierarchyTag, LoopContribution, LoopFlags, LoopOrder};
use hier_table::{ExpansionDepth, ExpansionInputs};

use crate::calculator::HierarchyCalculator;
use crate::registry;
use crate::shift::ShiftOrders;

/// Sfermion masses an expansion is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MassInput {
    /// DR-bar masses, mdrFlag = 0.
    DrBar,
    /// Masses shifted with the given orders under the configured scheme.
    Shifted(ShiftOrders),
}

impl HierarchyCalculator<'_> {
    /// Expansion of `tag` at one loop order, scaled and mapped to the (phi1, phi2) basis.
    pub(crate) fn expansion(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
        order: LoopOrder,
        masses: MassInput,
        depth: &ExpansionDepth,
    ) -> Result<LoopContribution, HierError> {
        let spec = registry::lookup(tag);
        let (stops, mdr) = match masses {
            MassInput::DrBar => (self.params().sector(is_bottom).sfermion, false),
            MassInput::Shifted(orders) => (
                self.shifter().shift(is_bottom, spec.family.shift, orders),
                self.opts().scheme.is_mdr(),
            ),
        };
        let inputs = ExpansionInputs::new(
            self.params(),
            self.constants(),
            is_bottom,
            stops,
            spec.family.splittings,
            mdr,
            depth.clone(),
        );
        let terms = self.table().evaluate(tag, order, &inputs)?;
        let prefac = self.constants().sector(is_bottom).prefac;
        let matrix = LoopContribution::from_terms(terms) * prefac;
        Ok(if is_bottom { matrix.swapped() } else { matrix })
    }

    /// Order contribution as used by the assembler: MDR masses of that order.
    pub(crate) fn order_contribution(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
        order: LoopOrder,
        depth: &ExpansionDepth,
    ) -> Result<LoopContribution, HierError> {
        self.expansion(
            tag,
            is_bottom,
            order,
            MassInput::Shifted(ShiftOrders::for_order(order)),
            depth,
        )
    }

    /// Sum of the requested loop orders of the `tag` expansion at full depth.
    pub fn calculate_hierarchy(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
        flags: LoopFlags,
    ) -> Result<LoopContribution, HierError> {
        let depth = ExpansionDepth::full();
        let mut total = LoopContribution::ZERO;
        for order in flags.orders() {
            if !self.table().supports(tag, order) {
                return Err(HierError::UnsupportedHierarchy(
                    ErrorInfo::new("unsupported-order", "expansion table has no entry")
                        .with_context("tag", tag.name())
                        .with_context("order", order.loops().to_string()),
                ));
            }
            total += self.order_contribution(tag, is_bottom, order, &depth)?;
        }
        Ok(total)
    }
}
