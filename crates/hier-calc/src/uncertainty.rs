use hier_core::{HierError, HierarchyTag, LoopContribution, LoopOrder};
use hier_table::ExpansionDepth;

use crate::calculator::HierarchyCalculator;
use crate::registry;

impl HierarchyCalculator<'_> {
    /// Expansion uncertainty of `order` on top of the cumulative matrix `below`.
    ///
    /// Square root of the summed squared mass changes when each of the family's
    /// expansion variables is truncated in turn.
    pub fn expansion_uncertainty(
        &self,
        tag: HierarchyTag,
        is_bottom: bool,
        order: LoopOrder,
        below: LoopContribution,
    ) -> Result<f64, HierError> {
        if order == LoopOrder::One {
            return Ok(0.0);
        }
        let full_depth = ExpansionDepth::full();
        let full = below + self.order_contribution(tag, is_bottom, order, &full_depth)?;
        let mh_full = full.lightest_mass();
        let mut sum = 0.0;
        for variable in registry::lookup(tag).family.variables {
            let depth = full_depth.truncating(*variable);
            let truncated = below + self.order_contribution(tag, is_bottom, order, &depth)?;
            let diff = mh_full - truncated.lightest_mass();
            sum += diff * diff;
        }
        Ok(sum.sqrt())
    }
}
