use serde::{Deserialize, Serialize};

use hier_core::{DerivedConstants, HierarchyTag, ParameterSet};

use crate::opts::H9q2Rule;
use crate::registry;

/// Masses whose ordering decides which hierarchies apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassOrdering {
    /// Light sfermion of the sector.
    pub mst1: f64,
    /// Heavy sfermion of the sector.
    pub mst2: f64,
    /// Gluino.
    pub mgl: f64,
    /// Average squark mass of the sector.
    pub msq: f64,
}

impl MassOrdering {
    /// Ordering of the DR-bar masses of a sector.
    pub fn new(params: &ParameterSet, constants: &DerivedConstants, is_bottom: bool) -> Self {
        let [mst1, mst2] = params.sector(is_bottom).sfermion;
        Self {
            mst1,
            mst2,
            mgl: params.mg,
            msq: constants.sector(is_bottom).msq,
        }
    }
}

/// Returns true when `tag` applies to the ordering.
pub fn is_suitable(tag: HierarchyTag, ordering: &MassOrdering, rule: H9q2Rule) -> bool {
    registry::lookup(tag).is_suitable(ordering, rule)
}

/// Suitable tags in canonical order.
pub fn suitable_tags(ordering: &MassOrdering, rule: H9q2Rule) -> Vec<HierarchyTag> {
    HierarchyTag::ALL
        .into_iter()
        .filter(|tag| is_suitable(*tag, ordering, rule))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ordering(mst1: f64, mst2: f64, mgl: f64, msq: f64) -> MassOrdering {
        MassOrdering {
            mst1,
            mst2,
            mgl,
            msq,
        }
    }

    #[test]
    fn heavy_gluino_selects_h3_and_h9() {
        let tags = suitable_tags(&ordering(1000.0, 1100.0, 2000.0, 2500.0), H9q2Rule::default());
        assert!(tags.contains(&HierarchyTag::H3));
        assert!(tags.contains(&HierarchyTag::H9));
        assert!(!tags.contains(&HierarchyTag::H5));
    }

    #[test]
    fn h9q2_rules_differ_for_wide_stop_splitting() {
        let wide = ordering(500.0, 1900.0, 3000.0, 2000.0);
        assert!(is_suitable(HierarchyTag::H9q2, &wide, H9q2Rule::AsTranscribed));
        assert!(!is_suitable(HierarchyTag::H9q2, &wide, H9q2Rule::StopSplitting));
    }
}
