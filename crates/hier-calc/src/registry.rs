use serde::{Deserialize, Serialize};

use hier_core::{HierarchyFamily, HierarchyTag};
use hier_table::{ExpansionVariable, Splittings, StopIndex};

use crate::opts::H9q2Rule;
use crate::suitability::MassOrdering;

/// Shape of the MDR shift applied to a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftFormula {
    /// Three-loop squark terms only.
    Common,
    /// Common terms plus the gluino log enhancement and gluino-stop splitting term.
    GluinoEnhanced,
}

/// Data shared by every hierarchy of a family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilySpec {
    /// The family.
    pub family: HierarchyFamily,
    /// Shift formula of the family.
    pub shift: ShiftFormula,
    /// Reference stops of the mass splittings.
    pub splittings: Splittings,
    /// Small parameters of the family's expansions.
    pub variables: &'static [ExpansionVariable],
}

type Predicate = fn(&MassOrdering, H9q2Rule) -> bool;

/// Registry entry of a hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct HierarchySpec {
    /// The hierarchy.
    pub tag: HierarchyTag,
    /// Family level data.
    pub family: FamilySpec,
    predicate: Predicate,
}

impl HierarchySpec {
    /// Returns true when the mass ordering lies in this hierarchy's regime.
    pub fn is_suitable(&self, ordering: &MassOrdering, rule: H9q2Rule) -> bool {
        (self.predicate)(ordering, rule)
    }
}

const H3_VARS: &[ExpansionVariable] = &[
    ExpansionVariable::Dmglst,
    ExpansionVariable::Dmsqst,
    ExpansionVariable::Dmst12,
];
const H4_VARS: &[ExpansionVariable] = &[
    ExpansionVariable::At,
    ExpansionVariable::Dmsqst,
    ExpansionVariable::Mst,
];
const H5_VARS: &[ExpansionVariable] = &[
    ExpansionVariable::Dmglst,
    ExpansionVariable::Dmsqst,
    ExpansionVariable::Mst,
];
const H6_VARS: &[ExpansionVariable] = &[
    ExpansionVariable::Mgl,
    ExpansionVariable::Dmsqst,
    ExpansionVariable::Mst,
];
const H9_VARS: &[ExpansionVariable] = &[
    ExpansionVariable::Dmst12,
    ExpansionVariable::Dmsqg,
    ExpansionVariable::Mst,
];

/// Family level registry data.
pub const fn family_spec(family: HierarchyFamily) -> FamilySpec {
    use StopIndex::{Heavy, Light};
    let (shift, splittings, variables) = match family {
        HierarchyFamily::H3 => (ShiftFormula::Common, Splittings::new(Light, Light), H3_VARS),
        HierarchyFamily::H4 => (ShiftFormula::Common, Splittings::new(Light, Light), H4_VARS),
        HierarchyFamily::H5 => (ShiftFormula::Common, Splittings::new(Light, Heavy), H5_VARS),
        HierarchyFamily::H6 => (
            ShiftFormula::GluinoEnhanced,
            Splittings::new(Heavy, Heavy),
            H6_VARS,
        ),
        HierarchyFamily::H6b => (
            ShiftFormula::GluinoEnhanced,
            Splittings::new(Heavy, Heavy),
            H5_VARS,
        ),
        HierarchyFamily::H9 => (ShiftFormula::Common, Splittings::new(Light, Light), H9_VARS),
    };
    FamilySpec {
        family,
        shift,
        splittings,
        variables,
    }
}

#[allow(clippy::eq_op)]
fn h9q2(m: &MassOrdering, rule: H9q2Rule) -> bool {
    let stop_gap = match rule {
        H9q2Rule::AsTranscribed => m.mst1 - m.mst1,
        H9q2Rule::StopSplitting => m.mst2 - m.mst1,
    };
    m.mgl > m.msq && m.msq > m.mst2 && stop_gap < m.msq - m.mst2
}

fn predicate(tag: HierarchyTag) -> Predicate {
    match tag {
        HierarchyTag::H3 => |m, _| m.mgl > m.mst2,
        HierarchyTag::H32q2g => |m, _| m.mst2 >= m.msq && m.mst2 > m.mgl,
        HierarchyTag::H3q22g => |m, _| m.msq > m.mst2 && m.mst2 > m.mgl,
        HierarchyTag::H4 => |m, _| m.mst1 > m.mgl && m.msq > m.mgl,
        HierarchyTag::H5 => |m, _| m.mst1 > m.mgl,
        HierarchyTag::H5g1 => |m, _| m.mgl >= m.mst1,
        HierarchyTag::H6 => |m, _| m.mst2 > m.mgl,
        HierarchyTag::H6g2 => |m, _| m.mgl >= m.mst2,
        HierarchyTag::H6b => |m, _| m.mst2 >= m.msq && m.mst2 > m.mgl,
        HierarchyTag::H6b2qg2 => |m, _| m.mst2 >= m.msq && m.mgl >= m.mst2,
        HierarchyTag::H6bq22g => |m, _| m.msq > m.mst2 && m.mst2 > m.mgl,
        HierarchyTag::H6bq2g2 => |m, _| m.msq > m.mst2 && m.mgl >= m.mst2,
        HierarchyTag::H9 => |m, _| {
            m.msq >= m.mgl && m.mgl > m.mst2 && m.mst2 - m.mst1 < m.mgl - m.mst2
        },
        HierarchyTag::H9q2 => h9q2,
    }
}

/// Registry entry for `tag`.
pub fn lookup(tag: HierarchyTag) -> HierarchySpec {
    HierarchySpec {
        tag,
        family: family_spec(tag.family()),
        predicate: predicate(tag),
    }
}
