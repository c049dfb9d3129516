//! Hierarchy identifiers and their grouping into families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HierError};

/// Identifier of a mass-ordering dependent expansion of the Higgs self-energy.
///
/// Variants are listed in canonical enumeration order; the selector scans
/// them in this order and the first tag wins exact error ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyTag {
    /// Degenerate stops and gluino, gluino heavier than the heavy stop.
    H3,
    /// h3 regime with the heavy stop above both squarks and gluino.
    H32q2g,
    /// h3 regime with squarks above the heavy stop above the gluino.
    H3q22g,
    /// Degenerate stops and squarks with a light gluino.
    H4,
    /// Light stop above the gluino, heavy stop near the squarks.
    H5,
    /// h5 regime with the gluino above the light stop.
    H5g1,
    /// Light stop, heavy stop and squarks with the gluino below the heavy stop.
    H6,
    /// h6 regime with the gluino above the heavy stop.
    H6g2,
    /// Heavy stop above squarks and gluino.
    H6b,
    /// Heavy stop above squarks, gluino above the heavy stop.
    H6b2qg2,
    /// Squarks above the heavy stop above the gluino.
    H6bq22g,
    /// Squarks and gluino above the heavy stop.
    H6bq2g2,
    /// Light degenerate stops below degenerate squarks and gluino.
    H9,
    /// h9 regime with the gluino above the squarks.
    H9q2,
}

/// Family grouping of hierarchy tags.
///
/// The family fixes the scheme-shift formula, the reference stops of the
/// mass splittings and the expansion variables of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HierarchyFamily {
    /// h3, h32q2g, h3q22g.
    H3,
    /// h4.
    H4,
    /// h5, h5g1.
    H5,
    /// h6, h6g2.
    H6,
    /// h6b, h6b2qg2, h6bq22g, h6bq2g2.
    H6b,
    /// h9, h9q2.
    H9,
}

impl HierarchyTag {
    /// All tags in canonical enumeration order.
    pub const ALL: [HierarchyTag; 14] = [
        HierarchyTag::H3,
        HierarchyTag::H32q2g,
        HierarchyTag::H3q22g,
        HierarchyTag::H4,
        HierarchyTag::H5,
        HierarchyTag::H5g1,
        HierarchyTag::H6,
        HierarchyTag::H6g2,
        HierarchyTag::H6b,
        HierarchyTag::H6b2qg2,
        HierarchyTag::H6bq22g,
        HierarchyTag::H6bq2g2,
        HierarchyTag::H9,
        HierarchyTag::H9q2,
    ];

    /// Returns the family the tag belongs to.
    pub const fn family(self) -> HierarchyFamily {
        match self {
            HierarchyTag::H3 | HierarchyTag::H32q2g | HierarchyTag::H3q22g => HierarchyFamily::H3,
            HierarchyTag::H4 => HierarchyFamily::H4,
            HierarchyTag::H5 | HierarchyTag::H5g1 => HierarchyFamily::H5,
            HierarchyTag::H6 | HierarchyTag::H6g2 => HierarchyFamily::H6,
            HierarchyTag::H6b
            | HierarchyTag::H6b2qg2
            | HierarchyTag::H6bq22g
            | HierarchyTag::H6bq2g2 => HierarchyFamily::H6b,
            HierarchyTag::H9 | HierarchyTag::H9q2 => HierarchyFamily::H9,
        }
    }

    /// Position of the tag in the canonical enumeration.
    pub fn id(self) -> usize {
        Self::ALL
            .iter()
            .position(|tag| *tag == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Resolves a numeric identifier.
    pub fn from_id(id: i64) -> Result<Self, HierError> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or_else(|| {
                HierError::UnsupportedHierarchy(
                    ErrorInfo::new("unknown-hierarchy-id", "no hierarchy with this id")
                        .with_context("id", id.to_string()),
                )
            })
    }

    /// Lower-case name used in tables and reports.
    pub const fn name(self) -> &'static str {
        match self {
            HierarchyTag::H3 => "h3",
            HierarchyTag::H32q2g => "h32q2g",
            HierarchyTag::H3q22g => "h3q22g",
            HierarchyTag::H4 => "h4",
            HierarchyTag::H5 => "h5",
            HierarchyTag::H5g1 => "h5g1",
            HierarchyTag::H6 => "h6",
            HierarchyTag::H6g2 => "h6g2",
            HierarchyTag::H6b => "h6b",
            HierarchyTag::H6b2qg2 => "h6b2qg2",
            HierarchyTag::H6bq22g => "h6bq22g",
            HierarchyTag::H6bq2g2 => "h6bq2g2",
            HierarchyTag::H9 => "h9",
            HierarchyTag::H9q2 => "h9q2",
        }
    }
}

impl HierarchyFamily {
    /// All families in canonical order.
    pub const ALL: [HierarchyFamily; 6] = [
        HierarchyFamily::H3,
        HierarchyFamily::H4,
        HierarchyFamily::H5,
        HierarchyFamily::H6,
        HierarchyFamily::H6b,
        HierarchyFamily::H9,
    ];

    /// Tags belonging to the family, in canonical order.
    pub fn members(self) -> impl Iterator<Item = HierarchyTag> {
        HierarchyTag::ALL
            .into_iter()
            .filter(move |tag| tag.family() == self)
    }
}

impl fmt::Display for HierarchyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for HierarchyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HierarchyFamily::H3 => "h3",
            HierarchyFamily::H4 => "h4",
            HierarchyFamily::H5 => "h5",
            HierarchyFamily::H6 => "h6",
            HierarchyFamily::H6b => "h6b",
            HierarchyFamily::H9 => "h9",
        };
        f.write_str(name)
    }
}

impl FromStr for HierarchyTag {
    type Err = HierError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.name() == needle)
            .ok_or_else(|| {
                HierError::UnsupportedHierarchy(
                    ErrorInfo::new("unknown-hierarchy-name", "no hierarchy with this name")
                        .with_context("name", value),
                )
            })
    }
}
