//! Loop orders and the flag set selecting them.

use serde::{Deserialize, Serialize};

/// Perturbative loop order of a self-energy contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopOrder {
    /// One-loop order.
    One,
    /// Two-loop order.
    Two,
    /// Three-loop order.
    Three,
}

impl LoopOrder {
    /// All loop orders in ascending order.
    pub const ALL: [LoopOrder; 3] = [LoopOrder::One, LoopOrder::Two, LoopOrder::Three];

    /// Number of loops.
    pub const fn loops(self) -> u8 {
        match self {
            LoopOrder::One => 1,
            LoopOrder::Two => 2,
            LoopOrder::Three => 3,
        }
    }
}

/// Selection of loop orders passed to the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LoopFlags {
    /// Include the one-loop expansion.
    pub one_loop: bool,
    /// Include the two-loop expansion.
    pub two_loop: bool,
    /// Include the three-loop expansion.
    pub three_loop: bool,
}

impl LoopFlags {
    /// Builds flags from the integer switches used by callers (non-zero enables).
    pub const fn from_switches(one_loop: u8, two_loop: u8, three_loop: u8) -> Self {
        Self {
            one_loop: one_loop != 0,
            two_loop: two_loop != 0,
            three_loop: three_loop != 0,
        }
    }

    /// Flags enabling exactly one loop order.
    pub const fn only(order: LoopOrder) -> Self {
        match order {
            LoopOrder::One => Self::from_switches(1, 0, 0),
            LoopOrder::Two => Self::from_switches(0, 1, 0),
            LoopOrder::Three => Self::from_switches(0, 0, 1),
        }
    }

    /// Flags enabling every loop order.
    pub const fn all() -> Self {
        Self::from_switches(1, 1, 1)
    }

    /// Returns true when the given order is enabled.
    pub const fn contains(&self, order: LoopOrder) -> bool {
        match order {
            LoopOrder::One => self.one_loop,
            LoopOrder::Two => self.two_loop,
            LoopOrder::Three => self.three_loop,
        }
    }

    /// Enabled orders in ascending order.
    pub fn orders(&self) -> impl Iterator<Item = LoopOrder> + '_ {
        LoopOrder::ALL
            .into_iter()
            .filter(move |order| self.contains(*order))
    }
}
