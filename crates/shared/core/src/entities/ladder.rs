use serde::{Deserialize, Serialize};

use super::price_level::PriceLevel;
use crate::values::Quantity;

/// One side of the aggregated market
///
/// Levels keep the order they were added in. Sorting is the simulator's job,
/// and equal prices from different venues stay as separate levels so fills
/// can be attributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ladder {
    levels: Vec<PriceLevel>,
}

impl Ladder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: PriceLevel) {
        self.levels.push(level);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PriceLevel> {
        self.levels.iter()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Sum of quantity across every level
    pub fn total_quantity(&self) -> Quantity {
        self.levels.iter().map(PriceLevel::quantity).sum()
    }
}

impl From<Vec<PriceLevel>> for Ladder {
    fn from(levels: Vec<PriceLevel>) -> Self {
        Self { levels }
    }
}

impl FromIterator<PriceLevel> for Ladder {
    fn from_iter<I: IntoIterator<Item = PriceLevel>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}

impl Extend<PriceLevel> for Ladder {
    fn extend<I: IntoIterator<Item = PriceLevel>>(&mut self, iter: I) {
        self.levels.extend(iter);
    }
}

impl IntoIterator for Ladder {
    type Item = PriceLevel;
    type IntoIter = std::vec::IntoIter<PriceLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.into_iter()
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a PriceLevel;
    type IntoIter = std::slice::Iter<'a, PriceLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}
