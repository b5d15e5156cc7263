//! The index tables that lay every feature family out in one flat vector.
//!
//! Offsets within the radius get a slot in an [OffsetIndex], and the
//! [PrefixTable] stacks the offset families, the two boundary distance
//! families and the trapped slot one after another:
//! ```plain
//! | candy1 | candy2 | adv-head | adv-tail | my-tail | x | y | trapped |
//!   tiles    tiles    tiles      tiles      tiles    h+1 h+1     1
//! ```
use std::fmt;

use fxhash::FxHashMap;
use itertools::Itertools;
use serde::Serialize;

use crate::types::Vector;

/// A group of features sharing a column range and a resolution rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    /// standard candies, by offset
    Candy1,
    /// bonus candies, by offset
    Candy2,
    /// opposing heads, by offset
    AdvHead,
    /// opposing body segments, by offset
    AdvTail,
    /// the acting snake's own body segments, by offset
    MyTail,
    /// distance to the nearest vertical wall
    X,
    /// distance to the nearest horizontal wall
    Y,
    /// the single slot for having no legal action
    Trapped,
}

impl Family {
    /// every family in column order
    pub const ALL: [Family; 8] = [
        Family::Candy1,
        Family::Candy2,
        Family::AdvHead,
        Family::AdvTail,
        Family::MyTail,
        Family::X,
        Family::Y,
        Family::Trapped,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Candy1 => "candy1",
            Family::Candy2 => "candy2",
            Family::AdvHead => "adv-head",
            Family::AdvTail => "adv-tail",
            Family::MyTail => "my-tail",
            Family::X => "x",
            Family::Y => "y",
            Family::Trapped => "trapped",
        };
        write!(f, "{}", name)
    }
}

/// Assigns every integer offset strictly inside a circle of `radius` a unique
/// slot, numbered in sweep order (x major, y minor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetIndex {
    radius: u32,
    slots: FxHashMap<Vector, usize>,
}

impl OffsetIndex {
    /// builds the table for a radius
    pub fn build(radius: u32) -> Self {
        let r = radius as i64;
        let mut slots = FxHashMap::default();
        for (x, y) in (1 - r..r).cartesian_product(1 - r..r) {
            let offset = Vector { x, y };
            if offset.length() < radius as f64 {
                let slot = slots.len();
                slots.insert(offset, slot);
            }
        }
        OffsetIndex { radius, slots }
    }

    /// the radius this table was built for
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// the number of slots in the table
    pub fn tiles(&self) -> usize {
        self.slots.len()
    }

    /// the slot for an offset, if it is within the radius
    pub fn get(&self, offset: &Vector) -> Option<usize> {
        self.slots.get(offset).copied()
    }

    /// checks if an offset is within the radius
    pub fn contains(&self, offset: &Vector) -> bool {
        self.slots.contains_key(offset)
    }
}

/// Start column of every family in the flat feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixTable {
    tiles: usize,
    half_extent: usize,
}

impl PrefixTable {
    /// lays out families for `tiles` offset slots on a grid of `grid_size`
    pub fn new(tiles: usize, grid_size: u32) -> Self {
        PrefixTable {
            tiles,
            half_extent: grid_size.saturating_sub(1) as usize / 2,
        }
    }

    /// the largest boundary distance, `(grid_size - 1) / 2`
    pub fn half_extent(&self) -> usize {
        self.half_extent
    }

    /// how many columns a family occupies
    pub fn span(&self, family: Family) -> usize {
        match family {
            Family::Candy1
            | Family::Candy2
            | Family::AdvHead
            | Family::AdvTail
            | Family::MyTail => self.tiles,
            // distances run from 0 to half_extent inclusive
            Family::X | Family::Y => self.half_extent + 1,
            Family::Trapped => 1,
        }
    }

    /// the first column of a family
    pub fn start(&self, family: Family) -> usize {
        Family::ALL
            .iter()
            .take_while(|f| **f != family)
            .map(|f| self.span(*f))
            .sum()
    }

    /// the total width of the feature vector, one past the trapped column
    pub fn total(&self) -> usize {
        Family::ALL.iter().map(|f| self.span(*f)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offset_index_is_a_bijection() {
        for radius in 1..=12 {
            let index = OffsetIndex::build(radius);
            let slots = index.slots.values().copied().collect::<HashSet<_>>();
            assert_eq!(slots.len(), index.tiles());
            assert_eq!(slots, (0..index.tiles()).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn test_offset_index_sizes() {
        assert_eq!(OffsetIndex::build(1).tiles(), 1);
        assert_eq!(OffsetIndex::build(2).tiles(), 9);
        assert_eq!(OffsetIndex::build(3).tiles(), 25);
        assert_eq!(OffsetIndex::build(16).tiles(), 793);
        for radius in 1..=16usize {
            let diamond = radius * radius + (radius - 1) * (radius - 1);
            assert!(OffsetIndex::build(radius as u32).tiles() >= diamond);
        }
    }

    #[test]
    fn test_offset_index_sweep_order() {
        let index = OffsetIndex::build(2);
        let expected = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 0),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];
        for (slot, (x, y)) in expected.iter().enumerate() {
            assert_eq!(index.get(&Vector { x: *x, y: *y }), Some(slot));
        }
        assert_eq!(index.get(&Vector { x: 2, y: 0 }), None);
    }

    #[test]
    fn test_offset_index_is_idempotent() {
        assert_eq!(OffsetIndex::build(9), OffsetIndex::build(9));
    }

    #[test]
    fn test_offset_index_excludes_the_boundary() {
        let index = OffsetIndex::build(5);
        assert!(!index.contains(&Vector { x: 0, y: 5 }));
        assert!(!index.contains(&Vector { x: 3, y: 4 }));
        assert!(index.contains(&Vector { x: 0, y: 4 }));
        assert!(index.contains(&Vector { x: -3, y: 3 }));
    }

    #[test]
    fn test_prefix_families_are_disjoint_and_ascending() {
        let prefix = PrefixTable::new(793, 20);
        let mut next = 0;
        for family in Family::ALL {
            assert_eq!(prefix.start(family), next, "{}", family);
            next += prefix.span(family);
        }
        assert_eq!(prefix.total(), next);
        assert_eq!(prefix.start(Family::Trapped), prefix.total() - 1);
    }

    #[test]
    fn test_prefix_layout() {
        let prefix = PrefixTable::new(793, 20);
        assert_eq!(prefix.half_extent(), 9);
        assert_eq!(prefix.start(Family::Candy1), 0);
        assert_eq!(prefix.start(Family::Candy2), 793);
        assert_eq!(prefix.start(Family::AdvHead), 2 * 793);
        assert_eq!(prefix.start(Family::AdvTail), 3 * 793);
        assert_eq!(prefix.start(Family::MyTail), 4 * 793);
        assert_eq!(prefix.start(Family::X), 5 * 793);
        assert_eq!(prefix.start(Family::Y), 5 * 793 + 10);
        assert_eq!(prefix.total(), 5 * 793 + 2 * 10 + 1);
    }

    #[test]
    fn test_odd_grid_half_extent() {
        assert_eq!(PrefixTable::new(1, 11).half_extent(), 5);
        assert_eq!(PrefixTable::new(1, 1).half_extent(), 0);
        assert_eq!(PrefixTable::new(1, 1).total(), 5 + 1 + 1 + 1);
    }

    #[test]
    fn test_family_names() {
        let names = Family::ALL.iter().map(|f| f.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec!["candy1", "candy2", "adv-head", "adv-tail", "my-tail", "x", "y", "trapped"]
        );
    }
}
