//! Coordinate multiset for receptive-field accumulation.

use std::collections::HashMap;

use glam::IVec2;

/// A bag of integer coordinates with per-coordinate occurrence counts.
///
/// Receptive-field resolution accumulates overlapping contributions here;
/// the count of a coordinate drives the highlight intensity in the
/// visualization. Coordinates compare by value, and entries only ever
/// accumulate within one resolver run - there is no subtraction.
///
/// Coordinates outside a layer's `[0, size)` range are legal entries; they
/// represent the virtual padding region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMultiset {
    counts: HashMap<IVec2, u32>,
}

impl NodeMultiset {
    /// Creates a new empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count for `coord` by 1, inserting at 1 if absent.
    pub fn add(&mut self, coord: IVec2) {
        self.add_count(coord, 1);
    }

    /// Increments the count for `coord` by `count`.
    ///
    /// Adding a count of 0 is a no-op and never creates an entry.
    pub fn add_count(&mut self, coord: IVec2, count: u32) {
        if count > 0 {
            *self.counts.entry(coord).or_insert(0) += count;
        }
    }

    /// Adds every coordinate in `coords` once; duplicates accumulate.
    pub fn add_all<I>(&mut self, coords: I)
    where
        I: IntoIterator<Item = IVec2>,
    {
        for coord in coords {
            self.add(coord);
        }
    }

    /// Returns the stored count for `coord`, or 0 if absent.
    #[must_use]
    pub fn count(&self, coord: IVec2) -> u32 {
        self.counts.get(&coord).copied().unwrap_or(0)
    }

    /// Returns the maximum stored count, or 0 for an empty multiset.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Iterates over all (coordinate, count) pairs.
    ///
    /// Enumeration order carries no semantic meaning.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, u32)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Returns the number of distinct coordinates held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no coordinates are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_multiset() {
        let ms = NodeMultiset::new();
        assert_eq!(ms.count(IVec2::ZERO), 0);
        assert_eq!(ms.max_count(), 0);
        assert!(ms.is_empty());
    }

    #[test]
    fn test_add_accumulates() {
        let mut ms = NodeMultiset::new();
        ms.add(IVec2::new(1, 2));
        ms.add(IVec2::new(1, 2));
        ms.add(IVec2::new(3, 4));
        assert_eq!(ms.count(IVec2::new(1, 2)), 2);
        assert_eq!(ms.count(IVec2::new(3, 4)), 1);
        assert_eq!(ms.count(IVec2::new(9, 9)), 0);
        assert_eq!(ms.max_count(), 2);
        assert_eq!(ms.len(), 2);
    }

    #[test]
    fn test_add_all_with_duplicates() {
        let mut ms = NodeMultiset::new();
        ms.add_all(vec![IVec2::ZERO, IVec2::ONE, IVec2::ZERO]);
        assert_eq!(ms.count(IVec2::ZERO), 2);
        assert_eq!(ms.count(IVec2::ONE), 1);
    }

    #[test]
    fn test_add_count_zero_is_noop() {
        let mut ms = NodeMultiset::new();
        ms.add_count(IVec2::ZERO, 0);
        assert!(ms.is_empty());
    }

    #[test]
    fn test_negative_coordinates_are_legal() {
        let mut ms = NodeMultiset::new();
        ms.add(IVec2::new(-1, -3));
        assert_eq!(ms.count(IVec2::new(-1, -3)), 1);
    }

    #[test]
    fn test_clear() {
        let mut ms = NodeMultiset::new();
        ms.add(IVec2::ZERO);
        ms.clear();
        assert!(ms.is_empty());
        assert_eq!(ms.max_count(), 0);
    }
}
