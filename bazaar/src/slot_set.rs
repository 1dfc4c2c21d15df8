use std::iter::FusedIterator;

use crate::bitset::bitset_traits;

/// The largest board supported by [`SlotSet`], and therefore by [`Board`](crate::Board).
pub const MAX_NUM_SLOTS: usize = 64;

/// A compact set of slot indices on a board.
///
/// Allows intersection/union/difference with other such sets via operators.
/// Iterating yields the indices in ascending order.
///
/// ```
/// use bazaar::SlotSet;
/// let mut set = SlotSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `SlotSet`.
/// set = set.insert(4);
/// set = set.insert(4); // Inserting a second time has no effect
/// set = set.insert_range(0, 2);
/// assert_eq!(Vec::from_iter(set), vec![0, 1, 4]);
/// assert_eq!(set.len(), 3);
/// ```
///
/// Indices at or above [`MAX_NUM_SLOTS`] cannot be represented and are
/// ignored by `insert`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotSet {
    bits: u64,
}

impl SlotSet {
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, index: usize) -> bool {
        index < MAX_NUM_SLOTS && (self.bits & (1u64 << index)) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, index: usize) -> Self {
        if index >= MAX_NUM_SLOTS {
            return self;
        }
        Self {
            bits: self.bits | (1u64 << index),
        }
    }

    /// Inserts the half-open range `[start, start + width)`.
    #[must_use]
    pub fn insert_range(self, start: usize, width: usize) -> Self {
        (start..start.saturating_add(width).min(MAX_NUM_SLOTS)).fold(self, |set, index| set.insert(index))
    }

    /// Does this set share at least one index with `other`?
    pub fn intersects(self, other: SlotSet) -> bool {
        (self & other).bits != 0
    }
}

bitset_traits!(SlotSet, usize);

impl IntoIterator for SlotSet {
    type Item = usize;

    type IntoIter = SlotSetIter;

    fn into_iter(self) -> Self::IntoIter {
        SlotSetIter { bits: self.bits }
    }
}

/// Iterator for a [`SlotSet`] that returns indices in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct SlotSetIter {
    bits: u64,
}

impl Iterator for SlotSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            let index = self.bits.trailing_zeros() as usize;
            self.bits &= self.bits - 1;
            Some(index)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for SlotSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for SlotSetIter {}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn iterates_what_was_inserted(indices: Vec<u8>) -> bool {
            let indices: Vec<usize> = indices.into_iter().map(|i| i as usize % MAX_NUM_SLOTS).collect();
            let set = SlotSet::from_iter(indices.iter().copied());
            let mut expected = indices.clone();
            expected.sort_unstable();
            expected.dedup();
            Vec::from_iter(set) == expected && set.len() == expected.len()
        }
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let set = SlotSet::new().insert(MAX_NUM_SLOTS).insert_range(62, 5);
        assert_eq!(Vec::from_iter(set), vec![62, 63]);
        assert!(!set.contains(MAX_NUM_SLOTS));
    }

    #[test]
    fn difference_and_intersection() {
        let a = SlotSet::new().insert_range(0, 4);
        let b = SlotSet::new().insert_range(2, 4);
        assert_eq!(Vec::from_iter(a - b), vec![0, 1]);
        assert_eq!(Vec::from_iter(a & b), vec![2, 3]);
        assert!(a.intersects(b));
        assert!(!(a - b).intersects(b));
    }
}
