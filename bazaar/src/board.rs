mod error;
mod validator;

use std::ops::Deref;

pub use error::*;
pub use validator::*;

use serde::{Deserialize, Serialize};

use crate::{Item, SlotSet, MAX_NUM_SLOTS};

pub const DEFAULT_NUM_SLOTS: usize = 10;

/// An item bound to the slot where it starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub start: usize,
    pub item: Item,
}

impl Placement {
    pub fn width(&self) -> usize {
        self.item.width()
    }

    /// One past the last slot covered by this placement.
    pub fn end(&self) -> usize {
        self.start + self.width()
    }

    pub fn covers(&self, index: usize) -> bool {
        (self.start..self.end()).contains(&index)
    }

    pub fn slots(&self) -> SlotSet {
        SlotSet::new().insert_range(self.start, self.width())
    }
}

/// Which slots are in use, derived from a board's placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupancy {
    /// The sum of all placement widths.
    pub used_slots: usize,
    /// Every slot covered by some placement, start or not.
    pub occupied: SlotSet,
}

impl Occupancy {
    /// Folds over the placements. Overlapping placements are not detected:
    /// an overlapped slot is counted in `used_slots` once per placement.
    pub fn of<'a>(placements: impl IntoIterator<Item = &'a Placement>) -> Self {
        let mut occupancy = Occupancy {
            used_slots: 0,
            occupied: SlotSet::new(),
        };
        for placement in placements {
            occupancy.used_slots += placement.width();
            occupancy.occupied |= placement.slots();
        }
        occupancy
    }
}

/// The slots of one planning session and the items placed on them.
///
/// This is a value type: placing or removing an item produces a new board
/// (see [`Board::calculate()`] and [`Board::without()`]), and only the
/// [`BoardController`](crate::BoardController) swaps the session's board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    num_slots: usize,
    /// Sorted by start, at most one entry per start.
    ///
    /// The `occupancy` field is derived from this list.
    placements: Vec<Placement>,
    occupancy: Occupancy,
}

impl Board {
    /// Creates an empty board.
    ///
    /// Panics if `num_slots` is zero or larger than [`MAX_NUM_SLOTS`].
    pub fn new(num_slots: usize) -> Self {
        assert!(
            (1..=MAX_NUM_SLOTS).contains(&num_slots),
            "a board needs between 1 and {} slots, got {}",
            MAX_NUM_SLOTS,
            num_slots
        );
        Self {
            num_slots,
            placements: Vec::new(),
            occupancy: Occupancy::of(std::iter::empty()),
        }
    }

    /// Creates a board by placing each placement in turn, so that the result
    /// satisfies the same invariants as a board built through the controller.
    ///
    /// Panics under the same conditions as [`Board::new()`].
    pub fn from_placements(
        num_slots: usize,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Result<Self, IllegalPlacement> {
        let mut board = Board::new(num_slots);
        for Placement { start, item } in placements {
            board = board.calculate(start, item)?.execute();
        }
        Ok(board)
    }

    pub fn num_slots(&self) -> usize {
        self.num_slots
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    pub fn used_slots(&self) -> usize {
        self.occupancy.used_slots
    }

    pub fn remaining_slots(&self) -> usize {
        self.num_slots.saturating_sub(self.occupancy.used_slots)
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.occupancy.occupied.contains(index)
    }

    /// Does a placement start at `index`?
    pub fn is_visible_start(&self, index: usize) -> bool {
        self.placement_at(index).is_some()
    }

    /// Is `index` covered by a placement that starts somewhere before it?
    pub fn is_hidden(&self, index: usize) -> bool {
        self.is_occupied(index) && !self.is_visible_start(index)
    }

    /// The placement starting at `start`.
    pub fn placement_at(&self, start: usize) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&start, |p| p.start)
            .ok()
            .map(|idx| &self.placements[idx])
    }

    /// The placement whose range contains `index`.
    pub fn placement_covering(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.covers(index))
    }

    /// A copy of this board without the placement starting at `start`.
    ///
    /// If there is no such placement, the copy is identical.
    pub fn without(&self, start: usize) -> Board {
        let placements: Vec<Placement> = self
            .placements
            .iter()
            .filter(|p| p.start != start)
            .cloned()
            .collect();
        Board::from_sorted(self.num_slots, placements)
    }

    // Recomputes the derived data. `placements` must be sorted by start.
    fn from_sorted(num_slots: usize, placements: Vec<Placement>) -> Board {
        debug_assert!(placements.windows(2).all(|w| w[0].start < w[1].start));
        let occupancy = Occupancy::of(&placements);
        Board {
            num_slots,
            placements,
            occupancy,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_NUM_SLOTS)
    }
}

impl Deref for Board {
    type Target = [Placement];

    fn deref(&self) -> &Self::Target {
        &self.placements
    }
}
