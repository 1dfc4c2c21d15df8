use tracing::debug;

use crate::{Board, IllegalPlacement, Item, Placement, ViewState};

/// What the session is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// An empty slot was selected, and the user is choosing an item for it.
    AwaitingItem { target: usize },
}

/// Owns the board for one planning session and performs every change to it.
#[derive(Clone, Debug, Default)]
pub struct BoardController {
    board: Board,
    interaction: Interaction,
}

impl BoardController {
    /// Panics if `num_slots` is not a valid board size, see [`Board::new()`].
    pub fn new(num_slots: usize) -> Self {
        Self {
            board: Board::new(num_slots),
            interaction: Interaction::Idle,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn remaining_slots(&self) -> usize {
        self.board.remaining_slots()
    }

    /// Places `item` at `index` if its whole footprint is free.
    ///
    /// Either way this completes a pending item selection. On rejection the
    /// board is unchanged.
    pub fn add_item(&mut self, item: Item, index: usize) -> Result<(), IllegalPlacement> {
        self.interaction = Interaction::Idle;
        let item_id = item.id;
        match self.board.calculate(index, item) {
            Ok(calc) => {
                debug!(item_id, index, width = calc.placement().width(), "Placed item");
                self.board = calc.execute();
                Ok(())
            }
            Err(err) => {
                debug!(item_id, index, %err, "Rejected placement");
                Err(err)
            }
        }
    }

    /// Places `item` at the slot selected with [`Self::select_slot_for_add()`].
    ///
    /// Returns `None` without doing anything if no slot is selected.
    pub fn add_to_selected_slot(&mut self, item: Item) -> Option<Result<usize, IllegalPlacement>> {
        match self.interaction {
            Interaction::Idle => None,
            Interaction::AwaitingItem { target } => {
                Some(self.add_item(item, target).map(|()| target))
            }
        }
    }

    /// Removes the placement starting at `index`, if there is one.
    pub fn remove_item(&mut self, index: usize) -> Option<Placement> {
        let removed = self.board.placement_at(index).cloned()?;
        debug!(item_id = removed.item.id, index, "Removed item");
        self.board = self.board.without(index);
        Some(removed)
    }

    /// Removes whichever placement covers `index`, keyed by that placement's start.
    pub fn remove_item_covering(&mut self, index: usize) -> Option<Placement> {
        let start = self.board.placement_covering(index)?.start;
        self.remove_item(start)
    }

    /// Starts choosing an item for slot `index`.
    ///
    /// Only free slots can be selected; returns whether the selection happened.
    pub fn select_slot_for_add(&mut self, index: usize) -> bool {
        if index >= self.board.num_slots() || self.board.is_occupied(index) {
            debug!(index, "Slot is not selectable");
            return false;
        }
        debug!(index, "Selected slot");
        self.interaction = Interaction::AwaitingItem { target: index };
        true
    }

    pub fn cancel(&mut self) {
        self.interaction = Interaction::Idle;
    }

    pub fn view_state(&self) -> ViewState<'_> {
        ViewState::of(&self.board)
    }
}
