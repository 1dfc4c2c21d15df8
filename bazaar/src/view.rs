use crate::{Board, Placement};

/// How to render a single slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotDirective<'a> {
    /// A free, clickable slot.
    Empty,
    /// The first slot of a placement, drawn spanning `width` slots.
    ItemHead {
        placement: &'a Placement,
        width: usize,
    },
    /// Covered by the item head to its left; drawn as an invisible filler.
    Hidden,
}

/// Everything a renderer needs to draw the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState<'a> {
    /// One directive per slot, in slot order.
    pub slots: Vec<SlotDirective<'a>>,
    pub used_slots: usize,
    pub remaining_slots: usize,
}

impl<'a> ViewState<'a> {
    pub fn of(board: &'a Board) -> Self {
        let slots = (0..board.num_slots())
            .map(|index| match board.placement_at(index) {
                Some(placement) => SlotDirective::ItemHead {
                    placement,
                    width: placement.width(),
                },
                None if board.is_hidden(index) => SlotDirective::Hidden,
                None => SlotDirective::Empty,
            })
            .collect();
        Self {
            slots,
            used_slots: board.used_slots(),
            remaining_slots: board.remaining_slots(),
        }
    }

    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Slots that may be clicked to start adding an item.
    pub fn selectable_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, directive)| matches!(directive, SlotDirective::Empty))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlacementScript;
    use crate::{Item, Size};

    quickcheck! {
        fn heads_and_fillers_cover_used_slots(script: PlacementScript) -> bool {
            let board = script.run();
            let view = ViewState::of(&board);
            let covered: usize = view
                .slots
                .iter()
                .map(|d| match d {
                    SlotDirective::ItemHead { width, .. } => *width,
                    _ => 0,
                })
                .sum();
            let hidden = view.slots.iter().filter(|d| **d == SlotDirective::Hidden).count();
            let heads = view
                .slots
                .iter()
                .filter(|d| matches!(d, SlotDirective::ItemHead { .. }))
                .count();
            covered == view.used_slots && hidden + heads == view.used_slots
        }
    }

    #[test]
    fn directives_for_large_item() {
        let board = Board::new(4)
            .calculate(1, Item::new(1, "Ballista", Size::Large))
            .unwrap()
            .execute();
        let view = ViewState::of(&board);
        assert_eq!(view.slots[0], SlotDirective::Empty);
        assert!(matches!(
            view.slots[1],
            SlotDirective::ItemHead { placement, width: 3 } if placement.item.name == "Ballista"
        ));
        assert_eq!(view.slots[2], SlotDirective::Hidden);
        assert_eq!(view.slots[3], SlotDirective::Hidden);
        assert_eq!((view.used_slots, view.remaining_slots), (3, 1));
        assert_eq!(view.selectable_slots().collect::<Vec<_>>(), vec![0]);
    }
}
