use crate::{Board, IllegalPlacement, Item, Placement, Size, SlotSet};

/// The result of validating a placement, ready to be applied.
///
/// Ties the validated placement to the board it was validated against.
pub struct PlaceItemCalculation<'a> {
    board: &'a Board,
    placement: Placement,
}

impl Board {
    /// Checks whether an item of the given size fits at `start`.
    ///
    /// The item's footprint extends rightward from `start`. Every slot in it
    /// must exist and be free; no other start is considered.
    pub fn check_placement(&self, start: usize, size: Size) -> Result<(), IllegalPlacement> {
        let width = size.width();
        for offset in 0..width {
            let candidate = start.saturating_add(offset);
            if candidate >= self.num_slots() {
                return Err(IllegalPlacement::OutOfBounds {
                    start,
                    width,
                    num_slots: self.num_slots(),
                });
            }
            if self.is_occupied(candidate) {
                return Err(IllegalPlacement::SlotOccupied { index: candidate });
            }
        }
        Ok(())
    }

    pub fn can_place(&self, start: usize, size: Size) -> bool {
        self.check_placement(start, size).is_ok()
    }

    /// Every start at which an item of the given size could be placed.
    pub fn possible_starts(&self, size: Size) -> SlotSet {
        (0..self.num_slots())
            .filter(|&start| self.can_place(start, size))
            .collect()
    }

    /// Validates placing `item` at `start` and plans the new board.
    ///
    /// The returned struct has a method to actually apply the placement and
    /// get a new board.
    pub fn calculate(
        &self,
        start: usize,
        item: Item,
    ) -> Result<PlaceItemCalculation<'_>, IllegalPlacement> {
        self.check_placement(start, item.size)?;
        Ok(PlaceItemCalculation {
            board: self,
            placement: Placement { start, item },
        })
    }
}

impl<'a> PlaceItemCalculation<'a> {
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Apply the placement.
    pub fn execute(self) -> Board {
        let mut placements = self.board.placements().to_vec();
        let idx = placements.partition_point(|p| p.start < self.placement.start);
        placements.insert(idx, self.placement);
        Board::from_sorted(self.board.num_slots(), placements)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlacementScript;

    fn item(id: u32, size: Size) -> Item {
        Item::new(id, format!("item {}", id), size)
    }

    quickcheck! {
        fn rejects_footprint_past_last_slot(script: PlacementScript, start: u8, size: Size) -> bool {
            let board = script.run();
            let start = start as usize % (board.num_slots() + 3);
            start + size.width() <= board.num_slots() || !board.can_place(start, size)
        }

        fn rejects_footprint_over_occupied_slot(script: PlacementScript, start: u8, size: Size) -> bool {
            let board = script.run();
            let start = start as usize % board.num_slots();
            let footprint = SlotSet::new().insert_range(start, size.width());
            !footprint.intersects(board.occupancy().occupied) || !board.can_place(start, size)
        }

        fn accepted_placement_grows_used_slots_by_width(script: PlacementScript, start: u8, size: Size) -> bool {
            let board = script.run();
            let start = start as usize % board.num_slots();
            match board.calculate(start, item(999, size)) {
                Ok(calc) => {
                    let new_board = calc.execute();
                    new_board.is_visible_start(start)
                        && new_board.used_slots() == board.used_slots() + size.width()
                }
                Err(_) => true,
            }
        }

        fn possible_starts_agree_with_can_place(script: PlacementScript, size: Size) -> bool {
            let board = script.run();
            let starts = board.possible_starts(size);
            (0..board.num_slots()).all(|s| starts.contains(s) == board.can_place(s, size))
        }
    }

    #[test]
    fn scenario() {
        let board = Board::new(10);
        let board = board.calculate(0, item(1, Size::Large)).unwrap().execute();
        assert_eq!(Vec::from_iter(board.occupancy().occupied), vec![0, 1, 2]);
        assert_eq!((board.used_slots(), board.remaining_slots()), (3, 7));

        let board = board.calculate(3, item(2, Size::Medium)).unwrap().execute();
        assert_eq!(Vec::from_iter(board.occupancy().occupied), vec![0, 1, 2, 3, 4]);
        assert_eq!((board.used_slots(), board.remaining_slots()), (5, 5));

        assert_eq!(
            board.check_placement(8, Size::Large),
            Err(IllegalPlacement::OutOfBounds {
                start: 8,
                width: 3,
                num_slots: 10
            })
        );
        assert_eq!(
            board.check_placement(1, Size::Small),
            Err(IllegalPlacement::SlotOccupied { index: 1 })
        );

        let board = board.without(0);
        assert_eq!(Vec::from_iter(board.occupancy().occupied), vec![3, 4]);
        assert_eq!((board.used_slots(), board.remaining_slots()), (2, 8));
    }

    #[test]
    fn first_violation_is_reported() {
        // Slot 9 is free but slot 10 doesn't exist; slot 1 is taken before that.
        let board = Board::from_placements(10, [Placement { start: 1, item: item(1, Size::Small) }])
            .unwrap();
        assert_eq!(
            board.check_placement(0, Size::Medium),
            Err(IllegalPlacement::SlotOccupied { index: 1 })
        );
        assert!(matches!(
            board.check_placement(9, Size::Medium),
            Err(IllegalPlacement::OutOfBounds { .. })
        ));
    }

    #[test]
    fn unknown_size_needs_one_slot() {
        let board = Board::new(3);
        assert!(board.can_place(2, Size::Unknown));
        assert!(!board.can_place(3, Size::Unknown));
        assert!(!board.can_place(usize::MAX, Size::Large));
    }

    #[test]
    fn execute_keeps_placements_sorted() {
        let board = Board::new(10);
        let board = board.calculate(6, item(1, Size::Small)).unwrap().execute();
        let board = board.calculate(0, item(2, Size::Medium)).unwrap().execute();
        let board = board.calculate(3, item(3, Size::Small)).unwrap().execute();
        let starts: Vec<usize> = board.iter().map(|p| p.start).collect();
        assert_eq!(starts, vec![0, 3, 6]);
    }
}
