/// Why an item cannot be placed at the requested slot.
///
/// Returned by [`Board::check_placement()`](crate::Board::check_placement) and
/// everything built on it. A rejected placement never changes the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    /// The item's footprint would run past the last slot.
    OutOfBounds {
        start: usize,
        width: usize,
        num_slots: usize,
    },
    /// One of the slots the item needs is already taken.
    SlotOccupied { index: usize },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { start, width, num_slots } => write!(
                f,
                "Can't place item here: it needs {} slot(s) starting at slot {}, but the board only has {} slots",
                width, start, num_slots
            ),
            IllegalPlacement::SlotOccupied { index } => {
                write!(f, "Can't place item here: slot {} is already occupied", index)
            }
        }
    }
}
