use quickcheck::{Arbitrary, Gen};

use crate::{Board, Item, Size};

#[derive(Clone, Debug)]
pub enum ScriptStep {
    Place { start: usize, size: Size },
    Remove { start: usize },
}

/// A random board size plus a random sequence of placements and removals,
/// some of which will be rejected.
#[derive(Clone, Debug)]
pub struct PlacementScript {
    pub num_slots: usize,
    pub steps: Vec<ScriptStep>,
}

impl PlacementScript {
    /// Applies the steps in order, skipping rejected placements.
    pub fn run(&self) -> Board {
        let mut board = Board::new(self.num_slots);
        for (id, step) in self.steps.iter().enumerate() {
            match *step {
                ScriptStep::Place { start, size } => {
                    let item = Item::new(id as u32, format!("item {}", id), size);
                    if let Ok(calc) = board.calculate(start, item) {
                        board = calc.execute();
                    }
                }
                ScriptStep::Remove { start } => {
                    board = board.without(start);
                }
            }
        }
        board
    }
}

impl Arbitrary for PlacementScript {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_slots = (u8::arbitrary(g) % 16) as usize + 1;
        let num_steps = usize::arbitrary(g) % 24;
        let steps = (0..num_steps)
            .map(|_| {
                // Let some starts fall past the end of the board
                let start = (u8::arbitrary(g) as usize) % (num_slots + 2);
                // Placing is more interesting than removing
                if u8::arbitrary(g) % 4 == 0 {
                    ScriptStep::Remove { start }
                } else {
                    ScriptStep::Place {
                        start,
                        size: Size::arbitrary(g),
                    }
                }
            })
            .collect();
        PlacementScript { num_slots, steps }
    }
}

impl Arbitrary for Size {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Size::Small, Size::Medium, Size::Large, Size::Unknown])
            .unwrap()
    }
}

impl Arbitrary for Item {
    fn arbitrary(g: &mut Gen) -> Self {
        let names = ["Fang", "Agility Boots", "Ballista", "Pearl", "Sextant", ""];
        let mut item = Item::new(
            u32::arbitrary(g) % 1000,
            *g.choose(&names).unwrap(),
            Size::arbitrary(g),
        );
        if bool::arbitrary(g) {
            item.description = Some(format!("{} description", item.name));
        }
        item
    }
}
