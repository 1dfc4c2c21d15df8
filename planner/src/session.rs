use std::fmt::Write as _;
use std::io::{BufRead, Write};

use bazaar::{visualize_board, BoardController, CatalogFilter, Interaction, Item, Tooltip};
use tracing::{debug, info};

use crate::command::{Command, HELP};

/// What to do after a command ran.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// A planning session: one board, one catalog, and the item selector's filters.
pub struct Session {
    controller: BoardController,
    /// Sorted by name.
    catalog: Vec<Item>,
    filter: CatalogFilter,
}

impl Session {
    /// `catalog` is expected to be sorted, see [`bazaar::prepare_catalog()`].
    pub fn new(num_slots: usize, catalog: Vec<Item>) -> Self {
        Self {
            controller: BoardController::new(num_slots),
            catalog,
            filter: CatalogFilter::default(),
        }
    }

    pub fn controller(&self) -> &BoardController {
        &self.controller
    }

    pub fn filter(&self) -> &CatalogFilter {
        &self.filter
    }

    /// Items that pass the filters and fit into the remaining slots.
    pub fn visible_items(&self) -> Vec<&Item> {
        let filter = CatalogFilter {
            remaining_slots: Some(self.controller.remaining_slots()),
            ..self.filter.clone()
        };
        filter.apply(&self.catalog)
    }

    pub fn execute(&mut self, command: Command) -> Outcome {
        debug!(?command, "Executing command");
        let output = match command {
            Command::Show => self.show(),
            Command::Select { slot } => self.select(slot),
            Command::Cancel => {
                self.controller.cancel();
                "Cancelled.".to_string()
            }
            Command::List => self.list(),
            Command::Size(size) => {
                self.filter.size = size;
                self.list()
            }
            Command::Search(term) => {
                self.filter.search_term = term;
                self.list()
            }
            Command::Reset => {
                self.filter.reset();
                self.list()
            }
            Command::Add { item } => self.add(&item),
            Command::Place { slot, item } => self.place(slot, &item),
            Command::Remove { slot } => self.remove(slot),
            Command::Inspect { item } => {
                let all: Vec<&Item> = self.catalog.iter().collect();
                match find_item(&all, &item) {
                    Some(item) => Tooltip::for_item(item).to_string(),
                    None => format!("No item matches '{}'.", item),
                }
            }
            Command::Hover { slot } => self.hover(slot),
            Command::Help => HELP.to_string(),
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(output)
    }

    fn show(&self) -> String {
        let mut out = visualize_board(&self.controller.view_state());
        if let Interaction::AwaitingItem { target } = self.controller.interaction() {
            let _ = write!(out, "\nChoosing an item for slot {}.", target);
        }
        out
    }

    fn slot_exists(&self, slot: usize) -> bool {
        slot < self.controller.board().num_slots()
    }

    fn select(&mut self, slot: usize) -> String {
        if !self.slot_exists(slot) {
            return format!("Slot {} does not exist.", slot);
        }
        if !self.controller.select_slot_for_add(slot) {
            return format!("Slot {} is not empty.", slot);
        }
        format!(
            "Selected slot {}. Pick an item with 'add <item>', or 'cancel'.\n{}",
            slot,
            self.list()
        )
    }

    fn hover(&self, slot: usize) -> String {
        if !self.slot_exists(slot) {
            return format!("Slot {} does not exist.", slot);
        }
        match self.controller.board().placement_covering(slot) {
            Some(placement) => Tooltip::for_item(&placement.item).to_string(),
            None => format!("Slot {} is empty.", slot),
        }
    }

    fn list(&self) -> String {
        let items = self.visible_items();
        let mut out = format!(
            "Size: {}  Search: '{}'  Fits in: {} slot(s)",
            self.filter.size,
            self.filter.search_term,
            self.controller.remaining_slots()
        );
        if items.is_empty() {
            out += "\nNo items found matching your filters. Use 'reset' to reset filters.";
        }
        for item in items {
            let _ = write!(out, "\n{:>5}  {} ({})", item.id, item.name, item.size);
        }
        out
    }

    fn add(&mut self, reference: &str) -> String {
        let Interaction::AwaitingItem { target } = self.controller.interaction() else {
            return "Select an empty slot first.".to_string();
        };
        let item = match self.resolve_visible(reference) {
            Ok(item) => item,
            Err(msg) => {
                self.controller.cancel();
                return msg;
            }
        };
        match self.controller.add_to_selected_slot(item.clone()) {
            Some(Ok(slot)) => {
                info!(item = %item.name, slot, "Added item");
                format!("Added {} at slot {}.\n{}", item.name, slot, self.show())
            }
            Some(Err(err)) => err.to_string(),
            None => format!("Slot {} is no longer selected.", target),
        }
    }

    fn place(&mut self, slot: usize, reference: &str) -> String {
        let item = match self.resolve_visible(reference) {
            Ok(item) => item,
            Err(msg) => return msg,
        };
        match self.controller.add_item(item.clone(), slot) {
            Ok(()) => {
                info!(item = %item.name, slot, "Placed item");
                format!("Placed {} at slot {}.\n{}", item.name, slot, self.show())
            }
            Err(err) => err.to_string(),
        }
    }

    fn remove(&mut self, slot: usize) -> String {
        match self.controller.remove_item_covering(slot) {
            Some(placement) => {
                info!(item = %placement.item.name, slot = placement.start, "Removed item");
                format!(
                    "Removed {} from slot {}.\n{}",
                    placement.item.name,
                    placement.start,
                    self.show()
                )
            }
            None => format!("Slot {} is empty.", slot),
        }
    }

    // Finds an item the user could currently pick from the list.
    fn resolve_visible(&self, reference: &str) -> Result<Item, String> {
        let visible = self.visible_items();
        if let Some(item) = find_item(&visible, reference) {
            return Ok(item.clone());
        }
        let all: Vec<&Item> = self.catalog.iter().collect();
        match find_item(&all, reference) {
            Some(item) if item.width() > self.controller.remaining_slots() => Err(format!(
                "{} needs {} slot(s), only {} remaining.",
                item.name,
                item.width(),
                self.controller.remaining_slots()
            )),
            Some(item) => Err(format!("{} is hidden by the current filters.", item.name)),
            None => Err(format!("No item matches '{}'.", reference)),
        }
    }
}

/// Looks an item up by id, or else by case-insensitive name.
pub fn find_item<'a>(items: &[&'a Item], reference: &str) -> Option<&'a Item> {
    let reference = reference.trim();
    if let Ok(id) = reference.parse::<u32>() {
        if let Some(item) = items.iter().copied().find(|item| item.id == id) {
            return Some(item);
        }
    }
    items
        .iter()
        .copied()
        .find(|item| item.name.eq_ignore_ascii_case(reference))
}

/// Reads commands line by line until `quit` or end of input.
///
/// Invalid commands are reported and skipped.
pub fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => match session.execute(command) {
                Outcome::Continue(text) => writeln!(output, "{}", text)?,
                Outcome::Quit => break,
            },
            Err(err) => writeln!(output, "{}", err)?,
        }
        output.flush()?;
    }
    Ok(())
}
