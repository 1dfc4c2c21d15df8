use bazaar::{BoardController, CatalogFilter, Interaction, Item, Tooltip};
use ratatui::crossterm::event::KeyCode;
use tracing::info;

/// State of the terminal planner between two frames.
pub struct App {
    pub controller: BoardController,
    /// Sorted by name.
    pub catalog: Vec<Item>,
    pub filter: CatalogFilter,
    /// The slot under the board cursor.
    pub cursor: usize,
    /// Index into [`App::visible_items()`] while the selector is open.
    pub highlighted: usize,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(num_slots: usize, catalog: Vec<Item>) -> Self {
        Self {
            controller: BoardController::new(num_slots),
            catalog,
            filter: CatalogFilter::default(),
            cursor: 0,
            highlighted: 0,
            message: None,
            should_quit: false,
        }
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.controller.interaction(), Interaction::AwaitingItem { .. })
    }

    /// Items that pass the filters and fit into the remaining slots.
    pub fn visible_items(&self) -> Vec<&Item> {
        let filter = CatalogFilter {
            remaining_slots: Some(self.controller.remaining_slots()),
            ..self.filter.clone()
        };
        filter.apply(&self.catalog)
    }

    /// The tooltip to show: the highlighted item in the selector, or else the
    /// item under the cursor.
    pub fn tooltip(&self) -> Option<Tooltip> {
        if self.is_selecting() {
            let items = self.visible_items();
            return items.get(self.highlighted).map(|item| Tooltip::for_item(item));
        }
        self.controller
            .board()
            .placement_covering(self.cursor)
            .map(|placement| Tooltip::for_item(&placement.item))
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        if self.is_selecting() {
            self.handle_selector_key(code);
        } else {
            self.handle_board_key(code);
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        let num_slots = self.controller.board().num_slots();
        match code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(num_slots - 1),
            KeyCode::Enter => {
                if self.controller.select_slot_for_add(self.cursor) {
                    self.highlighted = 0;
                    self.message = None;
                } else {
                    self.message = Some(format!("Slot {} is not empty.", self.cursor));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.message = Some(match self.controller.remove_item_covering(self.cursor) {
                    Some(placement) => {
                        info!(item = %placement.item.name, slot = placement.start, "Removed item");
                        format!("Removed {}.", placement.item.name)
                    }
                    None => format!("Slot {} is empty.", self.cursor),
                });
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.message = None,
            _ => {}
        }
    }

    fn handle_selector_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.controller.cancel(),
            KeyCode::Up => self.highlighted = self.highlighted.saturating_sub(1),
            KeyCode::Down => {
                let len = self.visible_items().len();
                if self.highlighted + 1 < len {
                    self.highlighted += 1;
                }
            }
            KeyCode::Tab => {
                self.filter.size = self.filter.size.next();
                self.highlighted = 0;
            }
            KeyCode::Backspace => {
                self.filter.search_term.pop();
                self.highlighted = 0;
            }
            KeyCode::Char(c) => {
                self.filter.search_term.push(c);
                self.highlighted = 0;
            }
            KeyCode::Enter => self.add_highlighted(),
            _ => {}
        }
    }

    fn add_highlighted(&mut self) {
        let Some(item) = self.visible_items().get(self.highlighted).map(|&item| item.clone()) else {
            return;
        };
        self.message = match self.controller.add_to_selected_slot(item.clone()) {
            Some(Ok(slot)) => {
                info!(item = %item.name, slot, "Added item");
                Some(format!("Added {} at slot {}.", item.name, slot))
            }
            Some(Err(err)) => Some(err.to_string()),
            None => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use bazaar::{Size, SizeFilter};

    use super::*;

    fn app(num_slots: usize) -> App {
        App::new(
            num_slots,
            vec![
                Item::new(1, "Agility Boots", Size::Medium),
                Item::new(2, "Ballista", Size::Large),
                Item::new(3, "Fang", Size::Small),
            ],
        )
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for &code in codes {
            app.handle_key(code);
        }
    }

    #[test]
    fn add_highlighted_item() {
        let mut app = app(10);
        press(&mut app, &[KeyCode::Right, KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        assert!(!app.is_selecting());
        let placement = app.controller.board().placement_at(1).unwrap();
        assert_eq!(placement.item.name, "Ballista");
        assert_eq!(app.message.as_deref(), Some("Added Ballista at slot 1."));
    }

    #[test]
    fn rejected_add_leaves_the_selector() {
        let mut app = app(10);
        app.cursor = 8;
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        assert!(!app.is_selecting());
        assert_eq!(app.controller.board().used_slots(), 0);
        assert!(app.message.unwrap().starts_with("Can't place item here"));
    }

    #[test]
    fn typing_edits_the_search() {
        let mut app = app(10);
        press(
            &mut app,
            &[
                KeyCode::Enter,
                KeyCode::Char('f'),
                KeyCode::Char('q'),
                KeyCode::Backspace,
                KeyCode::Tab,
            ],
        );
        assert!(!app.should_quit);
        assert_eq!(app.filter.search_term, "f");
        assert_eq!(app.filter.size, SizeFilter::Only(Size::Small));
        assert_eq!(app.tooltip().unwrap().title, "Fang");
        press(&mut app, &[KeyCode::Esc]);
        assert!(!app.is_selecting());
    }

    #[test]
    fn remove_under_cursor() {
        let mut app = app(10);
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.tooltip().unwrap().title, "Ballista");
        press(&mut app, &[KeyCode::Char('d')]);
        assert_eq!(app.controller.board().used_slots(), 0);
        assert!(app.tooltip().is_none());
    }

    #[test]
    fn cursor_stays_on_the_board() {
        let mut app = app(3);
        press(&mut app, &[KeyCode::Left, KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.cursor, 2);
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit);
    }
}
