use bazaar::{SizeFilter, SlotDirective, ViewState};
use ratatui::{layout::Flex, prelude::*, widgets::*};

use crate::app::App;

const SLOT_WIDTH: u16 = 8;
const BOARD_HEIGHT: u16 = 4;

/// The board row, with every item drawn across the slots it covers.
struct BoardWidget<'a> {
    view: ViewState<'a>,
    cursor: usize,
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board_width = SLOT_WIDTH * self.view.num_slots() as u16;
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(board_width),
                Constraint::Min(0),
            ])
            .split(area)[1];
        for (index, directive) in self.view.slots.iter().enumerate() {
            let (width, label) = match directive {
                SlotDirective::Empty => (1, index.to_string()),
                SlotDirective::ItemHead { placement, width } => {
                    (*width as u16, placement.item.name.clone())
                }
                SlotDirective::Hidden => continue,
            };
            let rect = Rect {
                x: area.x + SLOT_WIDTH * index as u16,
                y: area.y,
                width: SLOT_WIDTH * width,
                height: BOARD_HEIGHT,
            }
            .intersection(area);
            if rect.width < 3 || rect.height < 3 {
                continue;
            }
            let covers_cursor = match directive {
                SlotDirective::ItemHead { placement, .. } => placement.covers(self.cursor),
                _ => index == self.cursor,
            };
            let style = if covers_cursor {
                Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::new()
            };
            let block = Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all())
                .border_style(style);
            let inner = block.inner(rect);
            block.render(rect, buf);
            buf.set_stringn(inner.x, inner.y, label, inner.width as usize, style);
        }
    }
}

fn size_tabs(selected: SizeFilter) -> Tabs<'static> {
    let index = SizeFilter::OPTIONS
        .iter()
        .position(|&option| option == selected)
        .unwrap_or(0);
    Tabs::new(SizeFilter::OPTIONS.iter().map(|option| option.to_string()))
        .select(index)
        .highlight_style(Style::new().fg(Color::Yellow))
}

fn popup_area(area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(70)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(60)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn render_selector(app: &App, frame: &mut Frame, area: Rect) {
    let area = popup_area(area);
    frame.render_widget(Clear, area);
    let block = Block::bordered().title("Choose an item (Tab: size, Esc: cancel)");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ],
    )
    .split(inner);
    frame.render_widget(size_tabs(app.filter.size), layout[0]);
    frame.render_widget(
        Paragraph::new(format!("Search: {}_", app.filter.search_term)),
        layout[1],
    );

    let items = app.visible_items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new("No items found matching your filters."),
            layout[2],
        );
        return;
    }
    let list = List::new(
        items
            .iter()
            .map(|item| format!("{} ({})", item.name, item.size)),
    )
    .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.highlighted));
    frame.render_stateful_widget(list, layout[2], &mut state);
}

pub fn ui(app: &App, frame: &mut Frame) {
    let main_layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(1),
            Constraint::Length(BOARD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
    )
    .split(frame.size());

    let view = app.controller.view_state();
    let status = format!(
        "Slots used: {}/{}  Slots remaining: {}",
        view.used_slots,
        view.num_slots(),
        view.remaining_slots
    );
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), main_layout[0]);
    frame.render_widget(
        BoardWidget {
            view,
            cursor: app.cursor,
        },
        main_layout[1],
    );

    let details = match app.tooltip() {
        Some(tooltip) => {
            let mut lines = vec![Line::from(tooltip.title).bold()];
            lines.extend(
                tooltip
                    .rows
                    .into_iter()
                    .map(|row| Line::from(format!("{}: {}", row.label, row.value))),
            );
            Text::from(lines)
        }
        None => Text::from("Empty slot"),
    };
    frame.render_widget(
        Paragraph::new(details)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title("Details")),
        main_layout[2],
    );

    let footer = match &app.message {
        Some(message) => message.clone(),
        None => "←/→ move  Enter add  d remove  q quit".to_string(),
    };
    frame.render_widget(Paragraph::new(footer), main_layout[3]);

    if app.is_selecting() {
        render_selector(app, frame, frame.size());
    }
}
