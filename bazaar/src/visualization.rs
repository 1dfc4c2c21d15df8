use crate::{SlotDirective, ViewState};

/// Inner width of a single slot in characters.
const CELL_WIDTH: usize = 5;

/// Renders the board as a single row of boxes, one per empty slot or item,
/// with the starting slot index under each box.
pub fn visualize_board(view: &ViewState) -> String {
    // (starting slot, inner width, content)
    let mut segments = Vec::with_capacity(view.num_slots());
    for (index, directive) in view.slots.iter().enumerate() {
        match directive {
            SlotDirective::Empty => {
                segments.push((index, CELL_WIDTH, format!("{:^w$}", "+", w = CELL_WIDTH)));
            }
            SlotDirective::ItemHead { placement, width } => {
                // Spanning items swallow the separators between their slots
                let inner = CELL_WIDTH * width + (width - 1);
                let name: String = placement.item.name.chars().take(inner - 2).collect();
                segments.push((index, inner, format!(" {:<w$} ", name, w = inner - 2)));
            }
            SlotDirective::Hidden => {}
        }
    }

    let border = |left: &str, mid: &str, right: &str| {
        let parts: Vec<String> = segments.iter().map(|(_, w, _)| "─".repeat(*w)).collect();
        format!("{}{}{}", left, parts.join(mid), right)
    };

    let mut result = border("╭", "┬", "╮");
    result += "\n│";
    for (_, _, content) in &segments {
        result += content;
        result += "│";
    }
    result += "\n";
    result += &border("╰", "┴", "╯");
    result += "\n ";
    let mut indices = String::new();
    for (index, inner, _) in &segments {
        indices += &format!("{:<w$}", index, w = inner + 1);
    }
    result += indices.trim_end();
    result += &format!(
        "\nSlots used: {}/{}  Slots remaining: {}",
        view.used_slots,
        view.num_slots(),
        view.remaining_slots
    );
    result
}
