use crate::Item;

/// The details shown when hovering an item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub title: String,
    pub rows: Vec<TooltipRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipRow {
    pub label: &'static str,
    pub value: String,
}

impl Tooltip {
    /// Rows without a meaningful value (no cooldown, zero cooldown, empty effect) are left out.
    pub fn for_item(item: &Item) -> Self {
        let mut rows = vec![TooltipRow {
            label: "Type",
            value: item.size.label().to_string(),
        }];
        if let Some(cooldown) = item.cooldown.filter(|&c| c > 0) {
            rows.push(TooltipRow {
                label: "Cooldown",
                value: format!("{} seconds", cooldown),
            });
        }
        if let Some(effect) = item.effect.as_deref().filter(|e| !e.trim().is_empty()) {
            rows.push(TooltipRow {
                label: "Effect",
                value: effect.to_string(),
            });
        }
        Self {
            title: item.name.clone(),
            rows,
        }
    }
}

impl std::fmt::Display for Tooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)?;
        for row in &self.rows {
            write!(f, "\n  {}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}
