use std::str::FromStr;

use anyhow::bail;

use crate::{Item, Size};

/// Restricts a catalog to one size class, or lets everything through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeFilter {
    #[default]
    All,
    Only(Size),
}

impl SizeFilter {
    /// The options offered to the user, in display order.
    pub const OPTIONS: [SizeFilter; 4] = [
        SizeFilter::All,
        SizeFilter::Only(Size::Small),
        SizeFilter::Only(Size::Medium),
        SizeFilter::Only(Size::Large),
    ];

    /// Items with an unknown size only pass [`SizeFilter::All`].
    pub fn matches(self, size: Size) -> bool {
        match self {
            SizeFilter::All => true,
            SizeFilter::Only(wanted) => size != Size::Unknown && size == wanted,
        }
    }

    /// The next option, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::OPTIONS.iter().position(|&o| o == self).unwrap_or(0);
        Self::OPTIONS[(idx + 1) % Self::OPTIONS.len()]
    }
}

impl std::fmt::Display for SizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SizeFilter::All => f.write_str("All"),
            SizeFilter::Only(size) => write!(f, "{}", size),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSizeFilter(pub String);

impl std::error::Error for UnknownSizeFilter {}

impl std::fmt::Display for UnknownSizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown size '{}', expected one of all, small, medium, large",
            self.0
        )
    }
}

impl FromStr for SizeFilter {
    type Err = UnknownSizeFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SizeFilter::All);
        }
        match Size::parse(s) {
            Size::Unknown => Err(UnknownSizeFilter(s.to_string())),
            size => Ok(SizeFilter::Only(size)),
        }
    }
}

/// The item selector's filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub size: SizeFilter,
    /// Matched case-insensitively against name and description. Empty matches everything.
    pub search_term: String,
    /// When set, only items that fit into this many slots pass.
    pub remaining_slots: Option<usize>,
}

impl CatalogFilter {
    pub fn matches(&self, item: &Item) -> bool {
        self.size.matches(item.size) && self.matches_search(item) && self.fits(item)
    }

    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Clears the size and search filters. The capacity limit stays.
    pub fn reset(&mut self) {
        self.size = SizeFilter::All;
        self.search_term.clear();
    }

    fn matches_search(&self, item: &Item) -> bool {
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        item.name.to_lowercase().contains(&term)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    fn fits(&self, item: &Item) -> bool {
        self.remaining_slots
            .map_or(true, |remaining| item.width() <= remaining)
    }
}

/// Sorts a freshly fetched catalog by name, case-insensitively.
///
/// Fails if the catalog is empty, since there would be nothing to place.
pub fn prepare_catalog(mut items: Vec<Item>) -> anyhow::Result<Vec<Item>> {
    if items.is_empty() {
        bail!("No items found. Please try again.");
    }
    items.sort_by_cached_key(|item| item.name.to_lowercase());
    Ok(items)
}
