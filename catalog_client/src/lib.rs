mod client;
mod error;
mod file;
mod response;
pub use client::*;
pub use error::*;
pub use file::*;
pub use response::*;

use bazaar::{HeroId, Item, Size};

/// Narrows down which items the catalog returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemQuery {
    pub hero_id: Option<HeroId>,
    pub size: Option<Size>,
    pub item_type: Option<String>,
}

/// Anything that can produce the list of items to plan with.
pub trait ItemSource {
    fn fetch_items(&self, query: &ItemQuery) -> Result<Vec<Item>, CatalogError>;
}
