use std::path::{Path, PathBuf};

use bazaar::Item;
use tracing::info;

use crate::{extract_items, CatalogError, ItemQuery, ItemSource};

/// A catalog stored as a JSON file, in any shape the API could respond with.
#[derive(Clone, Debug)]
pub struct ItemsFile {
    path: PathBuf,
}

impl ItemsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Reads every item from a JSON catalog file.
pub fn load_items_file(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = extract_items(serde_json::from_str(&contents)?)?;
    info!(path = %path.display(), "Loaded {} items", items.len());
    Ok(items)
}

impl ItemSource for ItemsFile {
    /// The file holds the unfiltered catalog, so the hero and size parts of
    /// the query are applied here. Files carry no item type, so that part is ignored.
    fn fetch_items(&self, query: &ItemQuery) -> Result<Vec<Item>, CatalogError> {
        let mut items = load_items_file(&self.path)?;
        if let Some(hero_id) = query.hero_id {
            items.retain(|item| item.hero_id == Some(hero_id));
        }
        if let Some(size) = query.size {
            items.retain(|item| item.size == size);
        }
        Ok(items)
    }
}
