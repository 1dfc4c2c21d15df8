use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub type ItemId = u32;
pub type HeroId = u32;

/// Directory that item images are served from.
pub const ITEM_IMAGE_DIR: &str = "/assets/images/items";

/// Images to try, in order, when an item's own image cannot be loaded.
pub const IMAGE_FALLBACKS: [&str; 2] = ["default.avif", "default.png"];

/// The size class of an [item](Item), which determines how many board slots it needs.
///
/// The catalog sends sizes as free-form strings. They are normalized once,
/// when the item is deserialized, and anything that isn't recognized
/// (including a missing or `null` size) becomes [`Size::Unknown`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Size {
    Small,
    Medium,
    Large,
    #[default]
    Unknown,
}

impl Size {
    /// The sizes a catalog can be filtered by.
    pub const KNOWN: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Case-insensitive, whitespace-tolerant parsing. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "small" => Size::Small,
            "medium" => Size::Medium,
            "large" => Size::Large,
            _ => Size::Unknown,
        }
    }

    /// Number of consecutive slots an item of this size occupies.
    pub fn width(self) -> usize {
        match self {
            Size::Small | Size::Unknown => 1,
            Size::Medium => 2,
            Size::Large => 3,
        }
    }

    /// The name shown to users. Unknown sizes are displayed as small.
    pub fn label(self) -> &'static str {
        match self {
            Size::Small | Size::Unknown => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// The wire name, or `None` for [`Size::Unknown`].
    pub fn as_wire_str(self) -> Option<&'static str> {
        match self {
            Size::Small => Some("small"),
            Size::Medium => Some("medium"),
            Size::Large => Some("large"),
            Size::Unknown => None,
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire_str() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Size::parse).unwrap_or_default())
    }
}

/// An item record from the catalog service.
///
/// Only `id` and `size` matter for placement; the rest is shown to users.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: Size,
    #[serde(default)]
    pub description: Option<String>,
    /// Cooldown in seconds.
    #[serde(default)]
    pub cooldown: Option<u32>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub hero_id: Option<HeroId>,
    /// Where the item comes from, e.g. "hero_specific", "monster" or "universal".
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub cost: Option<u32>,
}

impl Item {
    /// Creates an item with only the fields relevant for placement set.
    pub fn new(id: ItemId, name: impl Into<String>, size: Size) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            description: None,
            cooldown: None,
            effect: None,
            image_url: None,
            hero_id: None,
            source: None,
            cost: None,
        }
    }

    pub fn width(&self) -> usize {
        self.size.width()
    }

    /// The image to show for this item: its own URL if the catalog has one,
    /// otherwise a path derived from its name.
    pub fn image_source(&self) -> String {
        match &self.image_url {
            Some(url) if !url.is_empty() => url.clone(),
            _ => image_path(&self.name),
        }
    }
}

/// A hero record from the catalog service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
}

/// Converts an item name to its image filename, e.g. "Agility Boots" to "AgilityBoots.avif".
pub fn image_filename(item_name: &str) -> String {
    let stem: String = item_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if item_name.is_empty() {
        IMAGE_FALLBACKS[0].to_string()
    } else {
        format!("{}.avif", stem)
    }
}

pub fn image_path(item_name: &str) -> String {
    format!("{}/{}", ITEM_IMAGE_DIR, image_filename(item_name))
}

/// Paths to try after `image_source()` fails to load.
pub fn image_fallback_paths() -> impl Iterator<Item = String> {
    IMAGE_FALLBACKS
        .iter()
        .map(|name| format!("{}/{}", ITEM_IMAGE_DIR, name))
}
