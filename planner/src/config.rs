use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use bazaar::{HeroId, DEFAULT_NUM_SLOTS, MAX_NUM_SLOTS};
use clap::Args;
use catalog_client::{CatalogClient, ItemQuery, ItemSource, ItemsFile, DEFAULT_BASE_URL};
use serde::Deserialize;

/// Settings for one planning session.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlannerConfig {
    #[serde(default = "default_num_slots")]
    pub num_slots: usize,
    /// Only offer items of this hero.
    #[serde(default)]
    pub hero_id: Option<HeroId>,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the items come from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogConfig {
    Api { base_url: String },
    File { path: PathBuf },
}

fn default_num_slots() -> usize {
    DEFAULT_NUM_SLOTS
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig::Api {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            num_slots: DEFAULT_NUM_SLOTS,
            hero_id: None,
            catalog: CatalogConfig::default(),
        }
    }
}

impl PlannerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file '{}'", path.display()))?;
        let config: PlannerConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_NUM_SLOTS).contains(&self.num_slots) {
            bail!(
                "num_slots must be between 1 and {}, got {}",
                MAX_NUM_SLOTS,
                self.num_slots
            );
        }
        if let CatalogConfig::Api { base_url } = &self.catalog {
            if base_url.trim().is_empty() {
                bail!("The catalog base_url must not be empty");
            }
        }
        Ok(())
    }

    pub fn item_query(&self) -> ItemQuery {
        ItemQuery {
            hero_id: self.hero_id,
            ..Default::default()
        }
    }

    pub fn item_source(&self) -> Box<dyn ItemSource> {
        match &self.catalog {
            CatalogConfig::Api { base_url } => Box::new(CatalogClient::new(base_url.as_str())),
            CatalogConfig::File { path } => Box::new(ItemsFile::new(path.clone())),
        }
    }
}

/// Command line arguments shared by the planner frontends. They override the config file.
#[derive(Args, Clone, Debug, Default)]
pub struct ConfigArgs {
    /// Path to a config JSON file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Base URL of the catalog API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Read the catalog from a JSON file instead of the API
    #[arg(long, conflicts_with = "api_url")]
    pub catalog_file: Option<PathBuf>,

    /// Only offer items of this hero
    #[arg(long)]
    pub hero_id: Option<HeroId>,

    /// Number of slots on the board
    #[arg(short, long)]
    pub num_slots: Option<usize>,
}

impl ConfigArgs {
    pub fn planner_config(&self) -> anyhow::Result<PlannerConfig> {
        let mut config = match &self.config {
            Some(path) => PlannerConfig::load(path)?,
            None => PlannerConfig::default(),
        };
        if let Some(base_url) = &self.api_url {
            config.catalog = CatalogConfig::Api {
                base_url: base_url.clone(),
            };
        }
        if let Some(path) = &self.catalog_file {
            config.catalog = CatalogConfig::File { path: path.clone() };
        }
        if self.hero_id.is_some() {
            config.hero_id = self.hero_id;
        }
        if let Some(num_slots) = self.num_slots {
            config.num_slots = num_slots;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn load_str(contents: &str) -> anyhow::Result<PlannerConfig> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        PlannerConfig::load(file.path())
    }

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(load_str("{}").unwrap(), PlannerConfig::default());
    }

    #[test]
    fn file_catalog() {
        let config =
            load_str(r#"{"num_slots": 12, "hero_id": 2, "catalog": {"file": {"path": "items.json"}}}"#)
                .unwrap();
        assert_eq!(config.num_slots, 12);
        assert_eq!(config.item_query().hero_id, Some(2));
        assert_eq!(
            config.catalog,
            CatalogConfig::File {
                path: PathBuf::from("items.json")
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load_str(r#"{"num_slots": 0}"#).is_err());
        assert!(load_str(r#"{"num_slots": 65}"#).is_err());
        assert!(load_str(r#"{"catalog": {"api": {"base_url": " "}}}"#).is_err());
        assert!(load_str(r#"{"slots": 10}"#).is_err());
    }

    #[test]
    fn arguments_override_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"num_slots": 12, "hero_id": 2}"#).unwrap();
        let args = ConfigArgs {
            config: Some(file.path().to_path_buf()),
            catalog_file: Some(PathBuf::from("items.json")),
            num_slots: Some(8),
            ..Default::default()
        };
        let config = args.planner_config().unwrap();
        assert_eq!(config.num_slots, 8);
        assert_eq!(config.hero_id, Some(2));
        assert_eq!(
            config.catalog,
            CatalogConfig::File {
                path: PathBuf::from("items.json")
            }
        );
    }

    #[test]
    fn overridden_values_are_validated() {
        let args = ConfigArgs {
            num_slots: Some(100),
            ..Default::default()
        };
        assert!(args.planner_config().is_err());
    }
}
