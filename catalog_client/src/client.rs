use bazaar::{Hero, HeroId, Item, ItemId};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{extract_items, CatalogError, ItemQuery, ItemSource};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Upper bound on the number of items requested, large enough to get the whole catalog.
const ITEM_LIMIT: u32 = 1000;

/// Client for the items/heroes catalog API.
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    pub fn fetch_item(&self, id: ItemId) -> Result<Item, CatalogError> {
        let body = self.get_json(&format!("{}/items/{}", self.base_url, id), &[])?;
        Ok(serde_json::from_value(body)?)
    }

    #[instrument(skip(self))]
    pub fn fetch_heroes(&self) -> Result<Vec<Hero>, CatalogError> {
        let body = self.get_json(&format!("{}/heroes/", self.base_url), &[])?;
        Ok(serde_json::from_value(body)?)
    }

    #[instrument(skip(self))]
    pub fn fetch_hero(&self, id: HeroId) -> Result<Hero, CatalogError> {
        let body = self.get_json(&format!("{}/heroes/{}", self.base_url, id), &[])?;
        Ok(serde_json::from_value(body)?)
    }

    fn get_json(&self, url: &str, query: &[(&str, String)]) -> Result<Value, CatalogError> {
        debug!(url, "Sending request to catalog");
        let response = self.http.get(url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.text() {
                Ok(body) => error_message(&body),
                Err(err) => err.to_string(),
            };
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }
        debug!(status = status.as_u16(), "Received successful response");
        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl ItemSource for CatalogClient {
    #[instrument(skip(self))]
    fn fetch_items(&self, query: &ItemQuery) -> Result<Vec<Item>, CatalogError> {
        let body = self.get_json(&format!("{}/items/", self.base_url), &query_pairs(query))?;
        extract_items(body)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub(crate) fn query_pairs(query: &ItemQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(hero_id) = query.hero_id {
        pairs.push(("hero_id", hero_id.to_string()));
    }
    if let Some(size) = query.size.and_then(|s| s.as_wire_str()) {
        pairs.push(("size", size.to_string()));
    }
    if let Some(item_type) = &query.item_type {
        pairs.push(("type", item_type.clone()));
    }
    pairs.push(("limit", ITEM_LIMIT.to_string()));
    pairs
}

// FastAPI reports errors as {"detail": ...}; anything else is passed through verbatim.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(detail) => detail.to_string(),
            None => body.to_string(),
        },
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use bazaar::Size;

    use super::*;

    #[test]
    fn client_creation() {
        let client = CatalogClient::default();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let client = CatalogClient::new("http://bazaar.example/api/");
        assert_eq!(client.base_url(), "http://bazaar.example/api");
    }

    #[test]
    fn query_always_asks_for_the_whole_catalog() {
        assert_eq!(
            query_pairs(&ItemQuery::default()),
            vec![("limit", "1000".to_string())]
        );
    }

    #[test]
    fn query_with_filters() {
        let query = ItemQuery {
            hero_id: Some(3),
            size: Some(Size::Medium),
            item_type: Some("weapon".to_string()),
        };
        assert_eq!(
            query_pairs(&query),
            vec![
                ("hero_id", "3".to_string()),
                ("size", "medium".to_string()),
                ("type", "weapon".to_string()),
                ("limit", "1000".to_string()),
            ]
        );
    }

    #[test]
    fn unknown_size_is_not_sent() {
        let query = ItemQuery {
            size: Some(Size::Unknown),
            ..Default::default()
        };
        assert_eq!(query_pairs(&query).len(), 1);
    }

    #[test]
    fn error_message_prefers_detail() {
        assert_eq!(error_message(r#"{"detail": "Item not found"}"#), "Item not found");
        assert_eq!(
            error_message(r#"{"detail": [{"loc": ["query", "limit"]}]}"#),
            r#"[{"loc":["query","limit"]}]"#
        );
    }

    #[test]
    fn error_message_falls_back_to_the_body() {
        assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_message(r#"{"error": "boom"}"#), r#"{"error": "boom"}"#);
        assert_eq!(error_message(""), "");
    }

    #[test]
    #[ignore = "requires a catalog server on localhost:8000"]
    fn live_heroes() {
        let client = CatalogClient::default();
        let heroes = client.fetch_heroes().unwrap();
        assert!(!heroes.is_empty());
        let hero = client.fetch_hero(heroes[0].id).unwrap();
        assert_eq!(hero, heroes[0]);
    }

    #[test]
    #[ignore = "requires a catalog server on localhost:8000"]
    fn live_catalog() {
        let client = CatalogClient::default();
        let items = client.fetch_items(&ItemQuery::default()).unwrap();
        assert!(!items.is_empty());
        let item = client.fetch_item(items[0].id).unwrap();
        assert_eq!(item.id, items[0].id);
    }
}
