//! Client-facing response schema.
//!
//! Absent optional fields are omitted from the JSON output rather than emitted as `null`.

use serde::{Deserialize, Serialize};

use crate::mapping::price::PublicPrice;
use crate::upstream::{CategoryId, RawSearchResult};

/// Author block attached to every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub lastname: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Hermes".to_string(),
            lastname: "Echavarría".to_string(),
        }
    }
}

/// A listing as shown in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub price: PublicPrice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,
}

impl From<RawSearchResult> for PublicItem {
    /// Projects the fixed field subset; the picture is the thumbnail.
    fn from(result: RawSearchResult) -> Self {
        Self {
            id: result.id,
            title: result.title,
            price: PublicPrice::from_raw(result.currency_id, result.price),
            picture: result.thumbnail,
            condition: result.condition,
            free_shipping: result.shipping.and_then(|shipping| shipping.free_shipping),
        }
    }
}

/// A listing as shown on the item page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItemDetail {
    #[serde(flatten)]
    pub item: PublicItem,
    pub sold_quantity: i64,
    pub description: String,
    /// Raw category id, not the resolved name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

impl PublicItemDetail {
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicSearchResponse {
    pub author: Author,
    /// One entry per item, same order; `None` when the listing had no category id.
    pub categories: Vec<Option<String>>,
    pub items: Vec<PublicItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicItemResponse {
    pub author: Author,
    pub item: PublicItemDetail,
}

impl PublicItemResponse {
    pub fn new(item: PublicItemDetail) -> Self {
        Self {
            author: Author::default(),
            item,
        }
    }
}
