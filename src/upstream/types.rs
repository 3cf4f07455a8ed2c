//! Raw payloads as returned by the marketplace API.
//!
//! Every field is optional: upstream shapes are not validated, and any field the proxy does
//! not consume is ignored during deserialization. A field of the wrong type decodes as `None`
//! and a list element of the wrong shape is skipped, so one odd listing never fails a request.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Response of `GET /sites/MLA/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default, deserialize_with = "lenient_list")]
    pub results: Option<Vec<RawSearchResult>>,
    /// Filters applied to the current search.
    #[serde(default, deserialize_with = "lenient_list")]
    pub filters: Option<Vec<RawFilter>>,
    /// Filters that could still be applied.
    #[serde(default, deserialize_with = "lenient_list")]
    pub available_filters: Option<Vec<RawFilter>>,
}

/// One listing in a search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchResult {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub currency_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub thumbnail: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub condition: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub shipping: Option<RawShipping>,
    #[serde(default, deserialize_with = "lenient")]
    pub category_id: Option<CategoryId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawShipping {
    #[serde(default, deserialize_with = "lenient")]
    pub free_shipping: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilter {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub values: Option<Vec<RawFilterValue>>,
}

/// A filter value; for the `category` filter this is an `{id, name}` pair.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFilterValue {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<CategoryId>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

/// Response of `GET /items/{id}`: the listing fields plus detail-only fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemDetail {
    #[serde(flatten)]
    pub summary: RawSearchResult,
    #[serde(default, deserialize_with = "lenient_list")]
    pub pictures: Option<Vec<RawPicture>>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub initial_quantity: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    pub available_quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPicture {
    #[serde(default, deserialize_with = "lenient")]
    pub secure_url: Option<String>,
}

/// Response of `GET /items/{id}/description`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDescription {
    #[serde(default, deserialize_with = "lenient")]
    pub plain_text: Option<String>,
}

/// Decode any value as `T`, or `None` when it has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode an array, skipping elements that are not a `T`.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Decode an integer count; whole-number floats such as `10.0` are accepted.
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    })
}

/// Opaque category identifier.
///
/// The API sends these as strings (`"MLA1055"`) but numeric ids are accepted too; both are
/// kept in their textual form so lookups compare like with like.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Integer(i64),
            Float(f64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(id) => Self(id),
            Repr::Integer(id) => Self(id.to_string()),
            Repr::Float(id) => Self(id.to_string()),
        })
    }
}

impl Serialize for CategoryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
