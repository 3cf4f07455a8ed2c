//! Request handlers.
//!
//! Each handler is a linear pipeline: fetch → (fetch again, for item detail) → map → respond.
//! Any failed fetch short-circuits to [`ApiError`].

use axum::{
    extract::{Path, RawQuery, State},
    Json,
};
use url::form_urlencoded;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::mapping::{map_item, map_search, PublicItemResponse, PublicSearchResponse};
use crate::upstream::{MarketplaceClient, SearchQuery};

pub const ROOT_BODY: &str = "Root!!";

/// `GET /`
pub async fn root() -> &'static str {
    ROOT_BODY
}

/// Inbound search query string. Values are forwarded without validation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub limit: Option<String>,
    pub q: Option<String>,
}

impl SearchParams {
    /// Parse a raw query string. Never fails: a repeated key has its values joined with `,`
    /// and unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "limit" => &mut params.limit,
                "q" => &mut params.q,
                _ => continue,
            };
            match slot {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value.into_owned()),
            }
        }
        params
    }
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        Self {
            limit: params.limit,
            q: params.q,
        }
    }
}

/// `GET /sites/MLA/search?limit=&q=`
pub async fn search(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<PublicSearchResponse>, ApiError> {
    let params = SearchParams::from_query(query.as_deref());
    let raw = state
        .client
        .search(&params.into())
        .await
        .map_err(ApiError::Search)?;

    let response = map_search(raw);
    tracing::debug!(items = response.items.len(), "Search results mapped");
    Ok(Json(response))
}

/// `GET /items/{id}`
pub async fn item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PublicItemResponse>, ApiError> {
    fetch_item_detail(&state.client, &id).await.map(Json)
}

/// Two-stage item pipeline.
///
/// The description fetch starts only after the item fetch succeeded, and its URL is built
/// from `id`, not from the item payload. A failure at either stage discards the partial item.
pub async fn fetch_item_detail(
    client: &MarketplaceClient,
    id: &str,
) -> Result<PublicItemResponse, ApiError> {
    let raw = client.item(id).await.map_err(ApiError::Item)?;
    let detail = map_item(raw);

    let description = client.description(id).await.map_err(ApiError::Description)?;

    Ok(PublicItemResponse::new(
        detail.with_description(description.plain_text.unwrap_or_default()),
    ))
}
