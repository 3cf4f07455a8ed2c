//! Search response mapping.

use crate::mapping::category::{category_values, resolve_category};
use crate::mapping::types::{Author, PublicItem, PublicSearchResponse};
use crate::upstream::RawSearchResponse;

/// Map a raw search response into the public schema.
///
/// `categories` is a parallel array: exactly one entry per item, in input order, with no
/// deduplication. A missing `results` list maps to no items.
pub fn map_search(raw: RawSearchResponse) -> PublicSearchResponse {
    let RawSearchResponse {
        results,
        filters,
        available_filters,
    } = raw;
    let values = category_values(filters.as_deref(), available_filters.as_deref());

    let (categories, items) = results
        .unwrap_or_default()
        .into_iter()
        .map(|result| {
            let category = resolve_category(result.category_id.as_ref(), values);
            (category, PublicItem::from(result))
        })
        .unzip();

    PublicSearchResponse {
        author: Author::default(),
        categories,
        items,
    }
}
