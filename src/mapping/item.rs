//! Item detail mapping.

use crate::mapping::types::{PublicItem, PublicItemDetail};
use crate::upstream::{RawItemDetail, RawPicture};

/// Map a raw item into the public detail schema, with an empty description.
///
/// The description is attached later with [`PublicItemDetail::with_description`] once the
/// second upstream call succeeds.
pub fn map_item(raw: RawItemDetail) -> PublicItemDetail {
    let RawItemDetail {
        summary,
        pictures,
        initial_quantity,
        available_quantity,
    } = raw;

    let category = summary.category_id.clone();
    let mut item = PublicItem::from(summary);
    if let Some(url) = first_picture(pictures.as_deref()) {
        item.picture = Some(url);
    }

    PublicItemDetail {
        item,
        sold_quantity: sold_quantity(initial_quantity, available_quantity),
        description: String::new(),
        category,
    }
}

/// Secure URL of the first picture, if there is one and it is non-empty.
fn first_picture(pictures: Option<&[RawPicture]>) -> Option<String> {
    pictures?
        .first()?
        .secure_url
        .clone()
        .filter(|url| !url.is_empty())
}

/// `initial - available`, or 0 when either count is missing.
///
/// Negative results are passed through unchanged.
pub fn sold_quantity(initial: Option<i64>, available: Option<i64>) -> i64 {
    match (initial, available) {
        (Some(initial), Some(available)) => initial.saturating_sub(available),
        _ => 0,
    }
}
