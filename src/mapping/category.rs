//! Category name resolution from search filter metadata.

use crate::upstream::{CategoryId, RawFilter, RawFilterValue};

/// Id of the filter whose values are categories.
pub const CATEGORY_FILTER_ID: &str = "category";

/// Pick the category values for a search.
///
/// Applied `filters` win when non-empty; otherwise `available_filters` is used. The two lists
/// are never merged. Missing lists or a missing category filter give an empty slice.
pub fn category_values<'a>(
    filters: Option<&'a [RawFilter]>,
    available_filters: Option<&'a [RawFilter]>,
) -> &'a [RawFilterValue] {
    let source = match filters {
        Some(filters) if !filters.is_empty() => Some(filters),
        _ => available_filters,
    };

    source
        .and_then(|list| {
            list.iter()
                .find(|filter| filter.id.as_deref() == Some(CATEGORY_FILTER_ID))
        })
        .and_then(|filter| filter.values.as_deref())
        .unwrap_or(&[])
}

/// Resolve a category id to its display name, falling back to the id itself.
///
/// Only the first value with a matching id is considered; an empty name also falls back.
/// Returns `None` only when the listing carries no category id.
pub fn resolve_category(id: Option<&CategoryId>, values: &[RawFilterValue]) -> Option<String> {
    let id = id?;
    let name = values
        .iter()
        .find(|value| value.id.as_ref() == Some(id))
        .and_then(|value| value.name.as_deref())
        .filter(|name| !name.is_empty());

    Some(name.map_or_else(|| id.to_string(), str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(id: &str, name: &str) -> RawFilterValue {
        RawFilterValue {
            id: Some(CategoryId::from(id)),
            name: Some(name.to_string()),
        }
    }

    fn filter(id: &str, values: Vec<RawFilterValue>) -> RawFilter {
        RawFilter {
            id: Some(id.to_string()),
            values: Some(values),
        }
    }

    #[test]
    fn test_resolves_name_or_falls_back_to_id() {
        let values = [value("X", "Widgets")];
        assert_eq!(
            resolve_category(Some(&CategoryId::from("X")), &values),
            Some("Widgets".to_string())
        );
        assert_eq!(
            resolve_category(Some(&CategoryId::from("Y")), &values),
            Some("Y".to_string())
        );
        assert_eq!(resolve_category(None, &values), None);
    }

    #[test]
    fn test_empty_name_falls_back_to_id() {
        let values = [value("X", ""), value("X", "Later")];
        assert_eq!(
            resolve_category(Some(&CategoryId::from("X")), &values),
            Some("X".to_string())
        );
    }

    #[test]
    fn test_applied_filters_take_precedence() {
        let filters = vec![
            filter("condition", vec![value("new", "Nuevo")]),
            filter(CATEGORY_FILTER_ID, vec![value("X", "Applied")]),
        ];
        let available = vec![filter(CATEGORY_FILTER_ID, vec![value("X", "Available")])];

        let values = category_values(Some(filters.as_slice()), Some(available.as_slice()));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].name.as_deref(), Some("Applied"));
    }

    #[test]
    fn test_empty_filters_use_available_filters() {
        let available = vec![filter(CATEGORY_FILTER_ID, vec![value("X", "Available")])];

        let values = category_values(Some(&[][..]), Some(available.as_slice()));
        assert_eq!(values[0].name.as_deref(), Some("Available"));

        let values = category_values(None, Some(available.as_slice()));
        assert_eq!(values[0].name.as_deref(), Some("Available"));
    }

    #[test]
    fn test_lists_are_not_merged() {
        // applied filters without a category filter do not fall through to available ones
        let filters = vec![filter("condition", vec![value("new", "Nuevo")])];
        let available = vec![filter(CATEGORY_FILTER_ID, vec![value("X", "Available")])];
        assert!(category_values(Some(filters.as_slice()), Some(available.as_slice())).is_empty());
    }

    #[test]
    fn test_missing_everything() {
        assert!(category_values(None, None).is_empty());
    }
}
