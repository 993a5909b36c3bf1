//! Listing Utilities
//!
//! Helper functions for the menu-item table: search, sort, paginate.

use crate::models::MenuItem;

/// Rows shown per table page.
pub const PAGE_SIZE: usize = 10;

/// One derived page of the menu-item table.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Visible rows, at most [`PAGE_SIZE`]
    pub rows: Vec<MenuItem>,
    /// 1-based page number the rows belong to
    pub current_page: usize,
    /// Total pages in the filtered set (0 when nothing matches)
    pub total_pages: usize,
}

/// Derive the visible table page from the raw item snapshot.
///
/// `items` is `None` until the first fetch resolves. An item is kept iff its
/// name contains `query` case-insensitively; matching never looks at section
/// or description. Kept items are ordered newest-first by id, then sliced to
/// the requested 1-based page. A page past the end yields empty rows.
pub fn build_listing(items: Option<&[MenuItem]>, query: &str, page: usize) -> Listing {
    let page = page.max(1);
    let Some(items) = items else {
        return Listing { rows: Vec::new(), current_page: page, total_pages: 0 };
    };

    let needle = query.to_lowercase();
    let mut filtered: Vec<MenuItem> = items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    // Newest first; ids are unique so the order is total
    filtered.sort_by(|a, b| b.id.cmp(&a.id));

    let total_pages = filtered.len().div_ceil(PAGE_SIZE);
    let rows = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    Listing { rows, current_page: page, total_pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn make_item(id: u32, name: &str) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            section: "Entrees".to_string(),
            description: format!("Description for item {}", id),
            price: 9.99,
            dietary_restriction: "none".to_string(),
        }
    }

    #[test]
    fn test_empty_query_keeps_all_newest_first() {
        let items = vec![make_item(1, "Taco"), make_item(2, "Burrito")];

        let listing = build_listing(Some(&items), "", 1);

        assert_eq!(listing.rows.len(), 2);
        assert_eq!(listing.rows[0].id, 2); // Burrito
        assert_eq!(listing.rows[1].id, 1); // Taco
        assert_eq!(listing.current_page, 1);
        assert_eq!(listing.total_pages, 1);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = vec![
            make_item(1, "Carnitas Taco"),
            make_item(2, "Burrito"),
            make_item(3, "Fish TACOS"),
        ];

        let listing = build_listing(Some(&items), "taco", 1);

        assert_eq!(listing.rows.len(), 2);
        assert!(listing.rows.iter().all(|i| i.name.to_lowercase().contains("taco")));
    }

    #[test]
    fn test_filter_ignores_section_and_description() {
        // Descriptions all contain "item", sections all "Entrees"
        let items = vec![make_item(1, "Taco"), make_item(2, "Burrito")];

        assert!(build_listing(Some(&items), "item", 1).rows.is_empty());
        assert!(build_listing(Some(&items), "entrees", 1).rows.is_empty());
    }

    #[test]
    fn test_sort_is_strictly_descending_by_id() {
        let items: Vec<MenuItem> = [3, 1, 4, 2, 5].iter().map(|&id| make_item(id, "Dish")).collect();

        let listing = build_listing(Some(&items), "", 1);

        for pair in listing.rows.windows(2) {
            assert!(pair[0].id > pair[1].id);
        }
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<MenuItem> = (1..=25).map(|id| make_item(id, "Dish")).collect();

        let listing = build_listing(Some(&items), "", 3);

        assert_eq!(listing.rows.len(), 5);
        assert_eq!(listing.total_pages, 3);
        // Page 3 holds the 5 oldest items
        assert_eq!(listing.rows[0].id, 5);
        assert_eq!(listing.rows[4].id, 1);
    }

    #[test]
    fn test_full_pages_hold_page_size_rows() {
        let items: Vec<MenuItem> = (1..=25).map(|id| make_item(id, "Dish")).collect();

        assert_eq!(build_listing(Some(&items), "", 1).rows.len(), PAGE_SIZE);
        assert_eq!(build_listing(Some(&items), "", 2).rows.len(), PAGE_SIZE);
    }

    #[test]
    fn test_no_matches_yields_zero_pages() {
        let items = vec![make_item(1, "Taco"), make_item(2, "Burrito")];

        let listing = build_listing(Some(&items), "zz", 1);

        assert!(listing.rows.is_empty());
        assert_eq!(listing.total_pages, 0);
    }

    #[test]
    fn test_unloaded_items_yield_empty_listing() {
        let listing = build_listing(None, "taco", 1);

        assert!(listing.rows.is_empty());
        assert_eq!(listing.total_pages, 0);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let items: Vec<MenuItem> = (1..=5).map(|id| make_item(id, "Dish")).collect();

        let listing = build_listing(Some(&items), "", 4);

        assert!(listing.rows.is_empty());
        assert_eq!(listing.total_pages, 1);
        assert_eq!(listing.current_page, 4);
    }

    #[test]
    fn test_page_zero_is_clamped_to_one() {
        let items = vec![make_item(1, "Taco")];

        let listing = build_listing(Some(&items), "", 0);

        assert_eq!(listing.current_page, 1);
        assert_eq!(listing.rows.len(), 1);
    }

    #[test]
    fn test_same_inputs_same_output() {
        let items: Vec<MenuItem> = (1..=15).map(|id| make_item(id, "Dish")).collect();

        let first = build_listing(Some(&items), "dish", 2);
        let second = build_listing(Some(&items), "dish", 2);

        assert_eq!(first, second);
    }
}
