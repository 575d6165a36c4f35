//! Full listing assembly: raw records through the builder and paginator to
//! one render-ready page.

use serde::Serialize;

use shopfront_content::RawProductRecord;

use crate::paginator::Paginator;
use crate::view_model::{build_listing, DisplayRecord};

/// One page of the catalog, plus the pagination facts the chrome renders.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub items: Vec<DisplayRecord>,
    /// The page actually presented (requested page after clamping).
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// Bounds for the "Showing X-Y of Z Products" line; absent when empty.
    pub showing: Option<ShowingRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub from: usize,
    pub to: usize,
}

/// Builds the requested catalog page from freshly fetched records.
///
/// View models are recomputed on every call — nothing is cached between
/// fetches. The requested page is clamped by the paginator, so callers can
/// pass whatever a query string held.
#[must_use]
pub fn assemble_page(
    records: Vec<RawProductRecord>,
    requested_page: usize,
    page_size: usize,
) -> CatalogPage {
    let listing = build_listing(records);
    let total_items = listing.len();

    let mut paginator = Paginator::new(page_size);
    paginator.set_page(requested_page, total_items);

    let items = paginator.visible_slice(&listing).to_vec();
    let showing = paginator
        .showing_range(total_items)
        .map(|(from, to)| ShowingRange { from, to });

    CatalogPage {
        items,
        page: paginator.current_page(),
        page_size: paginator.page_size(),
        total_pages: paginator.total_pages(total_items),
        total_items,
        showing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_records(count: usize) -> Vec<RawProductRecord> {
        (0..count)
            .map(|i| {
                serde_json::from_value(serde_json::json!({
                    "_id": format!("prod-{i}"),
                    "name": format!("Product {i}"),
                    "price": 100.0,
                    "slug": format!("product-{i}")
                }))
                .expect("record fixture")
            })
            .collect()
    }

    #[test]
    fn first_page_of_twenty() {
        let page = assemble_page(make_records(20), 1, 9);
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_items, 20);
        assert_eq!(page.showing, Some(ShowingRange { from: 1, to: 9 }));
        assert_eq!(page.items[0].id, "prod-0");
    }

    #[test]
    fn last_page_is_short() {
        let page = assemble_page(make_records(20), 3, 9);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.showing, Some(ShowingRange { from: 19, to: 20 }));
    }

    #[test]
    fn out_of_range_request_clamps_to_last_page() {
        let page = assemble_page(make_records(20), 42, 9);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn page_zero_request_clamps_to_first() {
        let page = assemble_page(make_records(20), 0, 9);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn empty_listing_yields_empty_page() {
        let page = assemble_page(Vec::new(), 1, 9);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
        assert_eq!(page.showing, None);
    }
}
