//! Wire types for the content store's query endpoint.
//!
//! ## Observed shape
//!
//! Query responses arrive in a `{"result": ...}` envelope: an array of
//! records for list queries, a single record or `null` for `[0]`-style
//! single-record queries. A `null` list result is treated as empty.
//!
//! ### Optional fields
//! Only `_id`, `name`, and `price` are reliably present. Everything else —
//! description, image URL, category, `discountPercent`, `isNew`, colors,
//! sizes, rating, slug — may be `null` or missing on partially-authored
//! records, so every such field carries `#[serde(default)]`. Defaulting to
//! render-ready values happens downstream in the view-model builder, not
//! here; these types pass absence through as `Option`/empty.
//!
//! ### `discountPercent`
//! A percentage in `[0, 100]` describing how far the current `price` sits
//! *below* the original price. The original ("old") price is never stored;
//! it is always recomputed at presentation time.
//!
//! ### `image`
//! The projection resolves the image asset reference to a URL string, so
//! no asset indirection survives into these types. Records without an
//! image render with a placeholder downstream.

use serde::Deserialize;

/// Envelope wrapping every query response.
#[derive(Debug, Deserialize)]
pub struct QueryResult<T> {
    pub result: T,
}

/// A raw product record as returned by the content store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProductRecord {
    /// Content-store document ID.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display name of the product.
    pub name: String,

    /// Current (already discounted) price in whole currency units.
    pub price: f64,

    /// Plain-text product description. Only projected by the detail query.
    #[serde(default)]
    pub description: Option<String>,

    /// Resolved image URL. Absent records render a placeholder.
    #[serde(default)]
    pub image: Option<String>,

    /// Catalog category string. Only projected by the detail query.
    #[serde(default)]
    pub category: Option<String>,

    /// Percent the current price sits below the original price, in `[0, 100]`.
    /// Absent or zero means no discount.
    #[serde(default)]
    pub discount_percent: Option<f64>,

    /// New-arrival flag set by the content editors.
    #[serde(default)]
    pub is_new: Option<bool>,

    /// Available color names, in authoring order.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Available sizes, in authoring order.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Star rating in `[0, 5]`; half steps are meaningful.
    #[serde(default)]
    pub rating: Option<f64>,

    /// URL-safe unique identifier used for detail routing.
    #[serde(default)]
    pub slug: Option<String>,
}
