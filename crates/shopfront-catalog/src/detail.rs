//! Single-product detail assembly.

use serde::Serialize;

use shopfront_content::RawProductRecord;

use crate::pricing;
use crate::rating::StarRating;

/// Outcome of assembling a detail view from a single-record fetch.
///
/// `NotFound` is a terminal render state with no further transitions — an
/// unknown slug is a normal outcome, not an error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProductDetail {
    Found(DetailView),
    NotFound,
}

impl ProductDetail {
    /// Maps a single-record fetch result into the detail state.
    #[must_use]
    pub fn from_fetch(record: Option<RawProductRecord>) -> Self {
        match record {
            Some(record) => Self::Found(DetailView::from_raw(record)),
            None => Self::NotFound,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Render-ready single-product view: the listing derivations plus the
/// fields only the detail page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub old_price: Option<f64>,
    /// Defaulted to the empty string when absent.
    pub description: String,
    pub image: Option<String>,
    pub discount_percent: f64,
    /// Options for the purchase-options sub-component; defaulted to empty
    /// when absent so that component never sees a missing sequence.
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub rating: f64,
    pub slug: String,
}

impl DetailView {
    /// Builds the detail view: same price/rating derivations as the
    /// listing, plus colors/sizes/description passthrough with defaults.
    #[must_use]
    pub fn from_raw(record: RawProductRecord) -> Self {
        let old_price = pricing::original_price(record.price, record.discount_percent);
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            old_price,
            description: record.description.unwrap_or_default(),
            image: record.image,
            discount_percent: record.discount_percent.unwrap_or(0.0),
            colors: record.colors,
            sizes: record.sizes,
            rating: record.rating.unwrap_or(0.0),
            slug: record.slug.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn stars(&self) -> StarRating {
        StarRating::from_score(self.rating)
    }

    #[must_use]
    pub fn price_label(&self) -> String {
        pricing::dollars(self.price)
    }

    #[must_use]
    pub fn old_price_label(&self) -> Option<String> {
        self.old_price.map(pricing::dollars)
    }

    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        pricing::badge(self.price, self.old_price, self.discount_percent)
    }

    /// Raw score label shown next to the stars, e.g. `"(3.5/5)"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("({}/5)", self.rating)
    }
}
