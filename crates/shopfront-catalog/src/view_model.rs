//! Listing view-model construction from raw catalog records.
//!
//! This is the sole point where absent optional fields are normalized to
//! render-ready defaults; the raw wire types pass absence through
//! untouched, and nothing downstream re-checks for it.

use serde::{Deserialize, Serialize};

use shopfront_content::RawProductRecord;

use crate::pricing;
use crate::rating::StarRating;

/// A render-ready product card for the listing grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Content-store document ID.
    pub id: String,
    pub name: String,
    /// Current price in whole currency units.
    pub price: f64,
    /// Recomputed pre-discount price; absent when the record carries no
    /// discount.
    pub old_price: Option<f64>,
    /// Resolved image URL; absent records render a placeholder.
    pub image: Option<String>,
    /// Defaulted to 0 when absent.
    pub discount_percent: f64,
    /// Defaulted to 0 when absent.
    pub rating: f64,
    /// Defaulted to the empty string when absent.
    pub slug: String,
}

impl DisplayRecord {
    /// Builds the display record from a raw record: derives `old_price`,
    /// defaults the optional fields, and passes everything else through.
    ///
    /// Pure and idempotent — rebuilding from the same raw record always
    /// yields the same output.
    #[must_use]
    pub fn from_raw(record: RawProductRecord) -> Self {
        let old_price = pricing::original_price(record.price, record.discount_percent);
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            old_price,
            image: record.image,
            discount_percent: record.discount_percent.unwrap_or(0.0),
            rating: record.rating.unwrap_or(0.0),
            slug: record.slug.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn stars(&self) -> StarRating {
        StarRating::from_score(self.rating)
    }

    /// Zero-decimal price label, e.g. `"$145"`.
    #[must_use]
    pub fn price_label(&self) -> String {
        pricing::dollars(self.price)
    }

    /// Zero-decimal old-price label, shown struck through next to the price.
    #[must_use]
    pub fn old_price_label(&self) -> Option<String> {
        self.old_price.map(pricing::dollars)
    }

    /// The `-{percent}%` badge; present only when the old price exists and
    /// exceeds the current price.
    #[must_use]
    pub fn badge_label(&self) -> Option<String> {
        pricing::badge(self.price, self.old_price, self.discount_percent)
    }

    /// Rounded score label, e.g. `"4/5"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{}/5", self.rating.round())
    }

    /// Detail-page route for this record, e.g. `"/product/gradient-tee"`.
    #[must_use]
    pub fn detail_route(&self) -> String {
        format!("/product/{}", self.slug)
    }
}

/// Maps a fetched sequence element-wise into display records.
#[must_use]
pub fn build_listing(records: Vec<RawProductRecord>) -> Vec<DisplayRecord> {
    records.into_iter().map(DisplayRecord::from_raw).collect()
}
