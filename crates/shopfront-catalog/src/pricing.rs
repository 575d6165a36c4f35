//! Price and discount derivation.
//!
//! The content store keeps the *discounted* price; the pre-discount
//! ("old") price is never stored and is always recomputed here.
//! `discount_percent` is the percent the current price sits below the
//! original, so the original is recovered by scaling back up:
//! `price * (100 + discount_percent) / 100`.

/// Derives the pre-discount price from the current price.
///
/// Returns `None` when `discount_percent` is absent or zero (no discount).
/// The result is left unrounded; display rounding happens in the label
/// helpers only. Out-of-range discounts are not validated here — the
/// content-store schema owns that bound.
#[must_use]
pub fn original_price(price: f64, discount_percent: Option<f64>) -> Option<f64> {
    match discount_percent {
        Some(d) if d != 0.0 => Some(price * (100.0 + d) / 100.0),
        _ => None,
    }
}

/// Formats an amount as a whole-currency label, e.g. `"$120"`.
///
/// Rounds to zero decimal places, half away from zero.
#[must_use]
pub fn dollars(amount: f64) -> String {
    format!("${}", amount.round())
}

/// The discount badge, e.g. `"-20%"`.
///
/// Present only when an old price exists and is numerically greater than
/// the current price; a zero-price record with a discount gets no badge.
#[must_use]
pub fn badge(price: f64, old_price: Option<f64>, discount_percent: f64) -> Option<String> {
    match old_price {
        Some(old) if old > price => Some(format!("-{discount_percent}%")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_price_absent_without_discount() {
        assert_eq!(original_price(50.0, None), None);
    }

    #[test]
    fn original_price_absent_with_zero_discount() {
        assert_eq!(original_price(50.0, Some(0.0)), None);
    }

    #[test]
    fn original_price_scales_back_up() {
        // price=100, discountPercent=20 -> oldPrice=120
        assert_eq!(original_price(100.0, Some(20.0)), Some(120.0));
    }

    #[test]
    fn original_price_exceeds_price_for_positive_discount() {
        for d in [1.0, 12.5, 50.0, 100.0] {
            let old = original_price(80.0, Some(d)).expect("discounted record has an old price");
            assert!(old > 80.0, "old price {old} must exceed price for d={d}");
        }
    }

    #[test]
    fn original_price_monotonic_in_discount() {
        let low = original_price(100.0, Some(10.0)).unwrap();
        let high = original_price(100.0, Some(30.0)).unwrap();
        assert!(high > low);
    }

    #[test]
    fn original_price_not_rounded_internally() {
        // 99 * 1.15 = 113.85 exactly; no rounding before display.
        let old = original_price(99.0, Some(15.0)).unwrap();
        assert!((old - 113.85).abs() < 1e-9);
    }

    #[test]
    fn dollars_rounds_to_whole_units() {
        assert_eq!(dollars(120.0), "$120");
        assert_eq!(dollars(113.85), "$114");
        assert_eq!(dollars(113.4), "$113");
    }

    #[test]
    fn badge_present_when_old_price_exceeds_price() {
        assert_eq!(badge(100.0, Some(120.0), 20.0).as_deref(), Some("-20%"));
    }

    #[test]
    fn badge_absent_without_old_price() {
        assert_eq!(badge(50.0, None, 0.0), None);
    }

    #[test]
    fn badge_absent_when_old_price_not_greater() {
        // A zero-price record scales to a zero old price; no badge.
        assert_eq!(badge(0.0, Some(0.0), 20.0), None);
    }
}
