//! Filter panel state.
//!
//! The panel owns its visibility as explicit component-local state, and
//! carries the static option sets it renders. Selections are presentation
//! chrome only — they are not applied to the fetched listing.

use shopfront_core::FilterConfig;

/// UI state for the filter sidebar: a visibility toggle plus the option
/// sets loaded from the storefront file.
#[derive(Debug, Clone)]
pub struct FilterPanel {
    visible: bool,
    options: FilterConfig,
}

impl FilterPanel {
    /// Creates a hidden panel over the given options.
    #[must_use]
    pub fn new(options: FilterConfig) -> Self {
        Self {
            visible: false,
            options,
        }
    }

    /// Flips visibility (the mobile toggle button).
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Hides the panel (close button, backdrop tap).
    pub fn close(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn options(&self) -> &FilterConfig {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_core::PriceRange;

    fn make_options() -> FilterConfig {
        FilterConfig {
            categories: vec!["T-Shirts".to_string()],
            price: PriceRange { min: 50, max: 200 },
            colors: vec!["#000000".to_string()],
            sizes: vec!["Medium".to_string()],
            dress_styles: vec!["Casual".to_string()],
        }
    }

    #[test]
    fn starts_hidden() {
        let panel = FilterPanel::new(make_options());
        assert!(!panel.is_visible());
    }

    #[test]
    fn toggle_flips_visibility() {
        let mut panel = FilterPanel::new(make_options());
        panel.toggle();
        assert!(panel.is_visible());
        panel.toggle();
        assert!(!panel.is_visible());
    }

    #[test]
    fn close_is_idempotent() {
        let mut panel = FilterPanel::new(make_options());
        panel.toggle();
        panel.close();
        assert!(!panel.is_visible());
        panel.close();
        assert!(!panel.is_visible());
    }

    #[test]
    fn options_pass_through() {
        let panel = FilterPanel::new(make_options());
        assert_eq!(panel.options().price, PriceRange { min: 50, max: 200 });
        assert_eq!(panel.options().categories, vec!["T-Shirts"]);
    }
}
