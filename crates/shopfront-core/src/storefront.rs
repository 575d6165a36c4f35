use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Static storefront presentation settings: the shop heading and the option
/// sets the filter panel renders.
///
/// The option sets describe what the panel *shows*; they are not applied to
/// the fetched product data. Wiring them into the listing query is a
/// deliberate non-feature of the current storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontFile {
    /// Heading shown above the listing, e.g. `"Casual"`.
    pub heading: String,
    pub filters: FilterConfig,
}

/// Option sets rendered by the filter panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Category shortcuts, e.g. `"T-Shirts"`, `"Jeans"`.
    pub categories: Vec<String>,
    pub price: PriceRange,
    /// Swatch colors as hex strings, e.g. `"#00C12B"`.
    pub colors: Vec<String>,
    /// Garment sizes, e.g. `"X-Small"` through `"4X-Large"`.
    pub sizes: Vec<String>,
    /// Dress style shortcuts, e.g. `"Casual"`, `"Formal"`.
    pub dress_styles: Vec<String>,
}

/// Inclusive price slider bounds, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Load and validate the storefront configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_storefront(path: &Path) -> Result<StorefrontFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StorefrontFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let storefront: StorefrontFile =
        serde_yaml::from_str(&content).map_err(ConfigError::StorefrontFileParse)?;

    validate_storefront(&storefront)?;

    Ok(storefront)
}

fn validate_storefront(storefront: &StorefrontFile) -> Result<(), ConfigError> {
    if storefront.heading.trim().is_empty() {
        return Err(ConfigError::Validation(
            "storefront heading must be non-empty".to_string(),
        ));
    }

    let price = &storefront.filters.price;
    if price.min > price.max {
        return Err(ConfigError::Validation(format!(
            "price range is inverted: min {} > max {}",
            price.min, price.max
        )));
    }

    validate_options("categories", &storefront.filters.categories)?;
    validate_options("colors", &storefront.filters.colors)?;
    validate_options("sizes", &storefront.filters.sizes)?;
    validate_options("dress_styles", &storefront.filters.dress_styles)?;

    Ok(())
}

fn validate_options(list_name: &str, options: &[String]) -> Result<(), ConfigError> {
    if options.is_empty() {
        return Err(ConfigError::Validation(format!(
            "filter list '{list_name}' must not be empty"
        )));
    }

    let mut seen = HashSet::new();
    for option in options {
        if option.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "filter list '{list_name}' contains an empty entry"
            )));
        }
        if !seen.insert(option.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate entry '{option}' in filter list '{list_name}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_storefront() -> StorefrontFile {
        StorefrontFile {
            heading: "Casual".to_string(),
            filters: FilterConfig {
                categories: vec!["T-Shirts".to_string(), "Jeans".to_string()],
                price: PriceRange { min: 50, max: 200 },
                colors: vec!["#00C12B".to_string(), "#F50606".to_string()],
                sizes: vec!["Small".to_string(), "Medium".to_string()],
                dress_styles: vec!["Casual".to_string(), "Formal".to_string()],
            },
        }
    }

    #[test]
    fn validate_accepts_valid_storefront() {
        assert!(validate_storefront(&make_storefront()).is_ok());
    }

    #[test]
    fn validate_rejects_blank_heading() {
        let mut storefront = make_storefront();
        storefront.heading = "   ".to_string();
        let err = validate_storefront(&storefront).unwrap_err();
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_inverted_price_range() {
        let mut storefront = make_storefront();
        storefront.filters.price = PriceRange { min: 300, max: 200 };
        let err = validate_storefront(&storefront).unwrap_err();
        assert!(err.to_string().contains("inverted"));
    }

    #[test]
    fn validate_accepts_degenerate_price_range() {
        let mut storefront = make_storefront();
        storefront.filters.price = PriceRange { min: 50, max: 50 };
        assert!(validate_storefront(&storefront).is_ok());
    }

    #[test]
    fn validate_rejects_empty_size_list() {
        let mut storefront = make_storefront();
        storefront.filters.sizes.clear();
        let err = validate_storefront(&storefront).unwrap_err();
        assert!(err.to_string().contains("sizes"));
    }

    #[test]
    fn validate_rejects_duplicate_category_case_insensitive() {
        let mut storefront = make_storefront();
        storefront.filters.categories.push("t-shirts".to_string());
        let err = validate_storefront(&storefront).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn validate_rejects_blank_color_entry() {
        let mut storefront = make_storefront();
        storefront.filters.colors.push("  ".to_string());
        let err = validate_storefront(&storefront).unwrap_err();
        assert!(err.to_string().contains("empty entry"));
    }

    #[test]
    fn storefront_yaml_roundtrip() {
        let yaml = r"
heading: Casual
filters:
  categories: [T-Shirts, Shorts]
  price:
    min: 50
    max: 200
  colors: ['#00C12B', '#000000']
  sizes: [Small, Large]
  dress_styles: [Casual, Gym]
";
        let storefront: StorefrontFile = serde_yaml::from_str(yaml).expect("parse yaml");
        assert_eq!(storefront.heading, "Casual");
        assert_eq!(storefront.filters.price, PriceRange { min: 50, max: 200 });
        assert_eq!(storefront.filters.categories.len(), 2);
        assert!(validate_storefront(&storefront).is_ok());
    }

    #[test]
    fn load_storefront_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("storefront.yaml");
        assert!(
            path.exists(),
            "storefront.yaml missing at {path:?} — required for this test"
        );
        let result = load_storefront(&path);
        assert!(result.is_ok(), "failed to load storefront.yaml: {result:?}");
        let storefront = result.unwrap();
        assert!(!storefront.heading.is_empty());
        assert!(!storefront.filters.colors.is_empty());
    }

    #[test]
    fn load_storefront_missing_file_is_io_error() {
        let result = load_storefront(Path::new("/nonexistent/storefront.yaml"));
        assert!(
            matches!(result, Err(ConfigError::StorefrontFileIo { .. })),
            "expected StorefrontFileIo, got: {result:?}"
        );
    }
}
