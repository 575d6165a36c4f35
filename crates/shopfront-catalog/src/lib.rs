pub mod detail;
pub mod filter;
pub mod listing;
pub mod paginator;
pub mod pricing;
pub mod rating;
pub mod view_model;

pub use detail::{DetailView, ProductDetail};
pub use filter::FilterPanel;
pub use listing::{assemble_page, CatalogPage, ShowingRange};
pub use paginator::{Paginator, DEFAULT_PAGE_SIZE};
pub use rating::StarRating;
pub use view_model::{build_listing, DisplayRecord};
