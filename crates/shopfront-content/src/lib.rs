pub mod client;
pub mod error;
pub mod types;

pub use client::ContentClient;
pub use error::ContentError;
pub use types::{QueryResult, RawProductRecord};
