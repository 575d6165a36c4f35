//! HTTP client for the content store's read-only query endpoint.
//!
//! Wraps `reqwest` with typed error handling and response envelope
//! deserialization. The store exposes a query language over
//! `GET data/query/{dataset}?query=...`; parameters are passed as
//! JSON-encoded `$name` query pairs.
//!
//! Every fetch is attempted exactly once — there is no retry policy.
//! Recovery decisions (degrading a failed list fetch to an empty listing)
//! belong to the call sites, not this client.

use std::time::Duration;

use reqwest::{Client, Url};

use shopfront_core::AppConfig;

use crate::error::ContentError;
use crate::types::{QueryResult, RawProductRecord};

/// Listing projection: every product, with the image reference resolved to
/// a URL and the slug flattened to a plain string.
const LIST_QUERY: &str = r#"*[_type == "product"] {
  _id,
  name,
  price,
  "image": image.asset->url,
  discountPercent,
  isNew,
  colors,
  sizes,
  rating,
  "slug": slug.current
}"#;

/// Detail projection: one product by slug, including the description and
/// category fields the listing does not need.
const DETAIL_QUERY: &str = r#"*[_type == "product" && slug.current == $slug][0] {
  _id,
  name,
  price,
  description,
  "image": image.asset->url,
  category,
  discountPercent,
  isNew,
  colors,
  sizes,
  rating,
  "slug": slug.current
}"#;

/// Client for the content store's query API.
///
/// Use [`ContentClient::from_app_config`] in binaries or
/// [`ContentClient::with_base_url`] to point at a mock server in tests.
#[derive(Debug)]
pub struct ContentClient {
    client: Client,
    query_endpoint: Url,
    api_token: Option<String>,
}

impl ContentClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ContentError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ContentError> {
        Self::with_base_url(
            &config.content_base_url,
            &config.content_dataset,
            config.content_api_token.as_deref(),
            config.content_request_timeout_secs,
            &config.content_user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ContentError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL base.
    pub fn with_base_url(
        base_url: &str,
        dataset: &str,
        api_token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the query path rather than replacing the last path
        // segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let query_endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(&format!("data/query/{dataset}")))
            .map_err(|e| ContentError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            query_endpoint,
            api_token: api_token.map(str::to_owned),
        })
    }

    /// Fetches all catalog records for the product listing.
    ///
    /// May return an empty list; a `null` query result is treated as empty.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on network failure.
    /// - [`ContentError::UnexpectedStatus`] on any non-2xx response.
    /// - [`ContentError::Deserialize`] if the body is not a valid envelope.
    pub async fn fetch_list(&self) -> Result<Vec<RawProductRecord>, ContentError> {
        let url = self.query_url(LIST_QUERY, &[]);
        let body = self.request(url).await?;

        let envelope: QueryResult<Option<Vec<RawProductRecord>>> = serde_json::from_str(&body)
            .map_err(|e| ContentError::Deserialize {
                context: "product listing query".to_owned(),
                source: e,
            })?;

        let records = envelope.result.unwrap_or_default();
        tracing::debug!(count = records.len(), "fetched product listing");
        Ok(records)
    }

    /// Fetches the unique record whose slug matches, or `None` if no record
    /// exists. Absence is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// - [`ContentError::Http`] on network failure.
    /// - [`ContentError::UnexpectedStatus`] on any non-2xx response.
    /// - [`ContentError::Deserialize`] if the body is not a valid envelope.
    pub async fn fetch_one(&self, slug: &str) -> Result<Option<RawProductRecord>, ContentError> {
        // Query parameters are passed JSON-encoded, so a string value
        // arrives quoted.
        let slug_param = serde_json::to_string(slug).map_err(|e| ContentError::Deserialize {
            context: format!("encoding slug parameter \"{slug}\""),
            source: e,
        })?;
        let url = self.query_url(DETAIL_QUERY, &[("$slug", slug_param)]);
        let body = self.request(url).await?;

        let envelope: QueryResult<Option<RawProductRecord>> = serde_json::from_str(&body)
            .map_err(|e| ContentError::Deserialize {
                context: format!("product detail query (slug={slug})"),
                source: e,
            })?;

        tracing::debug!(slug, found = envelope.result.is_some(), "fetched product detail");
        Ok(envelope.result)
    }

    /// Builds the query URL for the given query string and `$name` parameters.
    fn query_url(&self, query: &str, params: &[(&str, String)]) -> Url {
        let mut url = self.query_endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("query", query);
            for (name, value) in params {
                pairs.append_pair(name, value);
            }
        }
        url
    }

    /// Issues the GET request and returns the response body on a 2xx status.
    async fn request(&self, url: Url) -> Result<String, ContentError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
