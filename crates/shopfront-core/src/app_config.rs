use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub storefront_path: PathBuf,
    pub content_base_url: String,
    pub content_dataset: String,
    pub content_api_token: Option<String>,
    pub content_request_timeout_secs: u64,
    pub content_user_agent: String,
    pub page_size: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("storefront_path", &self.storefront_path)
            .field("content_base_url", &self.content_base_url)
            .field("content_dataset", &self.content_dataset)
            .field(
                "content_api_token",
                &self.content_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "content_request_timeout_secs",
                &self.content_request_timeout_secs,
            )
            .field("content_user_agent", &self.content_user_agent)
            .field("page_size", &self.page_size)
            .finish()
    }
}
