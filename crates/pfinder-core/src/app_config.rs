use std::net::SocketAddr;

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

/// Settings for the search proxy server.
#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Rainforest API credential. Stays server-side; never serialized or logged.
    pub rainforest_api_key: String,
    pub provider_base_url: String,
    pub amazon_domain: String,
    pub provider_timeout_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("rainforest_api_key", &"[redacted]")
            .field("provider_base_url", &self.provider_base_url)
            .field("amazon_domain", &self.amazon_domain)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .finish()
    }
}

/// Settings for the terminal presenter.
#[derive(Debug, Clone)]
pub struct PresenterConfig {
    pub env: Environment,
    pub log_level: String,
    /// Base URL of the search proxy, e.g. `http://localhost:4000`.
    pub proxy_url: String,
    /// Number of leading results shown unlocked.
    pub free_results: usize,
}
