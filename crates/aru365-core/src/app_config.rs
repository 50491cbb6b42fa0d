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
    pub catalog_path: PathBuf,
    pub snapshot_path: PathBuf,
    /// Canonical site origin without a trailing slash, e.g. `"https://aru365.com"`.
    pub site_url: String,
    /// Marketplace key. `None` disables live data entirely.
    pub viator_api_key: Option<String>,
    pub viator_api_base_url: String,
    pub viator_request_timeout_secs: u64,
    /// Category-level booking destination (`VIATOR_ARUBA_URL` override or default).
    pub viator_destination_url: String,
    pub viator_partner_id: String,
    pub viator_affiliate_id: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("catalog_path", &self.catalog_path)
            .field("snapshot_path", &self.snapshot_path)
            .field("site_url", &self.site_url)
            .field(
                "viator_api_key",
                &self.viator_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("viator_api_base_url", &self.viator_api_base_url)
            .field(
                "viator_request_timeout_secs",
                &self.viator_request_timeout_secs,
            )
            .field("viator_destination_url", &self.viator_destination_url)
            .field("viator_partner_id", &self.viator_partner_id)
            .field("viator_affiliate_id", &self.viator_affiliate_id)
            .finish()
    }
}
