use std::path::PathBuf;

/// Process-wide settings sourced from the environment.
///
/// Everything here has a default; the two YAML paths point at the provider
/// list and the traveler profile, and the remaining fields tune the HTTP
/// renderer.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub providers_path: PathBuf,
    pub profile_path: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
    pub inter_provider_delay_ms: u64,
}
