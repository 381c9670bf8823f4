use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct InnerTubeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_hl")]
    pub hl: String,
    #[serde(default = "default_gl")]
    pub gl: String,
    pub visitor_data: Option<String>,
    /// Raw browser cookie header. Enables authenticated requests when it carries `SAPISID`.
    pub cookie: Option<String>,
    pub data_sync_id: Option<String>,
    /// `http://`, `https://` or `socks5://` proxy URL.
    pub proxy: Option<String>,
    #[serde(default)]
    pub use_login_for_browse: bool,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://music.youtube.com".to_string()
}

fn default_hl() -> String {
    "en".to_string()
}

fn default_gl() -> String {
    "US".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for InnerTubeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            hl: default_hl(),
            gl: default_gl(),
            visitor_data: None,
            cookie: None,
            data_sync_id: None,
            proxy: None,
            use_login_for_browse: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaginationConfig {
    /// Hard cap on continuation fetches per iteration session.
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

fn default_max_steps() -> usize {
    50
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_steps: default_max_steps(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DiscoveryConfig {
    /// Upper bound on sub-queries in flight for one aggregation.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_seed_limit")]
    pub seed_limit: usize,
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,
    #[serde(default = "default_playlist_limit")]
    pub playlist_limit: usize,
}

fn default_concurrency() -> usize {
    5
}

fn default_seed_limit() -> usize {
    5
}

fn default_shuffle() -> bool {
    true
}

fn default_playlist_limit() -> usize {
    10
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
            seed_limit: default_seed_limit(),
            shuffle: default_shuffle(),
            playlist_limit: default_playlist_limit(),
        }
    }
}
