//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Directory served under `/images` when `SITE_IMAGES_DIR` is unset
pub const DEFAULT_IMAGES_DIR: &str = "public/images";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint that receives forwarded leads as JSON
    /// Example: https://inbox.example.com/api/messages
    pub lead_inbox_url: Option<String>,

    /// Bearer token sent to the lead inbox
    pub lead_inbox_token: Option<String>,

    /// Directory of catalog images
    pub images_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            lead_inbox_url: non_empty(std::env::var("LEAD_INBOX_URL").ok()),
            lead_inbox_token: non_empty(std::env::var("LEAD_INBOX_TOKEN").ok()),
            images_dir: non_empty(std::env::var("SITE_IMAGES_DIR").ok()),
        }
    }

    /// Check if leads are forwarded to an inbox
    pub fn has_lead_inbox(&self) -> bool {
        self.lead_inbox_url.is_some()
    }

    /// Check if the inbox token is configured
    pub fn has_lead_inbox_token(&self) -> bool {
        self.lead_inbox_token.is_some()
    }

    /// Images directory, falling back to `public/images`
    pub fn images_dir(&self) -> &str {
        self.images_dir.as_deref().unwrap_or(DEFAULT_IMAGES_DIR)
    }
}

/// Blank values (`LEAD_INBOX_URL=` in `.env`) count as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
