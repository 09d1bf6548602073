use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 8;
pub const DEFAULT_LOADING_DELAY_MS: u32 = 2000;

/// Settings of the catalog site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Cards per page in the packages listing
    pub page_size: usize,
    /// Artificial latency before results are revealed
    pub loading_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            loading_delay_ms: DEFAULT_LOADING_DELAY_MS,
        }
    }
}

impl SiteConfig {
    /// Parse overrides from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// A zero page size would make page counting meaningless.
    pub fn normalized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }
}
