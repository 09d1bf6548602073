use contracts::shared::site_config::SiteConfig;

const SITE_CONFIG_JSON: &str = include_str!("../site_config.json");

/// Site settings bundled with the build; a broken file falls back to defaults.
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::error!("site_config.json is invalid, using defaults: {:#}", e);
            SiteConfig::default()
        }
    }
}
