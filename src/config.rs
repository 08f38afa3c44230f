use crate::api::PICSUM_BASE_URL;
use serde::Deserialize;

/// What the masonry feed does once a page has come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub enum ExhaustionPolicy {
    /// Keep answering scroll triggers by re-requesting the empty page.
    #[default]
    KeepPolling,
    /// Refuse further fetches after the first empty page.
    StopLoading,
}

/// Gallery settings shared through context. Not persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub api_base: String,
    pub grid_page_size: u32,
    pub masonry_page_size: u32,
    pub thumbnail_size: u32,
    pub scroll_threshold_px: f64,
    pub exhaustion_policy: ExhaustionPolicy,
    pub min_column_width_px: f64,
    pub max_columns: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: PICSUM_BASE_URL.to_string(),
            grid_page_size: 10,
            masonry_page_size: 15,
            thumbnail_size: 300,
            scroll_threshold_px: 200.0,
            exhaustion_policy: ExhaustionPolicy::KeepPolling,
            min_column_width_px: 280.0,
            max_columns: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_feed_contract() {
        let config = GalleryConfig::default();
        assert_eq!(config.api_base, "https://picsum.photos");
        assert_eq!(config.grid_page_size, 10);
        assert_eq!(config.masonry_page_size, 15);
        assert_eq!(config.thumbnail_size, 300);
        assert_eq!(config.scroll_threshold_px, 200.0);
        assert_eq!(config.exhaustion_policy, ExhaustionPolicy::KeepPolling);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"masonry_page_size": 30, "exhaustion_policy": "StopLoading"}"#)
                .unwrap();
        assert_eq!(config.masonry_page_size, 30);
        assert_eq!(config.exhaustion_policy, ExhaustionPolicy::StopLoading);
        assert_eq!(config.grid_page_size, 10);
        assert_eq!(config.max_columns, 4);
    }
}
