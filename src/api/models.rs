use serde::Deserialize;

/// One photo listing as returned by the `/v2/list` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct ImageRecord {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub download_url: String,
}

impl ImageRecord {
    /// Height relative to width. Records without a usable width count as square.
    pub fn aspect_ratio(&self) -> f64 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f64 / self.width as f64
    }
}
