/// Window geometry sampled on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_y: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    /// True once the bottom of the viewport is within `threshold` of the end
    /// of the document.
    pub fn near_bottom(&self, threshold: f64) -> bool {
        self.viewport_height + self.scroll_y >= self.document_height - threshold
    }
}

/// Scroll trigger for loading the next page.
pub fn should_fetch(metrics: &ScrollMetrics, threshold: f64, loading: bool) -> bool {
    !loading && metrics.near_bottom(threshold)
}
