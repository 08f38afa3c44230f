use crate::api::{FeedError, ImageRecord};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use once_cell::sync::Lazy;
use std::ops::Deref;
use std::rc::Rc;
use tracing::{debug, warn};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

pub const PICSUM_BASE_URL: &str = "https://picsum.photos";

/// Query for one page of the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedRequest {
    /// `None` leaves the page up to the server (it serves page 1).
    pub page: Option<u32>,
    pub limit: u32,
}

impl FeedRequest {
    /// A single fixed page with no page parameter.
    pub fn first(limit: u32) -> Self {
        Self { page: None, limit }
    }

    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            page: Some(page),
            limit,
        }
    }

    fn query_string(&self) -> String {
        match self.page {
            Some(page) => format!("page={}&limit={}", page, self.limit),
            None => format!("limit={}", self.limit),
        }
    }
}

/// Source of image pages. The gallery views talk to the feed only through
/// this trait.
pub trait ImageFeed {
    fn fetch_page<'a>(
        &'a self,
        request: &'a FeedRequest,
    ) -> LocalBoxFuture<'a, Result<Vec<ImageRecord>, FeedError>>;
}

/// Shared feed handed to the views through context.
#[derive(Clone)]
pub struct FeedHandle(Rc<dyn ImageFeed>);

impl FeedHandle {
    pub fn new(feed: impl ImageFeed + 'static) -> Self {
        Self(Rc::new(feed))
    }
}

impl<F: ImageFeed + 'static> From<Rc<F>> for FeedHandle {
    fn from(feed: Rc<F>) -> Self {
        Self(feed)
    }
}

impl Deref for FeedHandle {
    type Target = dyn ImageFeed;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Square-cropped rendition of a photo, addressed by its id.
pub fn thumbnail_url(base_url: &str, id: &str, width: u32, height: u32) -> String {
    format!(
        "{}/id/{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(id),
        width,
        height
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct PicsumClient {
    base_url: String,
}

impl PicsumClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn list_url(&self, request: &FeedRequest) -> String {
        format!("{}/v2/list?{}", self.base_url, request.query_string())
    }

    pub fn thumbnail_url(&self, id: &str, width: u32, height: u32) -> String {
        thumbnail_url(&self.base_url, id, width, height)
    }

    pub async fn list_images(&self, request: &FeedRequest) -> Result<Vec<ImageRecord>, FeedError> {
        let url = self.list_url(request);
        debug!(%url, "requesting image page");

        let response = HTTP_CLIENT
            .get(&url)
            .send()
            .await
            .map_err(FeedError::network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "image feed returned non-success status");
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(FeedError::network)?;
        decode_image_list(&body)
    }
}

impl Default for PicsumClient {
    fn default() -> Self {
        Self::new(PICSUM_BASE_URL)
    }
}

impl ImageFeed for PicsumClient {
    fn fetch_page<'a>(
        &'a self,
        request: &'a FeedRequest,
    ) -> LocalBoxFuture<'a, Result<Vec<ImageRecord>, FeedError>> {
        self.list_images(request).boxed_local()
    }
}

pub fn decode_image_list(body: &str) -> Result<Vec<ImageRecord>, FeedError> {
    serde_json::from_str(body).map_err(FeedError::decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_request_puts_page_before_limit() {
        let client = PicsumClient::default();
        assert_eq!(
            client.list_url(&FeedRequest::page(3, 15)),
            "https://picsum.photos/v2/list?page=3&limit=15"
        );
    }

    #[test]
    fn first_request_omits_page() {
        let client = PicsumClient::new("http://localhost:8080/");
        assert_eq!(
            client.list_url(&FeedRequest::first(10)),
            "http://localhost:8080/v2/list?limit=10"
        );
    }

    #[test]
    fn thumbnail_url_escapes_id() {
        let client = PicsumClient::default();
        assert_eq!(
            client.thumbnail_url("42", 300, 300),
            "https://picsum.photos/id/42/300/300"
        );
        assert_eq!(
            client.thumbnail_url("a b/c", 300, 300),
            "https://picsum.photos/id/a%20b%2Fc/300/300"
        );
        assert_eq!(
            thumbnail_url("http://localhost:8080/", "7", 150, 100),
            "http://localhost:8080/id/7/150/100"
        );
    }

    #[test]
    fn decode_rejects_non_array_bodies() {
        let err = decode_image_list(r#"{"error": "nope"}"#).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)));
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn decode_accepts_empty_page() {
        assert_eq!(decode_image_list("[]").unwrap(), Vec::new());
    }
}
