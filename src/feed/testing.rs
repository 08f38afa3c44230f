//! Test helpers: an in-memory image feed and a VirtualDom driver.

use crate::api::{FeedError, FeedRequest, ImageFeed, ImageRecord};
use dioxus::core::{NoOpMutations, VirtualDom};
use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Answers requests from a fixed script and records what was asked for.
/// Once the script runs out every request gets an empty page.
#[derive(Default)]
pub struct ScriptedFeed {
    responses: RefCell<VecDeque<Result<Vec<ImageRecord>, FeedError>>>,
    requests: RefCell<Vec<FeedRequest>>,
}

impl ScriptedFeed {
    pub fn new(responses: Vec<Result<Vec<ImageRecord>, FeedError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::default(),
        }
    }

    pub fn requests(&self) -> Vec<FeedRequest> {
        self.requests.borrow().clone()
    }

    pub fn requested_pages(&self) -> Vec<Option<u32>> {
        self.requests.borrow().iter().map(|r| r.page).collect()
    }
}

impl ImageFeed for ScriptedFeed {
    fn fetch_page<'a>(
        &'a self,
        request: &'a FeedRequest,
    ) -> LocalBoxFuture<'a, Result<Vec<ImageRecord>, FeedError>> {
        self.requests.borrow_mut().push(*request);
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()));
        future::ready(response).boxed_local()
    }
}

pub fn record(id: &str, author: &str) -> ImageRecord {
    ImageRecord {
        id: id.to_string(),
        author: author.to_string(),
        width: 400,
        height: 300,
        url: format!("https://unsplash.com/photos/{id}"),
        download_url: format!("https://picsum.photos/id/{id}/400/300"),
    }
}

/// Runs queued effects, tasks and re-renders until the dom goes quiet.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..16 {
        let work = tokio::time::timeout(Duration::from_millis(25), dom.wait_for_work()).await;
        if work.is_err() {
            break;
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Number of rendered gallery tiles in server-rendered markup.
pub fn tile_count(html: &str) -> usize {
    html.matches("class=\"gallery-item\"").count()
}
