//! Page cursor and accumulated records behind the infinite-scroll gallery.
//!
//! A request can only be started through [`FeedPager::begin_fetch`], which
//! hands out a [`FetchTicket`] and moves the pager from `Idle` to `Loading`.
//! While loading, further calls return `None`. The result is applied with
//! [`FeedPager::complete`], which only accepts the ticket that is currently
//! loading. [`FeedPager::cancel`] starts a new generation; tickets issued
//! before it are stale from then on.

use crate::api::{FeedError, FeedRequest, ImageRecord};
use crate::config::ExhaustionPolicy;
use tracing::{debug, info, warn};

/// Handle for the single request the pager allows in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    serial: u64,
    page: u32,
    limit: u32,
}

impl FetchTicket {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn request(&self) -> FeedRequest {
        FeedRequest::page(self.page, self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading(FetchTicket),
}

/// Coarse view state used for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    Empty,
    InitialLoad,
    Ready,
    Appending,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Appended { count: usize, next_page: u32 },
    Exhausted { page: u32 },
    Failed(String),
    /// The ticket was not the one in flight; nothing changed.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedPager {
    images: Vec<ImageRecord>,
    next_page: u32,
    page_size: u32,
    policy: ExhaustionPolicy,
    phase: Phase,
    error: Option<String>,
    exhausted: bool,
    generation: u64,
    issued: u64,
}

impl FeedPager {
    pub fn new(page_size: u32, policy: ExhaustionPolicy) -> Self {
        Self {
            images: Vec::new(),
            next_page: 1,
            page_size,
            policy,
            phase: Phase::Idle,
            error: None,
            exhausted: false,
            generation: 0,
            issued: 0,
        }
    }

    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn next_page(&self) -> u32 {
        self.next_page
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// First failure message. Later failures and successes leave it as is.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the most recent page came back empty.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn status(&self) -> FeedStatus {
        match (self.is_loading(), self.images.is_empty()) {
            (true, true) => FeedStatus::InitialLoad,
            (true, false) => FeedStatus::Appending,
            (false, true) => FeedStatus::Empty,
            (false, false) => FeedStatus::Ready,
        }
    }

    /// The only `Idle -> Loading` transition. Returns `None` when a request
    /// is already in flight, or when the feed is exhausted and the policy
    /// says to stop.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if let Phase::Loading(ticket) = self.phase {
            debug!(page = ticket.page, "fetch already in flight, ignoring trigger");
            return None;
        }
        if self.exhausted && self.policy == ExhaustionPolicy::StopLoading {
            debug!(page = self.next_page, "feed exhausted, not fetching");
            return None;
        }

        self.issued += 1;
        let ticket = FetchTicket {
            generation: self.generation,
            serial: self.issued,
            page: self.next_page,
            limit: self.page_size,
        };
        self.phase = Phase::Loading(ticket);
        debug!(page = ticket.page, limit = ticket.limit, "fetch started");
        Some(ticket)
    }

    /// Abandons the request in flight, if any, and invalidates every ticket
    /// handed out so far. Records, cursor and error are kept.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if let Phase::Loading(ticket) = self.phase {
            debug!(page = ticket.page, "in-flight fetch cancelled");
            self.phase = Phase::Idle;
        }
    }

    /// Applies the result of the request identified by `ticket` and returns
    /// to `Idle`.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<ImageRecord>, FeedError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation || self.phase != Phase::Loading(ticket) {
            warn!(page = ticket.page, "dropping result for a request that is no longer in flight");
            return FetchOutcome::Stale;
        }
        self.phase = Phase::Idle;

        match result {
            Ok(records) if records.is_empty() => {
                self.exhausted = true;
                info!(page = ticket.page, "feed returned an empty page");
                FetchOutcome::Exhausted { page: ticket.page }
            }
            Ok(records) => {
                let count = records.len();
                self.images.extend(records);
                self.next_page += 1;
                self.exhausted = false;
                info!(
                    page = ticket.page,
                    count,
                    total = self.images.len(),
                    "appended image page"
                );
                FetchOutcome::Appended {
                    count,
                    next_page: self.next_page,
                }
            }
            Err(err) => {
                warn!(page = ticket.page, error = %err, "image page failed");
                let message = err.user_message();
                if self.error.is_none() {
                    self.error = Some(message.clone());
                }
                FetchOutcome::Failed(message)
            }
        }
    }
}
