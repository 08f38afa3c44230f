use crate::api::*;
use crate::components::{
    use_request_scope, use_window_listener, window_inner_width, window_scroll_metrics,
    Icon, ImageTile, RequestScope,
};
use crate::config::GalleryConfig;
use crate::feed::*;
use dioxus::prelude::*;
use tracing::trace;

const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

/// Starts the next page request unless one is already in flight. Must run
/// inside the owning component's scope, since it spawns the request task.
fn fetch_next_page(mut pager: Signal<FeedPager>, feed: &FeedHandle, scope: &RequestScope) {
    let Some(ticket) = pager.write().begin_fetch() else {
        return;
    };

    let feed = feed.clone();
    let task = spawn(async move {
        let request = ticket.request();
        let result = feed.fetch_page(&request).await;
        pager.write().complete(ticket, result);
    });
    scope.track(task);
}

/// Feed state of a mounted masonry gallery. Callers outside the component
/// (window listeners, buttons) only bump `requests`; the view's effect
/// turns each bump into a fetch from within its own scope.
#[derive(Clone, Copy, PartialEq)]
pub struct MasonryFeed {
    pager: Signal<FeedPager>,
    requests: Signal<u64>,
}

impl MasonryFeed {
    pub fn pager(&self) -> Signal<FeedPager> {
        self.pager
    }

    pub fn request_next_page(&mut self) {
        *self.requests.write() += 1;
    }

    /// Scroll trigger: asks for the next page once the window is within
    /// `threshold` of the bottom and nothing is loading.
    pub fn on_scroll(&mut self, metrics: Option<ScrollMetrics>, threshold: f64) {
        let Some(metrics) = metrics else {
            return;
        };
        let loading = self.pager.peek().is_loading();
        if should_fetch(&metrics, threshold, loading) {
            self.request_next_page();
        } else if loading && metrics.near_bottom(threshold) {
            trace!("scroll trigger ignored while a page is loading");
        }
    }
}

/// Owns the pager of a masonry view: loads page 1 on mount, then one page
/// per request, and abandons whatever is in flight on unmount.
pub fn use_masonry_feed(config: &GalleryConfig, feed: FeedHandle) -> MasonryFeed {
    let mut pager = use_signal(|| FeedPager::new(config.masonry_page_size, config.exhaustion_policy));
    let requests = use_signal(|| 0u64);
    let scope = use_request_scope();

    use_effect(move || {
        let _ = requests();
        fetch_next_page(pager, &feed, &scope);
    });

    use_drop(move || {
        if let Ok(mut pager) = pager.try_write() {
            pager.cancel();
        }
    });

    MasonryFeed { pager, requests }
}

/// Masonry gallery that keeps loading pages as the window nears the bottom.
#[component]
pub fn MasonryGallery() -> Element {
    let config = use_context::<GalleryConfig>();
    let feed = use_context::<FeedHandle>();
    let mut masonry = use_masonry_feed(&config, feed);
    let mut viewport_width =
        use_signal(|| window_inner_width().unwrap_or(FALLBACK_VIEWPORT_WIDTH));

    let threshold = config.scroll_threshold_px;
    use_window_listener("scroll", move || {
        masonry.on_scroll(window_scroll_metrics(), threshold)
    });

    use_window_listener("resize", move || {
        if let Some(width) = window_inner_width() {
            viewport_width.set(width);
        }
    });

    let columns = column_count(
        viewport_width(),
        config.min_column_width_px,
        config.max_columns,
    );

    rsx! {
        MasonryFeedView { masonry, columns }
    }
}

#[component]
pub fn MasonryFeedView(masonry: MasonryFeed, columns: usize) -> Element {
    let (layout, status, error, total, next_page, exhausted) = {
        let pager = masonry.pager();
        let state = pager.read();
        (
            distribute(state.images(), columns),
            state.status(),
            state.error().map(str::to_string),
            state.images().len(),
            state.next_page(),
            state.is_exhausted(),
        )
    };
    let busy = matches!(status, FeedStatus::InitialLoad | FeedStatus::Appending);

    rsx! {
        div { class: "container masonry-page",
            h1 { "Infinite Picsum Gallery" }

            {error.map(|message| rsx! {
                div { class: "error-banner", role: "alert",
                    Icon { name: "alert".to_string(), class: "icon".to_string() }
                    span { "Error: {message}" }
                }
            })}

            {match status {
                FeedStatus::InitialLoad => rsx! {
                    div { class: "loading-view",
                        Icon { name: "loader".to_string(), class: "icon-large".to_string() }
                        p { "Loading..." }
                    }
                },
                FeedStatus::Empty => rsx! {
                    p { class: "empty-state", "No images to show" }
                },
                FeedStatus::Ready | FeedStatus::Appending => rsx! {
                    div {
                        class: "masonry",
                        style: "--masonry-columns: {columns};",
                        for (index, column) in layout.into_iter().enumerate() {
                            div { key: "{index}", class: "masonry-column",
                                for (position, image) in column {
                                    ImageTile {
                                        key: "{position}-{image.id}",
                                        src: image.download_url.clone(),
                                        alt: image.author.clone(),
                                        caption: image.author.clone(),
                                        width: image.width,
                                        height: image.height,
                                    }
                                }
                            }
                        }
                    }
                },
            }}

            if status == FeedStatus::Appending {
                div { class: "loading-indicator",
                    Icon { name: "loader".to_string(), class: "icon".to_string() }
                    span { "Loading more images..." }
                }
            }

            p { class: "feed-summary",
                if exhausted {
                    "{total} images · page {next_page} came back empty"
                } else {
                    "{total} images · next page {next_page}"
                }
            }

            // No window scroll events outside the browser
            if cfg!(not(target_arch = "wasm32")) {
                button {
                    class: "load-more",
                    disabled: busy,
                    onclick: move |_| {
                        let mut masonry = masonry;
                        masonry.request_next_page();
                    },
                    "Load more"
                }
            }
        }
    }
}
