use crate::api::*;
use crate::components::{Icon, ImageTile};
use crate::config::GalleryConfig;
use dioxus::prelude::*;
use tracing::{info, warn};

/// Fixed grid: one page fetched once on mount, never refreshed.
#[component]
pub fn StaticGallery() -> Element {
    let config = use_context::<GalleryConfig>();
    let feed = use_context::<FeedHandle>();
    let size = config.thumbnail_size;

    let images = use_resource({
        let limit = config.grid_page_size;
        move || {
            let feed = feed.clone();
            async move {
                let request = FeedRequest::first(limit);
                let result = feed.fetch_page(&request).await;
                match &result {
                    Ok(images) => info!(count = images.len(), "loaded static gallery"),
                    Err(err) => warn!(error = %err, "static gallery failed to load"),
                }
                result
            }
        }
    });

    match images() {
        None => rsx! {
            div { class: "container loading-view",
                Icon { name: "loader".to_string(), class: "icon-large".to_string() }
                h1 { "Loading..." }
            }
        },
        Some(Err(err)) => {
            let message = err.user_message();
            rsx! {
                div { class: "container",
                    h1 { class: "error-title", "Error: {message}" }
                }
            }
        }
        Some(Ok(images)) => rsx! {
            div { class: "container",
                h1 { "Picsum Image Gallery" }
                div { class: "gallery",
                    for (position, image) in images.into_iter().enumerate() {
                        ImageTile {
                            key: "{position}-{image.id}",
                            src: thumbnail_url(&config.api_base, &image.id, size, size),
                            alt: image.author.clone(),
                            caption: image.author.clone(),
                            width: size,
                            height: size,
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::testing::{record, settle, tile_count, ScriptedFeed};
    use dioxus::core::VirtualDom;
    use std::rc::Rc;

    fn mount(feed: &Rc<ScriptedFeed>) -> VirtualDom {
        let mut dom = VirtualDom::new(StaticGallery)
            .with_root_context(GalleryConfig::default())
            .with_root_context(FeedHandle::from(feed.clone()));
        dom.rebuild_in_place();
        dom
    }

    #[tokio::test]
    async fn renders_one_thumbnail_tile_per_record() {
        let feed = Rc::new(ScriptedFeed::new(vec![Ok(vec![
            record("1", "A"),
            record("2", "B"),
        ])]));
        let mut dom = mount(&feed);

        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert_eq!(tile_count(&html), 2);
        assert!(html.contains("Picsum Image Gallery"));
        assert!(html.contains("https://picsum.photos/id/1/300/300"));
        assert!(html.contains("alt=\"B\""));
        assert_eq!(feed.requests(), vec![FeedRequest::first(10)]);
    }

    #[tokio::test]
    async fn error_replaces_the_whole_view() {
        let feed = Rc::new(ScriptedFeed::new(vec![Err(FeedError::Status(500))]));
        let mut dom = mount(&feed);

        settle(&mut dom).await;

        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Error: Failed to fetch images"));
        assert!(!html.contains("Picsum Image Gallery"));
        assert_eq!(tile_count(&html), 0);
    }

    #[tokio::test]
    async fn repeated_ids_render_every_tile() {
        let feed = Rc::new(ScriptedFeed::new(vec![Ok(vec![
            record("5", "A"),
            record("5", "A"),
        ])]));
        let mut dom = mount(&feed);

        settle(&mut dom).await;

        assert_eq!(tile_count(&dioxus_ssr::render(&dom)), 2);
    }

    #[tokio::test]
    async fn fetches_only_once() {
        let feed = Rc::new(ScriptedFeed::new(vec![Ok(vec![record("1", "A")])]));
        let mut dom = mount(&feed);

        settle(&mut dom).await;
        settle(&mut dom).await;

        assert_eq!(feed.requests().len(), 1);
    }
}
