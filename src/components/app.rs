use crate::api::{FeedHandle, PicsumClient};
use crate::components::{view_label, GalleryRoute, Icon};
use crate::config::GalleryConfig;
use dioxus::prelude::*;

/// Layout shared by both gallery variants: brand, navigation, and the
/// settings and image feed every view reads from context.
#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(GalleryConfig::default);
    use_context_provider(|| FeedHandle::new(PicsumClient::new(config.api_base.clone())));

    let grid = GalleryRoute::StaticGallery {};
    let masonry = GalleryRoute::MasonryGallery {};
    let grid_label = view_label(&grid);
    let masonry_label = view_label(&masonry);

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                span { class: "app-brand",
                    Icon { name: "image".to_string(), class: "icon".to_string() }
                    "Picsum Gallery"
                }
                nav { class: "app-nav",
                    Link {
                        to: grid,
                        class: "nav-link",
                        active_class: "active",
                        Icon { name: "grid".to_string(), class: "icon".to_string() }
                        "{grid_label}"
                    }
                    Link {
                        to: masonry,
                        class: "nav-link",
                        active_class: "active",
                        Icon { name: "masonry".to_string(), class: "icon".to_string() }
                        "{masonry_label}"
                    }
                }
            }
            main { class: "app-main", Outlet::<GalleryRoute> {} }
        }
    }
}
