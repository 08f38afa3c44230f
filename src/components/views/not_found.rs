use crate::components::{GalleryRoute, Icon};
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "container not-found",
            Icon { name: "image".to_string(), class: "icon-large".to_string() }
            h1 { "Nothing at /{path}" }
            Link { to: GalleryRoute::StaticGallery {}, class: "nav-link", "Back to the gallery" }
        }
    }
}
