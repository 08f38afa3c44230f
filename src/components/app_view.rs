//! Defines the routes of the gallery.

use crate::components::views::{MasonryGallery, NotFound, StaticGallery};
use crate::components::AppShell;
use dioxus::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum GalleryRoute {
    #[layout(AppShell)]
        #[route("/")]
        StaticGallery {},
        #[route("/masonry")]
        MasonryGallery {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

pub fn view_label(route: &GalleryRoute) -> &'static str {
    match route {
        GalleryRoute::StaticGallery {} => "Grid",
        GalleryRoute::MasonryGallery {} => "Masonry",
        GalleryRoute::NotFound { .. } => "Not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_parse_from_paths() {
        assert_eq!(
            "/".parse::<GalleryRoute>().ok(),
            Some(GalleryRoute::StaticGallery {})
        );
        assert_eq!(
            "/masonry".parse::<GalleryRoute>().ok(),
            Some(GalleryRoute::MasonryGallery {})
        );
        assert_eq!(GalleryRoute::MasonryGallery {}.to_string(), "/masonry");
    }

    #[test]
    fn labels_name_each_variant() {
        assert_eq!(view_label(&GalleryRoute::StaticGallery {}), "Grid");
        assert_eq!(view_label(&GalleryRoute::MasonryGallery {}), "Masonry");
    }
}
