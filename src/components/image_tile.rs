use dioxus::prelude::*;

/// One gallery tile: the image and its author caption. When the intrinsic
/// size is known the tile reserves space for it before the image arrives.
#[component]
pub fn ImageTile(
    src: String,
    alt: String,
    caption: String,
    #[props(default)] width: u32,
    #[props(default)] height: u32,
) -> Element {
    let ratio_style = if width > 0 && height > 0 {
        format!("aspect-ratio: {width} / {height};")
    } else {
        String::new()
    };

    rsx! {
        figure { class: "gallery-item",
            img {
                src: "{src}",
                alt: "{alt}",
                style: "{ratio_style}",
                loading: "lazy",
            }
            figcaption { class: "author-name", "{caption}" }
        }
    }
}

