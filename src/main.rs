use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod feed;

use components::GalleryRoute;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Picsum Gallery" }
        document::Meta { name: "theme-color", content: "#1f2933" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: APP_CSS }

        Router::<GalleryRoute> {}
    }
}
