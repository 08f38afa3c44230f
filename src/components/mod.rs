//! The components module contains all shared components for the gallery.

mod app;
mod app_view;
mod icons;
mod image_tile;
mod request_scope;
mod window_events;
pub mod views;

pub use app::*;
pub use app_view::*;
pub use icons::*;
pub use image_tile::*;
pub use request_scope::*;
pub use window_events::*;
// Views are accessed via views::ViewName
