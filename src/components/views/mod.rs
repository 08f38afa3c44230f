mod masonry;
mod not_found;
mod static_grid;

pub use masonry::*;
pub use not_found::*;
pub use static_grid::*;
