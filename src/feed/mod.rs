//! Platform-independent pieces of the infinite-scroll gallery.

pub mod layout;
pub mod pager;
pub mod scroll;

pub use layout::*;
pub use pager::*;
pub use scroll::*;

#[cfg(test)]
pub mod testing;
