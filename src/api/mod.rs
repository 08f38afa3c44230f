pub mod error;
pub mod models;
pub mod picsum;

pub use error::*;
pub use models::*;
pub use picsum::*;
