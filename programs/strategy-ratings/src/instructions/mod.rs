pub mod get_rating;
pub mod submit_rating;

pub use get_rating::*;
pub use submit_rating::*;
