pub mod api;
pub mod model;
pub mod types;
pub mod utils;

pub use utils::tracing::*;
