pub mod db;

mod state;
pub use state::*;

mod app;
pub use app::*;

pub mod cli;
pub mod routes;
