mod user;
pub use user::*;

mod exercise;
pub use exercise::*;

mod log;
pub use log::*;

/// Treats absent and blank form fields the same
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
