mod uuid;
pub use self::uuid::*;

pub mod calendar_date;
