pub mod dispatch;
pub mod types;
pub mod types_init;
