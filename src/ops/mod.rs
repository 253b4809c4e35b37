pub mod item_ops;
pub mod store;
pub mod views;

pub use store::{Store, apply};
