pub mod config;
pub mod filter;
pub mod intent;
pub mod item;
pub mod state;

pub use config::*;
pub use filter::*;
pub use intent::*;
pub use item::*;
pub use state::*;
