pub mod achievements;
pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod habits;
pub mod handlers;
pub mod models;
pub mod reminders;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod window;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::Store;
pub use window::{TimeRange, Window};
