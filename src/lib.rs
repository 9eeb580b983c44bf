pub mod analysis;
pub mod app;
pub mod assistant;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod foods;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
