pub mod aggregate;
pub mod app;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod filter;
pub mod handlers;
pub mod loader;
pub mod models;
pub mod state;
pub mod ui;
pub mod view;

pub use app::router;
pub use config::Config;
pub use dataset::Dataset;
pub use loader::load_dataset;
pub use state::AppState;
pub use view::compute_view;
