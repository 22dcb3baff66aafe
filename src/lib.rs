pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod id;
pub mod models;
pub mod notify;
pub mod seed;
pub mod state;
pub mod stats;
pub mod store;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use store::TicketStore;
