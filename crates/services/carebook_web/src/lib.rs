// --- File: crates/services/carebook_web/src/lib.rs ---
pub mod app_state;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod templates;

pub use app_state::{AppState, AppStateBuilder};
pub use routes::routes;
