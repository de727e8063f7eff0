// --- File: crates/services/carebook_web/src/routes.rs ---
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::handlers::{
    back_handler, booking_page, catalog_page, healthz, not_found_handler, pick_date_handler,
    pick_time_handler, save_contact_handler, select_provider_handler, show_month_handler,
    submit_handler,
};

/// Creates the application router: catalog, booking flow and the not-found fallback.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog_page))
        .route("/providers/{id}/select", post(select_provider_handler))
        .route("/booking", get(booking_page))
        .route("/booking/date", post(pick_date_handler))
        .route("/booking/time", post(pick_time_handler))
        .route("/booking/month", post(show_month_handler))
        .route("/booking/contact", post(save_contact_handler))
        .route("/booking/submit", post(submit_handler))
        .route("/booking/back", post(back_handler))
        .route("/healthz", get(healthz))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
