use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/api/tickets",
            get(handlers::list_tickets)
                .post(handlers::create_ticket)
                .put(handlers::replace_tickets),
        )
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/session/reset", post(handlers::reset_session))
        .with_state(state)
}
