use crate::errors::AppError;
use crate::models::{
    CreateTicketRequest, CreateTicketResponse, NotificationReport, Priority, StatsResponse,
    Ticket, TicketRow,
};
use crate::notify::deliver;
use crate::state::AppState;
use crate::stats::{build_stats, open_count};
use crate::ui::render_index;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(store.len(), open_count(store.all())))
}

pub async fn list_tickets(State(state): State<AppState>) -> Json<Vec<Ticket>> {
    let store = state.store.lock().await;
    Json(store.all().to_vec())
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let store = state.store.lock().await;
    Ok(Json(build_stats(store.all())))
}

pub async fn create_ticket(
    State(state): State<AppState>,
    Json(payload): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<CreateTicketResponse>), AppError> {
    let priority: Priority = payload.priority.parse()?;

    let ticket = {
        let mut store = state.store.lock().await;
        store.create(&payload.description, priority)?
    };
    info!("created {} ({})", ticket.id(), ticket.priority().label());

    let notification = deliver(state.sink.as_deref(), &ticket).await;
    match &notification {
        NotificationReport::Delivered => info!("notified webhook about {}", ticket.id()),
        NotificationReport::Skipped => {}
        NotificationReport::Failed { reason, .. } => {
            warn!("notification for {} failed: {reason}", ticket.id())
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateTicketResponse {
            ticket,
            notification,
        }),
    ))
}

pub async fn replace_tickets(
    State(state): State<AppState>,
    Json(rows): Json<Vec<TicketRow>>,
) -> Result<Json<Vec<Ticket>>, AppError> {
    let edited = rows
        .into_iter()
        .map(TicketRow::into_ticket)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| warn!("rejected edit: {err}"))?;

    let mut store = state.store.lock().await;
    store
        .replace_all(edited)
        .inspect_err(|err| warn!("rejected edit: {err}"))?;
    info!("applied edits to {} tickets", store.len());

    Ok(Json(store.all().to_vec()))
}

pub async fn reset_session(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, AppError> {
    state.reset().await.map_err(AppError::internal)?;
    info!("session reset");

    let store = state.store.lock().await;
    Ok(Json(store.all().to_vec()))
}
