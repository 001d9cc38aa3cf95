use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};

use super::domain::{Club, ClubDraft};
use super::service::ClubService;
use crate::persistence::RecordStore;

pub fn club_router<S>(service: Arc<ClubService<S>>) -> Router
where
    S: RecordStore<Club> + 'static,
{
    Router::new()
        .route("/api/v1/clubs", get(list_handler::<S>))
        .route("/api/v1/clubs", post(create_handler::<S>))
        .route("/api/v1/clubs/:id", put(update_handler::<S>))
        .route("/api/v1/clubs/:id", delete(delete_handler::<S>))
        .with_state(service)
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<ClubService<S>>>) -> Response
where
    S: RecordStore<Club> + 'static,
{
    axum::Json(service.clubs()).into_response()
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<ClubService<S>>>,
    axum::Json(draft): axum::Json<ClubDraft>,
) -> Response
where
    S: RecordStore<Club> + 'static,
{
    match service.create(draft) {
        Ok(club) => (StatusCode::CREATED, axum::Json(club)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_handler<S>(
    State(service): State<Arc<ClubService<S>>>,
    Path(id): Path<String>,
    axum::Json(mut record): axum::Json<Club>,
) -> Response
where
    S: RecordStore<Club> + 'static,
{
    record.id = id;
    match service.update(record) {
        Ok(club) => axum::Json(club).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<ClubService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecordStore<Club> + 'static,
{
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
