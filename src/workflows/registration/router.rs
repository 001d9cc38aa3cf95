use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{Member, MemberDraft};
use super::service::RegistrationService;
use crate::persistence::RecordStore;

/// Router builder exposing the registration worklist and workflow actions.
pub fn registration_router<S>(service: Arc<RegistrationService<S>>) -> Router
where
    S: RecordStore<Member> + 'static,
{
    Router::new()
        .route("/api/v1/registrations", get(list_handler::<S>))
        .route("/api/v1/registrations", post(submit_handler::<S>))
        .route("/api/v1/registrations/refresh", post(refresh_handler::<S>))
        .route("/api/v1/registrations/:id", put(update_handler::<S>))
        .route("/api/v1/registrations/:id", delete(delete_handler::<S>))
        .route(
            "/api/v1/registrations/:id/approve",
            post(approve_handler::<S>),
        )
        .route(
            "/api/v1/registrations/:id/reject",
            post(reject_handler::<S>),
        )
        .route(
            "/api/v1/registrations/club/:club_id",
            get(club_members_handler::<S>),
        )
        .route(
            "/api/v1/registrations/bulk/approve",
            post(bulk_approve_handler::<S>),
        )
        .route(
            "/api/v1/registrations/bulk/reject",
            post(bulk_reject_handler::<S>),
        )
        .route(
            "/api/v1/registrations/bulk/delete",
            post(bulk_delete_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RejectPayload {
    pub note: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkIdsPayload {
    pub ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BulkRejectPayload {
    pub ids: Vec<String>,
    pub note: String,
}

pub(crate) async fn list_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    axum::Json(service.members()).into_response()
}

pub(crate) async fn refresh_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.refresh() {
        Ok(count) => axum::Json(json!({ "count": count })).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    axum::Json(draft): axum::Json<MemberDraft>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.submit(draft) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    Path(id): Path<String>,
    axum::Json(mut record): axum::Json<Member>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    record.id = id;
    match service.update(record) {
        Ok(updated) => axum::Json(updated).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn approve_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.approve(&id) {
        Ok(record) => axum::Json(record).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn reject_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    Path(id): Path<String>,
    axum::Json(payload): axum::Json<RejectPayload>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.reject(&id, &payload.note) {
        Ok(record) => axum::Json(record).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn club_members_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    Path(club_id): Path<String>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    axum::Json(service.approved_by_club(&club_id)).into_response()
}

pub(crate) async fn bulk_approve_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    axum::Json(payload): axum::Json<BulkIdsPayload>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    axum::Json(service.bulk_approve(&payload.ids)).into_response()
}

pub(crate) async fn bulk_reject_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    axum::Json(payload): axum::Json<BulkRejectPayload>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    match service.bulk_reject(&payload.ids, &payload.note) {
        Ok(report) => axum::Json(report).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn bulk_delete_handler<S>(
    State(service): State<Arc<RegistrationService<S>>>,
    axum::Json(payload): axum::Json<BulkIdsPayload>,
) -> Response
where
    S: RecordStore<Member> + 'static,
{
    axum::Json(service.bulk_delete(&payload.ids)).into_response()
}
