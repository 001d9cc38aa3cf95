use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};

use super::domain::{Report, ReportDraft};
use super::service::ReportService;
use crate::persistence::RecordStore;

pub fn report_router<S>(service: Arc<ReportService<S>>) -> Router
where
    S: RecordStore<Report> + 'static,
{
    Router::new()
        .route("/api/v1/reports", get(list_handler::<S>))
        .route("/api/v1/reports", post(create_handler::<S>))
        .route("/api/v1/reports/:id", put(update_handler::<S>))
        .route("/api/v1/reports/:id", delete(delete_handler::<S>))
        .route("/api/v1/reports/club/:club_id", get(club_reports_handler::<S>))
        .with_state(service)
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<ReportService<S>>>) -> Response
where
    S: RecordStore<Report> + 'static,
{
    axum::Json(service.views()).into_response()
}

pub(crate) async fn create_handler<S>(
    State(service): State<Arc<ReportService<S>>>,
    axum::Json(draft): axum::Json<ReportDraft>,
) -> Response
where
    S: RecordStore<Report> + 'static,
{
    match service.create(draft) {
        Ok(report) => (StatusCode::CREATED, axum::Json(report)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_handler<S>(
    State(service): State<Arc<ReportService<S>>>,
    Path(id): Path<String>,
    axum::Json(mut record): axum::Json<Report>,
) -> Response
where
    S: RecordStore<Report> + 'static,
{
    record.id = id;
    match service.update(record) {
        Ok(report) => axum::Json(report).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_handler<S>(
    State(service): State<Arc<ReportService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: RecordStore<Report> + 'static,
{
    match service.delete(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn club_reports_handler<S>(
    State(service): State<Arc<ReportService<S>>>,
    Path(club_id): Path<String>,
) -> Response
where
    S: RecordStore<Report> + 'static,
{
    axum::Json(service.by_club(&club_id)).into_response()
}
