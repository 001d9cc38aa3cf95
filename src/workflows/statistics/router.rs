use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::{per_club, totals};
use crate::store::Workspace;
use crate::workflows::export::export_approved_members;

/// Dashboard and export endpoints, reading the working sets directly.
pub fn statistics_router(workspace: Arc<Workspace>) -> Router {
    Router::new()
        .route("/api/v1/statistics", get(statistics_handler))
        .route("/api/v1/statistics/export", get(export_handler))
        .with_state(workspace)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExportQuery {
    pub club: Option<String>,
}

pub(crate) async fn statistics_handler(State(workspace): State<Arc<Workspace>>) -> Response {
    let clubs = workspace.clubs.snapshot();
    let members = workspace.members.snapshot();

    axum::Json(json!({
        "totals": totals(&clubs, &members),
        "clubs": per_club(&clubs, &members),
    }))
    .into_response()
}

pub(crate) async fn export_handler(
    State(workspace): State<Arc<Workspace>>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let clubs = workspace.clubs.snapshot();
    let members = workspace.members.snapshot();

    match export_approved_members(&clubs, &members, query.club.as_deref()) {
        Ok(csv) => (
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "member export failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "error": err.to_string() })),
            )
                .into_response()
        }
    }
}
