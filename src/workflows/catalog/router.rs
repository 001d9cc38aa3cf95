use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};

use super::domain::{Course, CourseDraft, Instructor, InstructorDraft};
use super::service::CatalogService;
use crate::persistence::RecordStore;

pub fn catalog_router<C, I>(service: Arc<CatalogService<C, I>>) -> Router
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    Router::new()
        .route("/api/v1/courses", get(list_courses_handler::<C, I>))
        .route("/api/v1/courses", post(add_course_handler::<C, I>))
        .route("/api/v1/courses/:id", put(update_course_handler::<C, I>))
        .route("/api/v1/courses/:id", delete(delete_course_handler::<C, I>))
        .route("/api/v1/instructors", get(list_instructors_handler::<C, I>))
        .route("/api/v1/instructors", post(add_instructor_handler::<C, I>))
        .route(
            "/api/v1/instructors/:id",
            put(update_instructor_handler::<C, I>),
        )
        .route(
            "/api/v1/instructors/:id",
            delete(delete_instructor_handler::<C, I>),
        )
        .with_state(service)
}

pub(crate) async fn list_courses_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    axum::Json(service.courses()).into_response()
}

pub(crate) async fn add_course_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    axum::Json(draft): axum::Json<CourseDraft>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    match service.add_course(draft) {
        Ok(course) => (StatusCode::CREATED, axum::Json(course)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_course_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    Path(id): Path<String>,
    axum::Json(mut record): axum::Json<Course>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    record.id = id;
    match service.update_course(record) {
        Ok(course) => axum::Json(course).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_course_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    Path(id): Path<String>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    match service.delete_course(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn list_instructors_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    axum::Json(service.instructors()).into_response()
}

pub(crate) async fn add_instructor_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    axum::Json(draft): axum::Json<InstructorDraft>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    match service.add_instructor(draft) {
        Ok(instructor) => (StatusCode::CREATED, axum::Json(instructor)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn update_instructor_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    Path(id): Path<String>,
    axum::Json(mut record): axum::Json<Instructor>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    record.id = id;
    match service.update_instructor(record) {
        Ok(instructor) => axum::Json(instructor).into_response(),
        Err(err) => err.into_response(),
    }
}

pub(crate) async fn delete_instructor_handler<C, I>(
    State(service): State<Arc<CatalogService<C, I>>>,
    Path(id): Path<String>,
) -> Response
where
    C: RecordStore<Course> + 'static,
    I: RecordStore<Instructor> + 'static,
{
    match service.delete_instructor(&id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
