//! actix-web routes for the course API.
//!
//! `GET /api/courses/batch` is registered ahead of `GET /api/courses/{id}`
//! so that `batch` never reaches the typed id extractor.
use std::num::ParseIntError;

use actix_web::{
    error,
    http::{header::ContentType, StatusCode},
    web::{self, Data, Json, Path, Query},
    HttpResponse,
};

use crate::{
    application::{self, Application},
    domain::{Course, CourseId, CreateCourse},
    repository::CourseRepository,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Application(#[from] application::Error),
    #[error("invalid course id: {0}")]
    InvalidId(#[from] ParseIntError),
}

pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: CourseRepository + 'static,
{
    cfg.service(
        web::scope("/api/courses")
            .route("/batch", web::get().to(courses_by_ids::<R>))
            .route("/{id}", web::get().to(course_by_id::<R>))
            .route("", web::get().to(all_courses::<R>))
            .route("", web::post().to(create_course::<R>)),
    )
    .route("/health", web::get().to(health::<R>));
}

async fn course_by_id<R: CourseRepository>(
    app: Data<Application<R>>,
    id: Path<CourseId>,
) -> Result<Json<Course>, Error> {
    Ok(Json(app.course_by_id(id.into_inner()).await?))
}

async fn courses_by_ids<R: CourseRepository>(
    app: Data<Application<R>>,
    params: Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Course>>, Error> {
    let ids = parse_ids(&params)?;
    Ok(Json(app.courses_by_ids(ids).await?))
}

async fn all_courses<R: CourseRepository>(
    app: Data<Application<R>>,
) -> Result<Json<Vec<Course>>, Error> {
    Ok(Json(app.all_courses().await?))
}

async fn create_course<R: CourseRepository>(
    app: Data<Application<R>>,
    data: Json<CreateCourse>,
) -> Result<Json<Course>, Error> {
    Ok(Json(app.create_course(data.into_inner()).await?))
}

async fn health<R: CourseRepository>(app: Data<Application<R>>) -> HttpResponse {
    match app.health_check().await {
        Ok(()) => HttpResponse::Ok().body("ok"),
        Err(e) => HttpResponse::ServiceUnavailable().body(e.to_string()),
    }
}

/// Collects every `ids` parameter; each value may be a comma separated list.
fn parse_ids(params: &[(String, String)]) -> Result<Vec<CourseId>, ParseIntError> {
    params
        .iter()
        .filter(|(key, _)| key == "ids")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::parse)
        .collect()
}

impl error::ResponseError for Error {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Application(application::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::Application(application::Error::Storage(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Error::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }
}
