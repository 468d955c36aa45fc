use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::project::ProjectQuery, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> Result<impl Responder, AppError> {
    let response = state.project_handler
        .list_projects(query.category())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip(state))]
pub async fn get_project(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let project = state.project_handler
        .get_project_by_slug(&slug)
        .await?;

    Ok(HttpResponse::Ok().json(project))
}
