use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::AuthUser, error::AppError, state::AppState};

use super::{
    dto::{CreateProjectRequest, UpdateProjectRequest},
    repo::Project,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/projects/:id", get(get_project))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", post(create_project))
        .route("/projects/:id", put(update_project))
        .route("/projects/:id", delete(delete_project))
}

#[instrument(skip(state, _claims, payload))]
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = Project::create(&state.db, payload).await?;
    info!(project_id = project.id, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

#[instrument(skip(state))]
pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = Project::list(&state.db).await?;
    Ok(Json(projects))
}

#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let project = Project::get_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Project"))?;
    Ok(Json(project))
}

#[instrument(skip(state, _claims, payload))]
pub async fn update_project(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> Result<Json<Project>, AppError> {
    let project = Project::update(&state.db, id, payload)
        .await?
        .ok_or(AppError::NotFound("Project"))?;
    info!(project_id = id, "project updated");
    Ok(Json(project))
}

#[instrument(skip(state, _claims))]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let project = Project::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Project"))?;
    info!(project_id = id, "project deleted");
    Ok(Json(project))
}
