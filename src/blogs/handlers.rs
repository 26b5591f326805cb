use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::AuthUser, error::AppError, state::AppState};

use super::{
    dto::{CreateBlogRequest, UpdateBlogRequest},
    repo::Blog,
};

/// Reads are public; create/update/delete sit behind the auth gate.
pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blogs/:id", get(get_blog))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs/:id", put(update_blog))
        .route("/blogs/:id", delete(delete_blog))
}

#[instrument(skip(state, claims, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<Blog>), AppError> {
    let blog = Blog::create(&state.db, claims.sub, payload).await?;
    info!(blog_id = blog.id, author_id = %claims.sub, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

#[instrument(skip(state))]
pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<Vec<Blog>>, AppError> {
    let blogs = Blog::list(&state.db).await?;
    Ok(Json(blogs))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Blog>, AppError> {
    let blog = Blog::get_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Blog"))?;
    Ok(Json(blog))
}

#[instrument(skip(state, _claims, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<Blog>, AppError> {
    let blog = Blog::update(&state.db, id, payload)
        .await?
        .ok_or(AppError::NotFound("Blog"))?;
    info!(blog_id = id, "blog updated");
    Ok(Json(blog))
}

#[instrument(skip(state, _claims))]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Blog>, AppError> {
    let blog = Blog::delete(&state.db, id)
        .await?
        .ok_or(AppError::NotFound("Blog"))?;
    info!(blog_id = id, "blog deleted");
    Ok(Json(blog))
}
