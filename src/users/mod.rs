use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;

pub use dto::PublicUser;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
