use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::state::AppState;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/me", get(handlers::me))
        .route("/auth/verify", post(handlers::verify))
        .route("/auth/init-admin", post(handlers::init_admin))
        .route("/auth/profile", put(handlers::update_profile))
        .route("/auth/password", patch(handlers::change_password))
        .route("/auth/account", delete(handlers::delete_account))
}
