use axum::{routing::get, Router};

use crate::state::AppState;

pub mod data;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolio", get(handlers::get_portfolio))
        .route(
            "/portfolio/profile",
            get(handlers::get_profile).patch(handlers::patch_profile),
        )
        .route("/portfolio/skills", get(handlers::get_skills))
        .route("/portfolio/projects", get(handlers::get_projects))
        .route(
            "/portfolio/projects/:id",
            get(handlers::get_project)
                .put(handlers::put_project)
                .patch(handlers::patch_project)
                .delete(handlers::delete_project),
        )
        .route("/portfolio/social", get(handlers::get_social))
        .route("/preferences", get(handlers::get_preferences))
}
