use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::{
    auth::extractors::AuthUser,
    error::ApiError,
    portfolio::data::{Portfolio, Profile, Project, SocialLinks},
    state::AppState,
};

/// `tech` may arrive as a list or a bare string; a bare string becomes a
/// one-element list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TechInput {
    Many(Vec<String>),
    One(String),
}

impl From<TechInput> for Vec<String> {
    fn from(input: TechInput) -> Self {
        match input {
            TechInput::Many(list) => list,
            TechInput::One(single) => vec![single],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub about: Option<String>,
    pub interests: Option<String>,
    pub quick_facts: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectUpsert {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tech: Option<TechInput>,
}

#[instrument(skip(state))]
pub async fn get_portfolio(State(state): State<AppState>) -> Result<Json<Portfolio>, ApiError> {
    Ok(Json(state.portfolio()?.clone()))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    Ok(Json(state.portfolio()?.profile.clone()))
}

pub async fn get_skills(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.portfolio()?.skills.clone()))
}

pub async fn get_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(state.portfolio()?.projects.clone()))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Project>, ApiError> {
    let portfolio = state.portfolio()?;
    let project = portfolio
        .project(id)
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
    Ok(Json(project.clone()))
}

pub async fn get_social(State(state): State<AppState>) -> Result<Json<SocialLinks>, ApiError> {
    Ok(Json(state.portfolio()?.social_links.clone()))
}

pub async fn get_preferences() -> Json<serde_json::Value> {
    Json(json!({
        "theme": "light",
        "language": "en",
        "colorScheme": "blue",
    }))
}

#[instrument(skip(state, claims, patch))]
pub async fn patch_profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut portfolio = state.portfolio()?;
    let profile = &mut portfolio.profile;
    if let Some(name) = patch.name {
        profile.name = name;
    }
    if let Some(title) = patch.title {
        profile.title = title;
    }
    if let Some(bio) = patch.bio {
        profile.bio = bio;
    }
    if let Some(about) = patch.about {
        profile.about = about;
    }
    if let Some(interests) = patch.interests {
        profile.interests = interests;
    }
    if let Some(quick_facts) = patch.quick_facts {
        profile.quick_facts = quick_facts;
    }

    info!(user_id = claims.user_id, "portfolio profile updated");
    Ok(Json(json!({
        "message": "Profile updated successfully",
        "profile": profile.clone(),
    })))
}

/// Full replacement: every field is required.
#[instrument(skip(state, claims, payload))]
pub async fn put_project(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<u64>,
    Json(payload): Json<ProjectUpsert>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (title, description, tech) = match (payload.title, payload.description, payload.tech) {
        (Some(t), Some(d), Some(tech)) => (t, d, Vec::from(tech)),
        _ => {
            return Err(ApiError::Validation(
                "Title, description, and tech are required".into(),
            ))
        }
    };

    let mut portfolio = state.portfolio()?;
    let project = portfolio
        .project_mut(id)
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
    *project = Project {
        id,
        title,
        description,
        tech,
    };

    info!(user_id = claims.user_id, project_id = id, "project replaced");
    Ok(Json(json!({
        "message": "Project updated successfully",
        "project": project.clone(),
    })))
}

#[instrument(skip(state, claims, payload))]
pub async fn patch_project(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<u64>,
    Json(payload): Json<ProjectUpsert>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut portfolio = state.portfolio()?;
    let project = portfolio
        .project_mut(id)
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;
    if let Some(title) = payload.title {
        project.title = title;
    }
    if let Some(description) = payload.description {
        project.description = description;
    }
    if let Some(tech) = payload.tech {
        project.tech = Vec::from(tech);
    }

    info!(user_id = claims.user_id, project_id = id, "project updated");
    Ok(Json(json!({
        "message": "Project updated successfully",
        "project": project.clone(),
    })))
}

#[instrument(skip(state, claims))]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Path(id): Path<u64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut portfolio = state.portfolio()?;
    let deleted = portfolio
        .remove_project(id)
        .ok_or_else(|| ApiError::NotFound("Project not found".into()))?;

    info!(user_id = claims.user_id, project_id = id, "project deleted");
    Ok(Json(json!({
        "message": "Project deleted successfully",
        "project": deleted,
    })))
}
