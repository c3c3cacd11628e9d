use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            AdminCredentials, AuthResponse, ChangePasswordRequest, InitAdminRequest,
            InitAdminResponse, LoginRequest, PublicUser, RegisterRequest, UpdateProfileRequest,
        },
        extractors::AuthUser,
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        store::Role,
    },
    error::ApiError,
    state::AppState,
};

/// Treat absent and empty fields the same for presence checks.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let (email, password, name) = match (
        non_empty(payload.email),
        non_empty(payload.password),
        non_empty(payload.name),
    ) {
        (Some(e), Some(p), Some(n)) => (e, p, n),
        _ => {
            return Err(ApiError::Validation(
                "Email, password, and name are required".into(),
            ))
        }
    };

    // Cheap early rejection before paying for the hash.
    if state.users()?.find_by_email(&email).is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::Conflict("User with this email already exists".into()));
    }

    let hash = hash_password(&password)?;

    let keys = JwtKeys::from_ref(&state);
    let (token, user) = {
        // Re-check uniqueness under the same lock as the insert so a racing
        // registration of the same email cannot slip in during the hash.
        let mut users = state.users()?;
        if users.find_by_email(&email).is_some() {
            warn!(email = %email, "email already registered");
            return Err(ApiError::Conflict("User with this email already exists".into()));
        }
        let user = users.insert(email, hash, name, Role::User);
        (keys.sign(&user)?, PublicUser::from(&user))
    };

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".into(),
            token,
            user,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let (email, password) = match (non_empty(payload.email), non_empty(payload.password)) {
        (Some(e), Some(p)) => (e, p),
        _ => return Err(ApiError::Validation("Email and password are required".into())),
    };

    // Clone what we need and drop the lock before the slow verify.
    let (user, stored_hash) = {
        let users = state.users()?;
        match users.find_by_email(&email) {
            Some(u) => (u.clone(), u.password_hash.clone()),
            None => {
                warn!(email = %email, "login with unknown email");
                return Err(ApiError::Auth("Invalid email or password".into()));
            }
        }
    };

    if !verify_password(&password, &stored_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(ApiError::Auth("Invalid email or password".into()));
    }

    let token = JwtKeys::from_ref(&state).sign(&user)?;
    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful".into(),
        token,
        user: PublicUser::from(&user),
    }))
}

/// The token may be validly signed while the account it references is gone;
/// that is a 404, not an auth failure.
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let users = state.users()?;
    let user = users
        .find_by_id(claims.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(PublicUser::from(user)))
}

#[instrument(skip_all)]
pub async fn verify(AuthUser(claims): AuthUser) -> Json<serde_json::Value> {
    Json(json!({ "valid": true, "user": claims }))
}

/// One-time bootstrap: seeds the first account as an admin. Unauthenticated
/// on purpose and only usable while the store is empty.
#[instrument(skip(state, payload))]
pub async fn init_admin(
    State(state): State<AppState>,
    payload: Option<Json<InitAdminRequest>>,
) -> Result<(StatusCode, Json<InitAdminResponse>), ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let email = non_empty(payload.email).unwrap_or_else(|| "admin@example.com".into());
    let password = non_empty(payload.password).unwrap_or_else(|| "admin123".into());
    let name = non_empty(payload.name).unwrap_or_else(|| "Admin User".into());

    if !state.users()?.is_empty() {
        return Err(ApiError::Conflict(
            "Users already exist. Cannot initialize admin.".into(),
        ));
    }

    let hash = hash_password(&password)?;

    let keys = JwtKeys::from_ref(&state);
    let (token, user) = {
        let mut users = state.users()?;
        if !users.is_empty() {
            return Err(ApiError::Conflict(
                "Users already exist. Cannot initialize admin.".into(),
            ));
        }
        let admin = users.insert_admin(email.clone(), hash, name);
        (keys.sign(&admin)?, PublicUser::from(&admin))
    };

    info!(email = %email, "admin user initialized");
    Ok((
        StatusCode::CREATED,
        Json(InitAdminResponse {
            auth: AuthResponse {
                message: "Admin user initialized successfully".into(),
                token,
                user,
            },
            credentials: AdminCredentials { email, password },
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let name = non_empty(payload.name);
    let email = non_empty(payload.email);

    let mut users = state.users()?;
    if users.find_by_id(claims.user_id).is_none() {
        return Err(ApiError::NotFound("User not found".into()));
    }

    if let Some(ref new_email) = email {
        if users.email_taken_by_other(new_email, claims.user_id) {
            warn!(user_id = claims.user_id, "profile update with taken email");
            return Err(ApiError::Conflict("Email already in use".into()));
        }
    }

    let user = users
        .find_by_id_mut(claims.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    if let Some(name) = name {
        user.name = name;
    }
    if let Some(email) = email {
        user.email = email;
    }

    info!(user_id = user.id, "profile updated");
    Ok(Json(json!({
        "message": "Profile updated successfully",
        "user": PublicUser::from(&*user),
    })))
}

#[instrument(skip(state, payload))]
pub async fn change_password(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (current, new) = match (
        non_empty(payload.current_password),
        non_empty(payload.new_password),
    ) {
        (Some(c), Some(n)) => (c, n),
        _ => {
            return Err(ApiError::Validation(
                "Current password and new password are required".into(),
            ))
        }
    };

    let stored_hash = {
        let users = state.users()?;
        users
            .find_by_id(claims.user_id)
            .map(|u| u.password_hash.clone())
            .ok_or_else(|| ApiError::NotFound("User not found".into()))?
    };

    if !verify_password(&current, &stored_hash)? {
        warn!(user_id = claims.user_id, "password change with wrong current password");
        return Err(ApiError::Auth("Current password is incorrect".into()));
    }

    let new_hash = hash_password(&new)?;

    let mut users = state.users()?;
    let user = users
        .find_by_id_mut(claims.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    user.password_hash = new_hash;

    info!(user_id = claims.user_id, "password updated");
    Ok(Json(json!({ "message": "Password updated successfully" })))
}

/// Removes the account. Outstanding tokens stay valid until they expire;
/// `me` answers 404 for them from now on.
#[instrument(skip(state))]
pub async fn delete_account(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let mut users = state.users()?;
    users
        .remove(claims.user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    info!(user_id = claims.user_id, "account deleted");
    Ok(Json(json!({ "message": "Account deleted successfully" })))
}
