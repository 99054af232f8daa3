use axum::{
    extract::{Path, State},
    Json,
};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::AppState;

use super::AppError;

// ─── Domain types ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "viewer".into()
}

// ─── GET /api/users/:id ──────────────────────────────────────────

/// Hash lookup through the instrumented connection. The round-trip below is
/// what shows up in the overlay — no timing code lives in handlers.
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let key = format!("user:{id}");

    let mut conn = state.redis.clone();
    let map: HashMap<String, String> = conn.hgetall(&key).await?;

    if map.is_empty() {
        return Err(AppError::NotFound(format!("user '{id}' not found")));
    }

    Ok(Json(user_from_map(&map)))
}

// ─── POST /api/users ─────────────────────────────────────────────

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".into()));
    }

    let user = User {
        id: format!("usr_{}", &uuid::Uuid::new_v4().to_string()[..8]),
        name: req.name,
        email: req.email,
        role: req.role,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    let key = format!("user:{}", user.id);

    let mut conn = state.redis.clone();
    let _: () = redis::cmd("HSET")
        .arg(&key)
        .arg("id")
        .arg(&user.id)
        .arg("name")
        .arg(&user.name)
        .arg("email")
        .arg(&user.email)
        .arg("role")
        .arg(&user.role)
        .arg("created_at")
        .arg(&user.created_at)
        .query_async(&mut conn)
        .await?;

    Ok(Json(user))
}

// ─── Helpers ─────────────────────────────────────────────────────

fn user_from_map(map: &HashMap<String, String>) -> User {
    User {
        id: map.get("id").cloned().unwrap_or_default(),
        name: map.get("name").cloned().unwrap_or_default(),
        email: map.get("email").cloned().unwrap_or_default(),
        role: map.get("role").cloned().unwrap_or_default(),
        created_at: map.get("created_at").cloned().unwrap_or_default(),
    }
}
