use axum::{
    extract::{Path, State},
    Json,
};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;

use super::AppError;

// ─── Domain types ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub token: String,
    pub created_at: String,
    pub ttl_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
    #[serde(default = "default_ttl")]
    pub ttl_secs: u64,
}

fn default_ttl() -> u64 {
    300
}

// ─── GET /api/sessions/:id ───────────────────────────────────────

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Session>, AppError> {
    let key = format!("session:{id}");

    let mut conn = state.redis.clone();
    let maybe_json: Option<String> = conn.get(&key).await?;

    let json = maybe_json
        .ok_or_else(|| AppError::NotFound(format!("session '{id}' not found or expired")))?;

    let session: Session = serde_json::from_str(&json)
        .map_err(|e| AppError::Redis(format!("corrupt session blob: {e}")))?;

    Ok(Json(session))
}

// ─── POST /api/sessions ──────────────────────────────────────────

/// Stores the session as a JSON blob with a TTL — a single `SET … EX`
/// round-trip, so the overlay should attribute exactly one call to it.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<Session>, AppError> {
    if req.ttl_secs == 0 || req.ttl_secs > 86_400 {
        return Err(AppError::BadRequest(
            "ttl_secs must be between 1 and 86400".into(),
        ));
    }

    let session = Session {
        id: format!("sess_{}", &uuid::Uuid::new_v4().to_string()[..8]),
        user_id: req.user_id,
        token: format!("tok_{}", uuid::Uuid::new_v4().simple()),
        created_at: chrono::Utc::now().to_rfc3339(),
        ttl_secs: req.ttl_secs,
    };

    let key = format!("session:{}", session.id);
    let json = serde_json::to_string(&session)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let mut conn = state.redis.clone();
    let _: () = redis::cmd("SET")
        .arg(&key)
        .arg(&json)
        .arg("EX")
        .arg(session.ttl_secs)
        .query_async(&mut conn)
        .await?;

    Ok(Json(session))
}
