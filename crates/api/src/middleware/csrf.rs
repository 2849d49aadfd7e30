//! CSRF protection for state-changing column links.
//!
//! A token is `hex(HMAC-SHA256(secret, "project:<id>"))`. List and confirm
//! views hand it out; move and remove requests must send it back as the
//! `csrf_token` query parameter.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use hmac::{Hmac, Mac};
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use serde::Deserialize;
use sha2::Sha256;

use crate::error::AppError;
use crate::middleware::project::project_id_param;
use crate::state::AppState;

type HmacSha256 = Hmac<Sha256>;

fn project_mac(secret: &[u8], project_id: DbId) -> Result<HmacSha256, CoreError> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| CoreError::Internal(format!("CSRF key rejected: {e}")))?;
    mac.update(format!("project:{project_id}").as_bytes());
    Ok(mac)
}

/// Issue the CSRF token for a project.
pub fn issue_token(secret: &[u8], project_id: DbId) -> Result<String, CoreError> {
    let mac = project_mac(secret, project_id)?;
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Check a submitted token in constant time. Malformed hex never verifies.
pub fn verify_token(secret: &[u8], project_id: DbId, token: &str) -> Result<bool, CoreError> {
    let Ok(signature) = hex::decode(token) else {
        return Ok(false);
    };
    let mac = project_mac(secret, project_id)?;
    Ok(mac.verify_slice(&signature).is_ok())
}

#[derive(Debug, Deserialize)]
struct CsrfParams {
    csrf_token: Option<String>,
}

/// Extractor that only succeeds when the request carries a valid CSRF token
/// for the `{project_id}` in its path. Rejects with 403 otherwise.
#[derive(Debug, Clone, Copy)]
pub struct CsrfGuard;

impl FromRequestParts<AppState> for CsrfGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let project_id = project_id_param(parts, state).await?;

        let Query(params) = Query::<CsrfParams>::try_from_uri(&parts.uri)
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let token = params.csrf_token.ok_or_else(|| {
            AppError::Core(CoreError::Forbidden("Missing CSRF token".into()))
        })?;

        if !verify_token(&state.config.csrf_secret, project_id, &token)? {
            tracing::warn!(project_id, "Rejected request with invalid CSRF token");
            return Err(AppError::Core(CoreError::Forbidden(
                "Invalid CSRF token".into(),
            )));
        }

        Ok(CsrfGuard)
    }
}
