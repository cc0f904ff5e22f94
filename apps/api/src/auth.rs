use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Extension, State};
use axum::http::{HeaderMap, StatusCode};
use nairavest_application::ThrottleKey;
use nairavest_core::{AppError, UserIdentity};
use nairavest_domain::PhoneNumber;
use tower_sessions::cookie::time::Duration;
use tower_sessions::{Expiry, Session};

use crate::dto::{LoginRequest, LoginResponse, UserIdentityResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub const SESSION_USER_KEY: &str = "user_identity";

/// Session lifetime when the remember flag is set.
const REMEMBER_SESSION_DAYS: i64 = 30;

/// POST /auth/login - Authenticate with phone+password.
pub async fn login_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let phone = PhoneNumber::new(payload.phone)?;

    if payload.password.is_empty() {
        return Err(AppError::Validation("password is required".to_owned()).into());
    }

    let origin = client_origin(&headers, peer);
    let key = ThrottleKey::new(phone.as_str(), &origin);

    let account = state
        .login_throttle_service
        .attempt(&phone, &payload.password, &key)
        .await?;

    let identity = UserIdentity::new(account.id.to_string(), account.phone, account.display_name);

    // OWASP Session Management: regenerate session ID on privilege change.
    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    session
        .insert(SESSION_USER_KEY, &identity)
        .await
        .map_err(|error| {
            AppError::Internal(format!("failed to persist session identity: {error}"))
        })?;

    if payload.remember {
        session
            .set_expiry(Some(Expiry::OnInactivity(Duration::days(
                REMEMBER_SESSION_DAYS,
            ))));
    }

    Ok(Json(LoginResponse {
        status: "authenticated".to_owned(),
    }))
}

/// POST /auth/logout - Destroy the current session.
pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /auth/me - Return the signed-in identity.
pub async fn me_handler(
    Extension(identity): Extension<UserIdentity>,
) -> ApiResult<Json<UserIdentityResponse>> {
    Ok(Json(UserIdentityResponse::from(identity)))
}

/// Resolves the client network origin for throttle bucketing: the first
/// `X-Forwarded-For` entry when present, the peer address otherwise.
fn client_origin(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| peer.ip().to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn peer() -> SocketAddr {
        SocketAddr::from(([192, 0, 2, 7], 4242))
    }

    #[test]
    fn origin_prefers_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );

        assert_eq!(client_origin(&headers, peer()), "203.0.113.9");
    }

    #[test]
    fn origin_falls_back_to_peer_address() {
        assert_eq!(client_origin(&HeaderMap::new(), peer()), "192.0.2.7");
    }
}
