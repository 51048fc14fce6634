use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::warn;

use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::repo::User;

/// Verifies an HTTP Basic `email:password` pair against the stored hash and
/// yields the matching user. Not attached to any route in the public router;
/// handlers opt in by taking it as an argument.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or(ApiError::Authentication)?;

        let (email, password) = decode_basic(header).ok_or_else(|| {
            warn!("malformed Authorization header");
            ApiError::Authentication
        })?;

        // First match wins when the email is duplicated.
        let user = User::find_by_email(&state.db, &email)
            .await?
            .ok_or_else(|| {
                warn!(email = %email, "login unknown email");
                ApiError::Authentication
            })?;

        if !verify_password(&password, &user.password)? {
            warn!(email = %email, user_id = user.user_id, "login invalid password");
            return Err(ApiError::Authentication);
        }

        Ok(CurrentUser(user))
    }
}

fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header
        .strip_prefix("Basic ")
        .or_else(|| header.strip_prefix("basic "))?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (email, password) = decoded.split_once(':')?;
    Some((email.to_string(), password.to_string()))
}
