//! Axum extractors for REST API identity

use crate::ApiError;
use crate::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

/// Extracts the acting user's ID from the `X-User-Id` header.
///
/// The header is required: write endpoints attribute every change to a
/// user, and there is no anonymous fallback.
pub struct UserId(pub Uuid);

impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header_value = parts
                .headers
                .get("X-User-Id")
                .ok_or_else(|| ApiError::validation("Missing X-User-Id header", None))?;

            let user_id_str = header_value
                .to_str()
                .map_err(|_| ApiError::validation("Invalid X-User-Id header", None))?;

            let uuid = Uuid::parse_str(user_id_str).map_err(|_| {
                ApiError::validation(
                    format!("Invalid UUID in X-User-Id header: {}", user_id_str),
                    None,
                )
            })?;

            log::debug!("Using user ID from X-User-Id header: {}", uuid);
            Ok(UserId(uuid))
        }
    }
}
