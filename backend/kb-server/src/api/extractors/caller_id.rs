//! Caller identity supplied by the host application

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

pub const CALLER_ID_HEADER: &str = "X-User-Id";

/// The authenticated caller, read from the `X-User-Id` header.
///
/// A missing, non-UTF-8 or non-UUID header rejects the request with 401.
pub struct CallerId(pub Uuid);

impl FromRequestParts<AppState> for CallerId {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(CALLER_ID_HEADER) else {
                return Err(ApiError::Unauthenticated {
                    message: format!("{CALLER_ID_HEADER} header is required"),
                    location: ErrorLocation::from(Location::caller()),
                });
            };

            let parsed = header_value
                .to_str()
                .ok()
                .and_then(|value| Uuid::parse_str(value.trim()).ok());

            match parsed {
                Some(caller_id) => {
                    log::debug!("Caller {} from {} header", caller_id, CALLER_ID_HEADER);
                    Ok(CallerId(caller_id))
                }
                None => {
                    log::warn!("Malformed {} header: {:?}", CALLER_ID_HEADER, header_value);
                    Err(ApiError::Unauthenticated {
                        message: format!("{CALLER_ID_HEADER} must be a UUID"),
                        location: ErrorLocation::from(Location::caller()),
                    })
                }
            }
        }
    }
}
