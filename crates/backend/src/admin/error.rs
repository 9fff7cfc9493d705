use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::panel::RenderError;

pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";

/// Terminal outcomes of an admin request that produce no page content
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("missing or invalid access token")]
    Unauthenticated,
    #[error("access denied")]
    AccessDenied,
    #[error("admin page '{0}' not found")]
    PageNotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RenderError> for AdminError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::AccessDenied => AdminError::AccessDenied,
            RenderError::Internal(e) => AdminError::Internal(e),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        match self {
            AdminError::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, ACCESS_DENIED_MESSAGE).into_response()
            }
            AdminError::AccessDenied => (StatusCode::FORBIDDEN, ACCESS_DENIED_MESSAGE).into_response(),
            AdminError::PageNotFound(_) => {
                (StatusCode::NOT_FOUND, "Page not found").into_response()
            }
            AdminError::Internal(e) => {
                tracing::error!("Admin page failed: {e:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
