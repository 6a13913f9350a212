use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, HeaderName, request::Parts},
};

use crate::error::AppError;
use crate::state::AppState;

/// Resolves which student a request is acting as.
///
/// Authentication lives outside this service; whatever sits in front of it
/// (gateway, session layer, mobile shell) is expected to hand over an identity
/// that an implementation of this trait can read.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, headers: &HeaderMap) -> Option<i32>;
}

/// Reads the student id from a single request header.
pub struct HeaderIdentity {
    header: HeaderName,
}

impl HeaderIdentity {
    pub fn new(header: &str) -> Result<Self, axum::http::header::InvalidHeaderName> {
        Ok(Self {
            header: HeaderName::try_from(header)?,
        })
    }
}

impl IdentityResolver for HeaderIdentity {
    fn resolve(&self, headers: &HeaderMap) -> Option<i32> {
        headers
            .get(&self.header)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<i32>().ok())
            .filter(|id| *id > 0)
    }
}

/// The student the current request acts as.
///
/// Add this as a handler parameter to require a resolved identity.
pub struct CurrentStudent {
    pub student_id: i32,
}

impl FromRequestParts<AppState> for CurrentStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let student_id = state
            .identity
            .resolve(&parts.headers)
            .ok_or(AppError::Unauthenticated)?;
        Ok(CurrentStudent { student_id })
    }
}
