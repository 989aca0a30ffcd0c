//! Authentication types for the domain layer.
//!
//! `AuthenticatedUser` is the current member of a request, populated by any
//! `SessionValidator` implementation after the bearer token checks out.
//! These types carry no provider-specific fields.

use super::UserId;
use thiserror::Error;

/// Member extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// The member identifier (token subject).
    pub id: UserId,

    /// Display name if the token carries one.
    pub display_name: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, display_name: Option<String>) -> Self {
        Self { id, display_name }
    }

    /// Returns the member id of the request principal.
    pub fn id(&self) -> &UserId {
        &self.id
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The authentication backend is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_exposes_member_id() {
        let user = AuthenticatedUser::new(UserId::new("member-1").unwrap(), None);
        assert_eq!(user.id().as_str(), "member-1");
    }

    #[test]
    fn service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("connection refused");
        assert_eq!(err.to_string(), "Auth service unavailable: connection refused");
    }
}
