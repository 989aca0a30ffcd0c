//! Session validation port - the request's current member.
//!
//! Validates bearer tokens and yields the `AuthenticatedUser` whose id is
//! the member id every WMTI operation is scoped to. Implementations exist
//! for HS256 JWTs and for tests.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Validates access tokens and extracts member identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and expiry
/// - Validate issuer and audience when configured
/// - Return `AuthError::InvalidToken` for malformed/bad signature tokens
/// - Return `AuthError::TokenExpired` for expired tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    struct TableValidator {
        tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    }

    #[async_trait]
    impl SessionValidator for TableValidator {
        async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
            self.tokens
                .read()
                .unwrap()
                .get(token)
                .cloned()
                .ok_or(AuthError::InvalidToken)
        }
    }

    #[tokio::test]
    async fn returns_member_for_known_token() {
        let mut tokens = HashMap::new();
        tokens.insert(
            "token-1".to_string(),
            AuthenticatedUser::new(UserId::new("member-1").unwrap(), None),
        );
        let validator = TableValidator {
            tokens: RwLock::new(tokens),
        };

        let user = validator.validate("token-1").await.unwrap();
        assert_eq!(user.id().as_str(), "member-1");
        assert!(matches!(
            validator.validate("nope").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn session_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
