//! HS256 JWT adapter for session validation.
//!
//! Validates bearer tokens signed with a shared secret:
//!
//! 1. Signature (HS256)
//! 2. Expiry, with configurable leeway
//! 3. Issuer and audience when configured
//! 4. Subject mapped to the member id
//!
//! Token issuance lives outside this service.

use async_trait::async_trait;
use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Settings for [`JwtSessionValidator`].
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: SecretString,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub leeway_secs: u64,
}

impl JwtConfig {
    pub fn new(secret: SecretString) -> Self {
        Self {
            secret,
            issuer: None,
            audience: None,
            leeway_secs: 30,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

/// Claims read from member access tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberClaims {
    /// Member id.
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

/// Production implementation of `SessionValidator`.
pub struct JwtSessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: Option<String>,
}

impl JwtSessionValidator {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        if let Some(issuer) = &config.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &config.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
            issuer: config.issuer,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<MemberClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    tracing::debug!("Token expired");
                    AuthError::TokenExpired
                }
                ErrorKind::InvalidIssuer => {
                    tracing::warn!(expected = ?self.issuer, "Invalid issuer in token");
                    AuthError::InvalidToken
                }
                ErrorKind::InvalidAudience => {
                    tracing::warn!("Invalid audience in token");
                    AuthError::InvalidToken
                }
                _ => {
                    tracing::debug!("Token validation failed: {}", e);
                    AuthError::InvalidToken
                }
            },
        )?;

        let claims = data.claims;
        let member_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Token carries a blank subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(member_id, claims.name.or(claims.nickname)))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-with-enough-bytes-for-hs256";

    fn config() -> JwtConfig {
        JwtConfig::new(SecretString::new(SECRET.to_string()))
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    fn claims(sub: &str, exp: i64) -> MemberClaims {
        MemberClaims {
            sub: sub.to_string(),
            exp,
            iss: None,
            aud: None,
            name: None,
            nickname: Some("saver".to_string()),
        }
    }

    fn sign(claims: &MemberClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn valid_token_yields_member() {
        let validator = JwtSessionValidator::new(config());
        let token = sign(&claims("member-42", now() + 600), SECRET);

        let user = validator.validate(&token).await.unwrap();

        assert_eq!(user.id().as_str(), "member-42");
        assert_eq!(user.display_name.as_deref(), Some("saver"));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let validator = JwtSessionValidator::new(config().with_leeway_secs(0));
        let token = sign(&claims("member-42", now() - 3600), SECRET);

        assert_eq!(
            validator.validate(&token).await.unwrap_err(),
            AuthError::TokenExpired
        );
    }

    #[tokio::test]
    async fn wrong_secret_is_invalid() {
        let validator = JwtSessionValidator::new(config());
        let token = sign(&claims("member-42", now() + 600), "another-secret-entirely-different");

        assert_eq!(
            validator.validate(&token).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        let validator = JwtSessionValidator::new(config());
        assert_eq!(
            validator.validate("not-a-jwt").await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[tokio::test]
    async fn issuer_is_enforced_when_configured() {
        let validator = JwtSessionValidator::new(config().with_issuer("https://auth.fincommunity.example"));

        let mut wrong = claims("member-42", now() + 600);
        wrong.iss = Some("https://elsewhere.example".to_string());
        assert!(validator.validate(&sign(&wrong, SECRET)).await.is_err());

        let mut right = claims("member-42", now() + 600);
        right.iss = Some("https://auth.fincommunity.example".to_string());
        assert!(validator.validate(&sign(&right, SECRET)).await.is_ok());
    }

    #[tokio::test]
    async fn audience_is_enforced_when_configured() {
        let validator = JwtSessionValidator::new(config().with_audience("fincommunity-api"));

        let mut token_claims = claims("member-42", now() + 600);
        token_claims.aud = Some("other-api".to_string());
        assert!(validator.validate(&sign(&token_claims, SECRET)).await.is_err());

        token_claims.aud = Some("fincommunity-api".to_string());
        assert!(validator.validate(&sign(&token_claims, SECRET)).await.is_ok());
    }

    #[tokio::test]
    async fn blank_subject_is_invalid() {
        let validator = JwtSessionValidator::new(config());
        let token = sign(&claims("  ", now() + 600), SECRET);

        assert_eq!(
            validator.validate(&token).await.unwrap_err(),
            AuthError::InvalidToken
        );
    }

    #[test]
    fn debug_output_hides_key_material() {
        let validator = JwtSessionValidator::new(config());
        assert!(!format!("{:?}", validator).contains(SECRET));
    }
}
