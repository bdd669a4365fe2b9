use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::error;

use crate::domain::{
    admin::{
        ports::AdminAuthenticator,
        value_objects::{ADMIN_ROLE, AdminClaims, AdminSession},
    },
    common::{AdminConfig, entities::app_errors::CoreError},
};

/// Single configured admin account; the password is only kept as an argon2 hash.
#[derive(Clone)]
pub struct JwtAdminAuthenticator {
    username: String,
    password_hash: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl JwtAdminAuthenticator {
    pub fn new(config: AdminConfig) -> Result<Self, CoreError> {
        if config.jwt_secret.len() < 16 {
            return Err(CoreError::Invalid(
                "admin JWT secret must be at least 16 characters".to_string(),
            ));
        }
        if config.password.is_empty() {
            return Err(CoreError::Invalid("admin password is required".to_string()));
        }
        if config.token_ttl_minutes <= 0 {
            return Err(CoreError::Invalid("token TTL must be positive".to_string()));
        }

        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(config.password.as_bytes(), &salt)
            .map_err(|e| {
                error!("Failed to hash admin password: {}", e);
                CoreError::InternalServerError
            })?
            .to_string();

        Ok(Self {
            username: config.username,
            password_hash,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl: Duration::minutes(config.token_ttl_minutes),
        })
    }

    fn verify_password(&self, password: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(&self.password_hash).map_err(|e| {
            error!("Stored admin password hash is invalid: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    fn issue_token(&self) -> Result<AdminSession, CoreError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.token_ttl;
        let claims = AdminClaims {
            sub: self.username.clone(),
            role: ADMIN_ROLE.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| {
                error!("Failed to sign admin token: {}", e);
                CoreError::InternalServerError
            },
        )?;

        Ok(AdminSession {
            token,
            token_type: "Bearer".to_string(),
            expires_at,
        })
    }
}

impl AdminAuthenticator for JwtAdminAuthenticator {
    async fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> Result<AdminSession, CoreError> {
        let password_ok = self.verify_password(&password)?;
        if username != self.username || !password_ok {
            return Err(CoreError::Unauthorized);
        }

        self.issue_token()
    }

    async fn verify_token(&self, token: String) -> Result<AdminClaims, CoreError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<AdminClaims>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| CoreError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AdminConfig {
        AdminConfig {
            username: "admin".to_string(),
            password: "correct horse".to_string(),
            jwt_secret: "0123456789abcdef0123".to_string(),
            token_ttl_minutes: 60,
        }
    }

    #[tokio::test]
    async fn issued_token_verifies() {
        let authenticator = JwtAdminAuthenticator::new(config()).unwrap();

        let session = authenticator
            .authenticate("admin".to_string(), "correct horse".to_string())
            .await
            .unwrap();
        let claims = authenticator.verify_token(session.token).await.unwrap();

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn wrong_credentials_are_unauthorized() {
        let authenticator = JwtAdminAuthenticator::new(config()).unwrap();

        for (username, password) in [("admin", "wrong"), ("root", "correct horse")] {
            let result = authenticator
                .authenticate(username.to_string(), password.to_string())
                .await;
            assert_eq!(result, Err(CoreError::Unauthorized));
        }
    }

    #[tokio::test]
    async fn token_from_other_secret_is_rejected() {
        let issuer = JwtAdminAuthenticator::new(AdminConfig {
            jwt_secret: "another-secret-value-123".to_string(),
            ..config()
        })
        .unwrap();
        let verifier = JwtAdminAuthenticator::new(config()).unwrap();

        let session = issuer
            .authenticate("admin".to_string(), "correct horse".to_string())
            .await
            .unwrap();

        assert_eq!(
            verifier.verify_token(session.token).await,
            Err(CoreError::Unauthorized)
        );
        assert_eq!(
            verifier.verify_token("not-a-jwt".to_string()).await,
            Err(CoreError::Unauthorized)
        );
    }

    #[test]
    fn short_secret_is_rejected() {
        let result = JwtAdminAuthenticator::new(AdminConfig {
            jwt_secret: "short".to_string(),
            ..config()
        });
        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
