use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const ADMIN_ROLE: &str = "admin";

/// JWT claims carried by admin console tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Who is calling. Only admins may change content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Admin(AdminClaims),
    Anonymous,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        matches!(self, Identity::Admin(_))
    }

    pub fn subject(&self) -> &str {
        match self {
            Identity::Admin(claims) => &claims.sub,
            Identity::Anonymous => "anonymous",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminSession {
    pub token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminLoginInput {
    pub username: String,
    pub password: String,
}
