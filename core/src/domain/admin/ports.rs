use std::future::Future;

use crate::domain::{
    admin::value_objects::{AdminClaims, AdminLoginInput, AdminSession, Identity},
    common::entities::app_errors::CoreError,
    health::entities::ReadinessReport,
};

/// Checks admin credentials and issues/validates console tokens.
#[cfg_attr(test, mockall::automock)]
pub trait AdminAuthenticator: Send + Sync {
    fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> impl Future<Output = Result<AdminSession, CoreError>> + Send;

    fn verify_token(
        &self,
        token: String,
    ) -> impl Future<Output = Result<AdminClaims, CoreError>> + Send;
}

pub trait AdminService: Send + Sync {
    fn login(
        &self,
        input: AdminLoginInput,
    ) -> impl Future<Output = Result<AdminSession, CoreError>> + Send;

    /// Resolves a bearer token into an admin identity.
    fn authorize_token(
        &self,
        token: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;

    fn get_overview(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ReadinessReport, CoreError>> + Send;
}
