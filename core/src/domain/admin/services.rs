use tracing::{info, warn};

use crate::domain::{
    admin::{
        ports::{AdminAuthenticator, AdminService},
        value_objects::{ADMIN_ROLE, AdminLoginInput, AdminSession, Identity},
    },
    common::{
        entities::app_errors::CoreError, policies::ensure_policy, ports::Repository,
        services::Service,
    },
    exercise::{entities::ExerciseLog, ports::ExerciseEstimator},
    food::{entities::Food, ports::NutritionProvider},
    health::{entities::ReadinessReport, ports::HealthCheckService},
    recipe::entities::Recipe,
    recognition::ports::VisionClient,
    workout::entities::Workout,
};

impl<R, W, F, L, V, P, S, E, A> AdminService for Service<R, W, F, L, V, P, S, E, A>
where
    R: Repository<Recipe>,
    W: Repository<Workout>,
    F: Repository<Food>,
    L: Repository<ExerciseLog>,
    V: VisionClient,
    P: NutritionProvider,
    S: NutritionProvider,
    E: ExerciseEstimator,
    A: AdminAuthenticator,
{
    async fn login(&self, input: AdminLoginInput) -> Result<AdminSession, CoreError> {
        let username = input.username.trim().to_string();
        if username.is_empty() || input.password.is_empty() {
            return Err(CoreError::Invalid(
                "username and password are required".to_string(),
            ));
        }

        match self
            .admin_authenticator
            .authenticate(username.clone(), input.password)
            .await
        {
            Ok(session) => {
                info!(%username, "admin signed in");
                Ok(session)
            }
            Err(e) => {
                warn!(%username, error = %e, "admin sign-in rejected");
                Err(e)
            }
        }
    }

    async fn authorize_token(&self, token: String) -> Result<Identity, CoreError> {
        let claims = self.admin_authenticator.verify_token(token).await?;
        if claims.role != ADMIN_ROLE {
            return Err(CoreError::Unauthorized);
        }
        Ok(Identity::Admin(claims))
    }

    async fn get_overview(&self, identity: Identity) -> Result<ReadinessReport, CoreError> {
        ensure_policy(
            self.policy.can_manage_content(&identity),
            "admin access required",
        )?;
        self.readiness().await
    }
}
