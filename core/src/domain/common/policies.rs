use crate::domain::{admin::value_objects::Identity, common::entities::app_errors::CoreError};

/// Turns a policy decision into an error when access is denied.
pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

/// Content management is reserved to the admin console.
#[derive(Debug, Clone, Default)]
pub struct ContentPolicy;

impl ContentPolicy {
    pub fn can_manage_content(&self, identity: &Identity) -> Result<bool, CoreError> {
        Ok(matches!(identity, Identity::Admin(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::admin::value_objects::AdminClaims;

    #[test]
    fn admin_may_manage_content() {
        let identity = Identity::Admin(AdminClaims {
            sub: "admin".to_string(),
            role: "admin".to_string(),
            iat: 0,
            exp: 60,
        });

        assert!(ensure_policy(ContentPolicy.can_manage_content(&identity), "denied").is_ok());
    }

    #[test]
    fn anonymous_is_forbidden() {
        let result = ensure_policy(
            ContentPolicy.can_manage_content(&Identity::Anonymous),
            "insufficient permissions",
        );

        assert_eq!(
            result,
            Err(CoreError::Forbidden("insufficient permissions".to_string()))
        );
    }

    #[test]
    fn policy_errors_are_propagated() {
        let result = ensure_policy(Err(CoreError::InternalServerError), "denied");
        assert_eq!(result, Err(CoreError::InternalServerError));
    }
}
