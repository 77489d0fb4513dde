//! Admin guard service
//!
//! Resolves the caller's identity and decides whether an administrator may
//! proceed. Handlers never see a request the guard denied.

use panel_core::entities::Admin;
use panel_core::value_objects::{Flags, SteamId};
use panel_core::{AccessDecision, DenialReason};
use tracing::{debug, instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Admin guard service
pub struct AdminGuardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminGuardService<'a> {
    /// Create a new AdminGuardService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Resolve a bearer token to a Steam64 identity
    ///
    /// A missing token or one that fails validation yields no identity.
    pub fn identify(&self, bearer: Option<&str>) -> Option<SteamId> {
        let token = bearer?;
        match self.ctx.jwt_service().validate(token) {
            Ok(steam_id) => Some(steam_id),
            Err(e) => {
                warn!(error = %e, "Ignoring unusable identity token");
                None
            }
        }
    }

    /// Decide whether `identity` may pass a guard requiring any of `required`
    ///
    /// `required == None` admits every administrator. Repository failures are
    /// returned as errors, not as denials.
    #[instrument(skip(self))]
    pub async fn authorize(
        &self,
        identity: Option<SteamId>,
        required: Option<Flags>,
    ) -> ServiceResult<AccessDecision> {
        let Some(steam_id) = identity else {
            warn!("Protected route requested without identity");
            return Ok(AccessDecision::Denied(DenialReason::MissingIdentity));
        };

        let admin = self.ctx.admin_repo().find_by_steam_id(&steam_id).await?;
        let decision = AccessDecision::evaluate(admin, required);

        match &decision {
            AccessDecision::Allowed(admin) => {
                debug!(steam_id = %steam_id, flags = %admin.flags, "Admin access granted");
            }
            AccessDecision::Denied(reason) => {
                warn!(steam_id = %steam_id, code = reason.code(), "Admin access denied");
            }
        }

        Ok(decision)
    }

    /// Like [`authorize`](Self::authorize) but turns a denial into an error
    #[instrument(skip(self))]
    pub async fn require(
        &self,
        identity: Option<SteamId>,
        required: Option<Flags>,
    ) -> ServiceResult<Admin> {
        Ok(self.authorize(identity, required).await?.into_result()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;
    use crate::services::ServiceError;

    #[tokio::test]
    async fn test_missing_identity() {
        let t = TestContext::new();
        let decision = AdminGuardService::new(&t.ctx)
            .authorize(None, None)
            .await
            .unwrap();
        assert_eq!(decision, AccessDecision::Denied(DenialReason::MissingIdentity));
    }

    #[tokio::test]
    async fn test_unknown_admin() {
        let t = TestContext::new();
        let decision = AdminGuardService::new(&t.ctx)
            .authorize(Some(SteamId::from_account_id(999)), None)
            .await
            .unwrap();
        assert_eq!(decision, AccessDecision::Denied(DenialReason::UnknownAdmin));
    }

    #[tokio::test]
    async fn test_insufficient_flags() {
        let t = TestContext::new();
        let moderator = t.add_admin(10, "mod helper");

        let err = AdminGuardService::new(&t.ctx)
            .require(Some(moderator), Some(Flags::ADMIN))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Denied(DenialReason::InsufficientFlags)));
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_any_matching_flag_allows() {
        let t = TestContext::new();
        let admin_id = t.add_admin(11, "mod admin");

        let admin = AdminGuardService::new(&t.ctx)
            .require(Some(admin_id), Some(Flags::ADMIN | Flags::OWNER))
            .await
            .unwrap();
        assert_eq!(admin.steam_id, admin_id);
    }

    #[tokio::test]
    async fn test_repository_failure_is_error() {
        let t = TestContext::new();
        let admin_id = t.add_admin(12, "owner");
        t.admins.set_unavailable(true);

        let err = AdminGuardService::new(&t.ctx)
            .authorize(Some(admin_id), None)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_identify() {
        let t = TestContext::new();
        let guard = AdminGuardService::new(&t.ctx);
        let steam_id = SteamId::from_account_id(13);
        let token = t.token_for(steam_id);

        assert_eq!(guard.identify(Some(&token)), Some(steam_id));
        assert_eq!(guard.identify(Some("garbage")), None);
        assert_eq!(guard.identify(None), None);
    }
}
