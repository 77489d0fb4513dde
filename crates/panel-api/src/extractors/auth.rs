//! Identity and admin guard extractors
//!
//! `Identity` resolves the bearer token to a Steam64 id without rejecting.
//! `RequireAdmin<R>` runs the admin guard and rejects with the denial status.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use panel_core::entities::Admin;
use panel_core::value_objects::{Flags, SteamId};
use panel_service::AdminGuardService;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller identity, if a usable token was presented
#[derive(Debug, Clone, Copy)]
pub struct Identity(pub Option<SteamId>);

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bearer = TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
            .ok();

        let app_state = AppState::from_ref(state);
        let guard = AdminGuardService::new(app_state.service_context());

        Ok(Identity(guard.identify(
            bearer.as_ref().map(|TypedHeader(Authorization(b))| b.token()),
        )))
    }
}

/// Flag set a route demands from the caller
pub trait FlagRequirement: Send + Sync + 'static {
    /// `None` admits any administrator
    const REQUIRED: Option<Flags>;
}

/// Any administrator record passes
#[derive(Debug, Clone, Copy)]
pub struct AnyAdmin;

impl FlagRequirement for AnyAdmin {
    const REQUIRED: Option<Flags> = None;
}

/// Owners and full administrators
#[derive(Debug, Clone, Copy)]
pub struct SettingsManagers;

impl FlagRequirement for SettingsManagers {
    const REQUIRED: Option<Flags> = Some(Flags::OWNER.union(Flags::ADMIN));
}

/// Administrator admitted by the guard for requirement `R`
#[derive(Debug, Clone)]
pub struct RequireAdmin<R = AnyAdmin> {
    pub admin: Admin,
    _requirement: PhantomData<R>,
}

impl<R> RequireAdmin<R> {
    /// Unwrap the admitted administrator
    pub fn into_inner(self) -> Admin {
        self.admin
    }
}

#[async_trait]
impl<S, R> FromRequestParts<S> for RequireAdmin<R>
where
    S: Send + Sync,
    AppState: FromRef<S>,
    R: FlagRequirement,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Identity(identity) = Identity::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let admin = AdminGuardService::new(app_state.service_context())
            .require(identity, R::REQUIRED)
            .await?;

        Ok(Self {
            admin,
            _requirement: PhantomData,
        })
    }
}
