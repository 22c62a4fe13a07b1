use actix_web::{
    dev::{Payload, ServiceRequest},
    error::ErrorUnauthorized,
    web, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use entity::user::UserRole;
use std::future::{ready, Ready};
use tracing::debug;

use crate::config::JwtConfig;
use crate::types::error::AppError;
use crate::utils::token::{decode_token, Claims};

/// Bearer validator for `HttpAuthentication::bearer`. Rejects before any
/// handler runs; on success the verified claims land in request extensions
/// for the gate extractors below.
pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let Some(cfg) = req.app_data::<web::Data<JwtConfig>>() else {
        return Err((ErrorUnauthorized("token validation unavailable"), req));
    };

    match decode_token(credentials.token(), cfg) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            Ok(req)
        }
        Err(_) => {
            debug!("rejected bearer token");
            Err((ErrorUnauthorized("invalid or expired token"), req))
        }
    }
}

/// Any authenticated caller.
pub struct Identity(pub Claims);

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .cloned()
                .map(Identity)
                .ok_or(AppError::Unauthorized),
        )
    }
}

/// Authenticated caller with the Admin role; anyone else gets 403.
pub struct AdminOnly(pub Claims);

impl FromRequest for AdminOnly {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.extensions().get::<Claims>().cloned() {
            Some(claims) if claims.role == UserRole::Admin => Ok(AdminOnly(claims)),
            Some(_) => Err(AppError::Forbidden),
            None => Err(AppError::Unauthorized),
        };
        ready(result)
    }
}
