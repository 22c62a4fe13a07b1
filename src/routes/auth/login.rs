use actix_web::{post, web};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::JwtConfig;
use crate::db::postgres_service::PostgresService;
use crate::types::auth::{AuthRes, LoginReq};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::{password, token};

#[post("/login")]
async fn login(
    db: web::Data<Arc<PostgresService>>,
    jwt: web::Data<JwtConfig>,
    body: web::Json<LoginReq>,
) -> ApiResult<AuthRes> {
    let body = body.into_inner();
    info!("login attempt: {}", body.email);

    // unknown email and wrong password fail the same way
    let user = match db.find_user_by_email(&body.email).await? {
        Some(user) => user,
        None => {
            warn!("login failed for {}", body.email);
            return Err(AppError::Unauthorized);
        }
    };

    if !password::verify(&body.password, &user.password_hash) {
        warn!("login failed for {}", body.email);
        return Err(AppError::Unauthorized);
    }

    info!("login successful: {}", user.id);

    let token = token::issue(&user, &jwt)?;
    Ok(ApiResponse::Ok(AuthRes {
        token,
        user: user.into(),
    }))
}
