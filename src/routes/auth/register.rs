use actix_web::{post, web};
use entity::user::UserRole;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::JwtConfig;
use crate::db::postgres_service::PostgresService;
use crate::db::user::NewUser;
use crate::types::auth::{AuthRes, RegisterReq};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::{password, token};

#[post("/register")]
async fn register(
    db: web::Data<Arc<PostgresService>>,
    jwt: web::Data<JwtConfig>,
    body: web::Json<RegisterReq>,
) -> ApiResult<AuthRes> {
    let body = body.into_inner();

    if body.full_name.trim().is_empty() {
        return Err(AppError::Validation("full name is required".to_string()));
    }
    if !body.email.contains('@') {
        return Err(AppError::Validation("a valid email is required".to_string()));
    }
    if body.password.chars().count() < 6 {
        return Err(AppError::Validation(
            "password must be at least 6 characters".to_string(),
        ));
    }

    info!("registering new user: {}", body.email);

    if db.user_exists_by_email(&body.email).await? {
        warn!("registration rejected, email already taken: {}", body.email);
        return Err(AppError::Conflict(
            "user with this email already exists".to_string(),
        ));
    }

    let password_hash = password::hash(&body.password)?;
    let user = db
        .create_user(NewUser {
            full_name: body.full_name,
            email: body.email,
            password_hash,
            role: UserRole::Member,
            job_role: None,
        })
        .await?;

    info!("user registered: {}", user.id);

    let token = token::issue(&user, &jwt)?;
    Ok(ApiResponse::Ok(AuthRes {
        token,
        user: user.into(),
    }))
}
