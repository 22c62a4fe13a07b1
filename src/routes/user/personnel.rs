use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::UserDto;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::CreatePersonnelReq;
use crate::utils::webutils::AdminOnly;

#[post("/personnel")]
async fn create_personnel(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    body: web::Json<CreatePersonnelReq>,
) -> ApiResult<UserDto> {
    let body = body.into_inner();
    if body.full_name.trim().is_empty() {
        return Err(AppError::Validation("full name is required".to_string()));
    }

    let user = db.create_personnel(body.full_name, body.job_role).await?;
    info!("personnel created: {}", user.id);

    Ok(ApiResponse::Ok(user.into()))
}
