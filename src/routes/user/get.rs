use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::UserDto;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AdminOnly;

#[get("/{id}")]
async fn get_user(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<Uuid>,
) -> ApiResult<UserDto> {
    let user = db.get_user_by_id(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
