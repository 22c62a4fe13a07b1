use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::UserDto;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AdminOnly;

#[get("")]
async fn list_users(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
) -> ApiResult<Vec<UserDto>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserDto::from).collect()))
}
