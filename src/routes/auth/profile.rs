use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::auth::UserDto;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

/// 404 when the token's subject has been deleted since issuance.
#[get("")]
async fn profile(db: web::Data<Arc<PostgresService>>, ident: Identity) -> ApiResult<UserDto> {
    let user = db.get_user_by_id(&ident.0.sub).await?;
    Ok(ApiResponse::Ok(user.into()))
}
