use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::dashboard::DashboardRes;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[get("")]
async fn dashboard(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
) -> ApiResult<DashboardRes> {
    Ok(ApiResponse::Ok(db.dashboard().await?))
}
