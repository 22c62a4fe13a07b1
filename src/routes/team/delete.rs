use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AdminOnly;

#[delete("/{id}")]
async fn delete_team(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<Uuid>,
) -> ApiResult<()> {
    let id = path.into_inner();
    db.delete_team(id).await?;
    info!("team deleted: {id}");
    Ok(ApiResponse::NoContent)
}
