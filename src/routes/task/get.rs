use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::TaskDto;
use crate::utils::webutils::Identity;

#[get("/{id}")]
async fn get_task(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<TaskDto> {
    let task = db.get_task(path.into_inner()).await?;
    Ok(ApiResponse::Ok(db.task_dto(task).await?))
}
