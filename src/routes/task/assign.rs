use actix_web::{patch, web};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::TaskDto;
use crate::utils::webutils::Identity;

#[patch("/{id}/assign/{user_id}")]
async fn assign_task(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<TaskDto> {
    let (task_id, user_id) = path.into_inner();

    let task = db.assign_task(task_id, user_id).await?;
    info!("task {task_id} assigned to {user_id}");

    Ok(ApiResponse::Ok(db.task_dto(task).await?))
}
