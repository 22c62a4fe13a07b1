use actix_web::{patch, web};
use entity::task::TaskStatus;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::project::UpdateStatusReq;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::TaskDto;
use crate::utils::webutils::Identity;

#[patch("/{id}/status")]
async fn update_task_status(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusReq>,
) -> ApiResult<TaskDto> {
    let status: TaskStatus = body
        .status
        .parse()
        .map_err(|_| AppError::Validation(format!("unknown task status: {}", body.status)))?;

    let task = db.update_task_status(path.into_inner(), status).await?;
    Ok(ApiResponse::Ok(db.task_dto(task).await?))
}
