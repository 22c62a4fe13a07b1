use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::{CreateTaskReq, TaskDto};
use crate::utils::webutils::AdminOnly;

#[post("")]
async fn create_task(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    body: web::Json<CreateTaskReq>,
) -> ApiResult<TaskDto> {
    let body = body.into_inner();
    if body.title.trim().is_empty() {
        return Err(AppError::Validation("task title is required".to_string()));
    }

    info!("creating task: {}", body.title);

    let task = db.create_task(body).await?;
    Ok(ApiResponse::Created(db.task_dto(task).await?))
}
