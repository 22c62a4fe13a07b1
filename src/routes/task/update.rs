use actix_web::{put, web};
use entity::task::TaskStatus;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::{TaskDto, UpdateTaskReq};
use crate::utils::webutils::Identity;

#[put("/{id}")]
async fn update_task(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTaskReq>,
) -> ApiResult<TaskDto> {
    let body = body.into_inner();

    let status: TaskStatus = body
        .status
        .parse()
        .map_err(|_| AppError::Validation(format!("unknown task status: {}", body.status)))?;

    let task = db
        .update_task(
            path.into_inner(),
            body.title,
            body.description,
            status,
            body.assigned_to,
            body.due_date,
        )
        .await?;

    Ok(ApiResponse::Ok(db.task_dto(task).await?))
}
