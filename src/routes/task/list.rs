use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::task::TaskDto;
use crate::utils::webutils::Identity;

#[get("")]
async fn list_tasks(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
) -> ApiResult<Vec<TaskDto>> {
    let tasks = db.list_tasks().await?;

    let mut out = Vec::with_capacity(tasks.len());
    for task in tasks {
        out.push(db.task_dto(task).await?);
    }

    Ok(ApiResponse::Ok(out))
}

#[get("/project/{project_id}")]
async fn list_tasks_for_project(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<Vec<TaskDto>> {
    let tasks = db.list_tasks_for_project(path.into_inner()).await?;

    let mut out = Vec::with_capacity(tasks.len());
    for task in tasks {
        out.push(db.task_dto(task).await?);
    }

    Ok(ApiResponse::Ok(out))
}
