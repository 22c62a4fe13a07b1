use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::project::{CreateProjectReq, ProjectDto};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AdminOnly;

#[post("")]
async fn create_project(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    body: web::Json<CreateProjectReq>,
) -> ApiResult<ProjectDto> {
    let body = body.into_inner();
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("project name is required".to_string()));
    }

    info!("creating project: {}", body.name);

    let project = db.create_project(body).await?;
    Ok(ApiResponse::Created(db.project_dto(project).await?))
}
