use actix_web::{put, web};
use entity::project::ProjectStatus;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::project::{ProjectDto, UpdateProjectReq};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AdminOnly;

#[put("/{id}")]
async fn update_project(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<Uuid>,
    body: web::Json<UpdateProjectReq>,
) -> ApiResult<ProjectDto> {
    let body = body.into_inner();

    let status: ProjectStatus = body
        .status
        .parse()
        .map_err(|_| AppError::Validation(format!("unknown project status: {}", body.status)))?;

    let project = db
        .update_project(
            path.into_inner(),
            body.name,
            body.description,
            status,
            body.team_id,
            body.start_date,
            body.end_date,
        )
        .await?;

    Ok(ApiResponse::Ok(db.project_dto(project).await?))
}
