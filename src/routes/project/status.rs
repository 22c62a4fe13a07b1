use actix_web::{patch, web};
use entity::project::ProjectStatus;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::project::{ProjectDto, UpdateStatusReq};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[patch("/{id}/status")]
async fn update_project_status(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateStatusReq>,
) -> ApiResult<ProjectDto> {
    let status: ProjectStatus = body
        .status
        .parse()
        .map_err(|_| AppError::Validation(format!("unknown project status: {}", body.status)))?;

    let project = db.update_project_status(path.into_inner(), status).await?;
    Ok(ApiResponse::Ok(db.project_dto(project).await?))
}
