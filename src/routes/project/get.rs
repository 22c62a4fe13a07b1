use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::project::ProjectDto;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[get("/{id}")]
async fn get_project(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<ProjectDto> {
    let project = db.get_project(path.into_inner()).await?;
    Ok(ApiResponse::Ok(db.project_dto(project).await?))
}
