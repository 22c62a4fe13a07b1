use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::project::ProjectDto;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::Identity;

#[get("")]
async fn list_projects(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
) -> ApiResult<Vec<ProjectDto>> {
    let projects = db.list_projects().await?;

    let mut out = Vec::with_capacity(projects.len());
    for project in projects {
        out.push(db.project_dto(project).await?);
    }

    Ok(ApiResponse::Ok(out))
}
