use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{CreateTeamReq, TeamDto};
use crate::utils::webutils::AdminOnly;

#[post("")]
async fn create_team(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    body: web::Json<CreateTeamReq>,
) -> ApiResult<TeamDto> {
    let body = body.into_inner();
    info!("creating team: {}", body.name);

    let team = db.create_team(body.name, body.description).await?;
    Ok(ApiResponse::Created(TeamDto::from_parts(team, Vec::new())))
}
