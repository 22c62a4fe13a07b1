use actix_web::{put, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::{TeamDto, UpdateTeamReq};
use crate::utils::webutils::AdminOnly;

#[put("/{id}")]
async fn update_team(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTeamReq>,
) -> ApiResult<TeamDto> {
    let body = body.into_inner();
    let team = db
        .update_team(path.into_inner(), body.name, body.description)
        .await?;
    let members = db.team_members(&team).await?;
    Ok(ApiResponse::Ok(TeamDto::from_parts(team, members)))
}
