use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamDto;
use crate::utils::webutils::Identity;

#[get("/{id}")]
async fn get_team(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
    path: web::Path<Uuid>,
) -> ApiResult<TeamDto> {
    let team = db.get_team(path.into_inner()).await?;
    let members = db.team_members(&team).await?;
    Ok(ApiResponse::Ok(TeamDto::from_parts(team, members)))
}
