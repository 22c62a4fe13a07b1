use actix_web::{get, web};
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::TeamDto;
use crate::utils::webutils::Identity;

#[get("")]
async fn list_teams(
    db: web::Data<Arc<PostgresService>>,
    _ident: Identity,
) -> ApiResult<Vec<TeamDto>> {
    let teams = db.list_teams().await?;

    let mut out = Vec::with_capacity(teams.len());
    for team in teams {
        let members = db.team_members(&team).await?;
        out.push(TeamDto::from_parts(team, members));
    }

    Ok(ApiResponse::Ok(out))
}
