use actix_web::{delete, post, web};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::postgres_service::PostgresService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::team::AddMemberReq;
use crate::utils::webutils::AdminOnly;

#[derive(Serialize)]
pub struct Response {
    pub message: String,
}

#[post("/{id}/members")]
async fn add_member(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<Uuid>,
    body: web::Json<AddMemberReq>,
) -> ApiResult<Response> {
    db.add_team_member(path.into_inner(), body.user_id).await?;
    Ok(ApiResponse::Ok(Response {
        message: "Member added successfully".to_string(),
    }))
}

#[delete("/{id}/members/{user_id}")]
async fn remove_member(
    db: web::Data<Arc<PostgresService>>,
    _admin: AdminOnly,
    path: web::Path<(Uuid, Uuid)>,
) -> ApiResult<Response> {
    let (team_id, user_id) = path.into_inner();
    db.remove_team_member(team_id, user_id).await?;
    Ok(ApiResponse::Ok(Response {
        message: "Member removed successfully".to_string(),
    }))
}
