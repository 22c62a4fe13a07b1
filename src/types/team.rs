use crate::types::auth::UserDto;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamReq {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamReq {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberReq {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub members: Vec<UserDto>,
}

impl TeamDto {
    pub fn from_parts(team: entity::team::Model, members: Vec<entity::user::Model>) -> Self {
        TeamDto {
            id: team.id,
            name: team.name,
            description: team.description,
            created_at: team.created_at,
            members: members.into_iter().map(UserDto::from).collect(),
        }
    }
}
