use chrono::{DateTime, Utc};
use entity::user::UserRole;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterReq {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRes {
    pub token: String,
    pub user: UserDto,
}

/// Public profile, safe for client responses -- no password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserDto {
    fn from(u: entity::user::Model) -> Self {
        UserDto {
            id: u.id,
            full_name: u.full_name,
            email: u.email,
            role: u.role,
            job_role: u.job_role,
            created_at: u.created_at,
        }
    }
}
