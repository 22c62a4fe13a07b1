use chrono::{DateTime, Utc};
use entity::project::ProjectStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectReq {
    pub name: String,
    pub description: Option<String>,
    pub team_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

/// Full replace, like the UI sends it. Status travels as a string and is
/// parsed against the closed enum.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectReq {
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub team_id: Uuid,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusReq {
    pub status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub team_id: Uuid,
    pub team_name: String,
    pub task_count: u64,
}

impl ProjectDto {
    pub fn from_parts(project: entity::project::Model, team_name: String, task_count: u64) -> Self {
        ProjectDto {
            id: project.id,
            name: project.name,
            description: project.description,
            status: project.status,
            start_date: project.start_date,
            end_date: project.end_date,
            team_id: project.team_id,
            team_name,
            task_count,
        }
    }
}
