use chrono::{DateTime, Utc};
use entity::task::TaskStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskReq {
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskReq {
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assigned_to: Option<Uuid>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    pub id: Uuid,
    pub project_id: Uuid,
    pub project_name: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assigned_to: Option<Uuid>,
    pub assigned_to_name: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskDto {
    pub fn from_parts(
        task: entity::task::Model,
        project_name: String,
        assigned_to_name: Option<String>,
    ) -> Self {
        TaskDto {
            id: task.id,
            project_id: task.project_id,
            project_name,
            title: task.title,
            description: task.description,
            status: task.status,
            assigned_to: task.assigned_to,
            assigned_to_name,
            due_date: task.due_date,
        }
    }
}
