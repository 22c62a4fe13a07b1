use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRes {
    pub total_teams: u64,
    pub total_projects: u64,
    pub projects_not_started: u64,
    pub projects_in_progress: u64,
    pub projects_in_review: u64,
    pub projects_completed: u64,
    pub recent_activities: Vec<RecentActivity>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
