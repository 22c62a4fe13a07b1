use crate::db::postgres_service::PostgresService;
use crate::types::dashboard::{DashboardRes, RecentActivity};
use crate::types::error::AppError;
use chrono::Utc;
use entity::project::{Entity as Project, ProjectStatus};
use entity::task::Entity as Task;
use entity::team::Entity as Team;
use sea_orm::{EntityTrait, PaginatorTrait};

impl PostgresService {
    pub async fn dashboard(&self) -> Result<DashboardRes, AppError> {
        let total_teams = Team::find().count(&self.db).await?;
        let mut projects = Project::find().all(&self.db).await?;
        let mut tasks = Task::find().all(&self.db).await?;

        let count_status = |s: ProjectStatus, projects: &[entity::project::Model]| {
            projects.iter().filter(|p| p.status == s).count() as u64
        };

        let total_projects = projects.len() as u64;
        let projects_not_started = count_status(ProjectStatus::NotStarted, &projects);
        let projects_in_progress = count_status(ProjectStatus::InProgress, &projects);
        let projects_in_review = count_status(ProjectStatus::Review, &projects);
        let projects_completed = count_status(ProjectStatus::Completed, &projects);

        // newest first, undated entries sink to the end
        projects.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        tasks.sort_by(|a, b| b.due_date.cmp(&a.due_date));

        let now = Utc::now();
        let mut activities: Vec<RecentActivity> = Vec::new();

        for project in projects.iter().take(5) {
            activities.push(RecentActivity {
                kind: "Project".to_string(),
                description: format!("Project '{}' - {}", project.name, project.status),
                created_at: project.start_date.unwrap_or(now),
            });
        }

        for task in tasks.iter().take(5) {
            activities.push(RecentActivity {
                kind: "Task".to_string(),
                description: format!("Task '{}' - {}", task.title, task.status),
                created_at: task.due_date.unwrap_or(now),
            });
        }

        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        activities.truncate(10);

        Ok(DashboardRes {
            total_teams,
            total_projects,
            projects_not_started,
            projects_in_progress,
            projects_in_review,
            projects_completed,
            recent_activities: activities,
        })
    }
}
