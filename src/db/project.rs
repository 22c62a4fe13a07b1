use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::project::{CreateProjectReq, ProjectDto};
use entity::project::{
    ActiveModel as ProjectActive, Entity as Project, Model as ProjectModel, ProjectStatus,
};
use entity::task::Entity as Task;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn list_projects(&self) -> Result<Vec<ProjectModel>, AppError> {
        Ok(Project::find()
            .order_by_asc(entity::project::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_project(&self, id: Uuid) -> Result<ProjectModel, AppError> {
        Project::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn count_tasks_for_project(&self, project_id: Uuid) -> Result<u64, AppError> {
        Ok(Task::find()
            .filter(entity::task::Column::ProjectId.eq(project_id))
            .count(&self.db)
            .await?)
    }

    /// The list/detail shape the UI wants: project plus its team's name and
    /// how many tasks hang off it.
    pub async fn project_dto(&self, project: ProjectModel) -> Result<ProjectDto, AppError> {
        let team = self.get_team(project.team_id).await?;
        let task_count = self.count_tasks_for_project(project.id).await?;
        Ok(ProjectDto::from_parts(project, team.name, task_count))
    }

    pub async fn create_project(&self, payload: CreateProjectReq) -> Result<ProjectModel, AppError> {
        // referenced team must exist
        self.get_team(payload.team_id).await?;

        let project = ProjectModel {
            id: Uuid::new_v4(),
            name: payload.name,
            description: payload.description,
            status: ProjectStatus::NotStarted,
            start_date: payload.start_date,
            end_date: payload.end_date,
            team_id: payload.team_id,
        };

        Project::insert(ProjectActive {
            id: Set(project.id),
            name: Set(project.name.clone()),
            description: Set(project.description.clone()),
            status: Set(project.status),
            start_date: Set(project.start_date),
            end_date: Set(project.end_date),
            team_id: Set(project.team_id),
        })
        .exec(&self.db)
        .await?;
        Ok(project)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update_project(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
        status: ProjectStatus,
        team_id: Uuid,
        start_date: Option<chrono::DateTime<chrono::Utc>>,
        end_date: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<ProjectModel, AppError> {
        let project = self.get_project(id).await?;
        self.get_team(team_id).await?;

        let mut am = project.into_active_model();
        am.name = Set(name);
        am.description = Set(description);
        am.status = Set(status);
        am.team_id = Set(team_id);
        am.start_date = Set(start_date);
        am.end_date = Set(end_date);
        Ok(am.update(&self.db).await?)
    }

    pub async fn update_project_status(
        &self,
        id: Uuid,
        status: ProjectStatus,
    ) -> Result<ProjectModel, AppError> {
        let mut am = self.get_project(id).await?.into_active_model();
        am.status = Set(status);
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_project(&self, id: Uuid) -> Result<(), AppError> {
        let project = self.get_project(id).await?;
        project.delete(&self.db).await?;
        Ok(())
    }
}
