use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::task::{CreateTaskReq, TaskDto};
use chrono::{DateTime, Utc};
use entity::task::{ActiveModel as TaskActive, Entity as Task, Model as TaskModel, TaskStatus};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn list_tasks(&self) -> Result<Vec<TaskModel>, AppError> {
        Ok(Task::find()
            .order_by_asc(entity::task::Column::Title)
            .all(&self.db)
            .await?)
    }

    pub async fn list_tasks_for_project(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<TaskModel>, AppError> {
        Ok(Task::find()
            .filter(entity::task::Column::ProjectId.eq(project_id))
            .order_by_asc(entity::task::Column::Title)
            .all(&self.db)
            .await?)
    }

    pub async fn get_task(&self, id: Uuid) -> Result<TaskModel, AppError> {
        Task::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn task_dto(&self, task: TaskModel) -> Result<TaskDto, AppError> {
        let project = self.get_project(task.project_id).await?;
        let assigned_to_name = match task.assigned_to {
            Some(user_id) => Some(self.get_user_by_id(&user_id).await?.full_name),
            None => None,
        };
        Ok(TaskDto::from_parts(task, project.name, assigned_to_name))
    }

    pub async fn create_task(&self, payload: CreateTaskReq) -> Result<TaskModel, AppError> {
        // both references must resolve before anything is written
        self.get_project(payload.project_id).await?;
        if let Some(user_id) = payload.assigned_to {
            self.get_user_by_id(&user_id).await?;
        }

        let task = TaskModel {
            id: Uuid::new_v4(),
            project_id: payload.project_id,
            title: payload.title,
            description: payload.description,
            status: TaskStatus::Todo,
            assigned_to: payload.assigned_to,
            due_date: payload.due_date,
        };

        Task::insert(TaskActive {
            id: Set(task.id),
            project_id: Set(task.project_id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            status: Set(task.status),
            assigned_to: Set(task.assigned_to),
            due_date: Set(task.due_date),
        })
        .exec(&self.db)
        .await?;
        Ok(task)
    }

    pub async fn update_task(
        &self,
        id: Uuid,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        assigned_to: Option<Uuid>,
        due_date: Option<DateTime<Utc>>,
    ) -> Result<TaskModel, AppError> {
        let task = self.get_task(id).await?;
        if let Some(user_id) = assigned_to {
            self.get_user_by_id(&user_id).await?;
        }

        let mut am = task.into_active_model();
        am.title = Set(title);
        am.description = Set(description);
        am.status = Set(status);
        am.assigned_to = Set(assigned_to);
        am.due_date = Set(due_date);
        Ok(am.update(&self.db).await?)
    }

    pub async fn update_task_status(
        &self,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<TaskModel, AppError> {
        let mut am = self.get_task(id).await?.into_active_model();
        am.status = Set(status);
        Ok(am.update(&self.db).await?)
    }

    pub async fn assign_task(&self, task_id: Uuid, user_id: Uuid) -> Result<TaskModel, AppError> {
        let task = self.get_task(task_id).await?;
        self.get_user_by_id(&user_id).await?;

        let mut am = task.into_active_model();
        am.assigned_to = Set(Some(user_id));
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_task(&self, id: Uuid) -> Result<(), AppError> {
        let task = self.get_task(id).await?;
        task.delete(&self.db).await?;
        Ok(())
    }
}
