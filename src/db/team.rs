use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::team::{ActiveModel as TeamActive, Entity as Team, Model as TeamModel};
use entity::user::Model as UserModel;
use entity::user_team::Entity as UserTeam;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError> {
        Ok(Team::find()
            .order_by_asc(entity::team::Column::Name)
            .all(&self.db)
            .await?)
    }

    pub async fn get_team(&self, id: Uuid) -> Result<TeamModel, AppError> {
        Team::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn team_members(&self, team: &TeamModel) -> Result<Vec<UserModel>, AppError> {
        Ok(team.find_related(entity::user::Entity).all(&self.db).await?)
    }

    pub async fn create_team(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<TeamModel, AppError> {
        let team = TeamModel {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
        };

        Team::insert(TeamActive {
            id: Set(team.id),
            name: Set(team.name.clone()),
            description: Set(team.description.clone()),
            created_at: Set(team.created_at),
        })
        .exec(&self.db)
        .await?;
        Ok(team)
    }

    pub async fn update_team(
        &self,
        id: Uuid,
        name: String,
        description: Option<String>,
    ) -> Result<TeamModel, AppError> {
        let mut am = self.get_team(id).await?.into_active_model();
        am.name = Set(name);
        am.description = Set(description);
        Ok(am.update(&self.db).await?)
    }

    pub async fn delete_team(&self, id: Uuid) -> Result<(), AppError> {
        let team = self.get_team(id).await?;
        team.delete(&self.db).await?;
        Ok(())
    }

    /// Adding someone twice is a no-op, same as the membership table says.
    pub async fn add_team_member(&self, team_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        self.get_team(team_id).await?;
        self.get_user_by_id(&user_id).await?;

        let already = UserTeam::find()
            .filter(entity::user_team::Column::TeamId.eq(team_id))
            .filter(entity::user_team::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?
            > 0;
        if already {
            return Ok(());
        }

        UserTeam::insert(entity::user_team::ActiveModel {
            user_id: Set(user_id),
            team_id: Set(team_id),
        })
        .exec(&self.db)
        .await?;
        Ok(())
    }

    pub async fn remove_team_member(&self, team_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        UserTeam::delete_many()
            .filter(entity::user_team::Column::TeamId.eq(team_id))
            .filter(entity::user_team::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
