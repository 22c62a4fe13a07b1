use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel, UserRole};
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub job_role: Option<String>,
}

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn count_users(&self) -> Result<u64, AppError> {
        Ok(User::find().count(&self.db).await?)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.db)
            .await?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(entity::user::Column::FullName)
            .all(&self.db)
            .await?)
    }

    pub async fn create_user(&self, payload: NewUser) -> Result<UserModel, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::Conflict(
                "user with this email already exists".to_string(),
            ));
        }

        let user = UserModel {
            id: Uuid::new_v4(),
            full_name: payload.full_name,
            email: payload.email,
            password_hash: payload.password_hash,
            role: payload.role,
            job_role: payload.job_role,
            created_at: Utc::now(),
        };

        let txn = self.db.begin().await?;
        User::insert(UserActive {
            id: Set(user.id),
            full_name: Set(user.full_name.clone()),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            role: Set(user.role),
            job_role: Set(user.job_role.clone()),
            created_at: Set(user.created_at),
        })
        .exec(&txn)
        .await?;
        txn.commit().await?;

        Ok(user)
    }

    /// Directory entry without a login. The email is synthesized from the
    /// name under a reserved domain and deduplicated with a counter.
    pub async fn create_personnel(
        &self,
        full_name: String,
        job_role: Option<String>,
    ) -> Result<UserModel, AppError> {
        let base: String = full_name
            .to_lowercase()
            .chars()
            .filter_map(|c| {
                if c.is_ascii_alphanumeric() {
                    Some(c)
                } else if c.is_whitespace() {
                    Some('.')
                } else {
                    None
                }
            })
            .collect();

        let pattern = format!("{base}%@personnel.local");
        let taken = User::find()
            .filter(entity::user::Column::Email.like(pattern.as_str()))
            .count(&self.db)
            .await?;

        let email = if taken == 0 {
            format!("{base}@personnel.local")
        } else {
            format!("{base}{taken}@personnel.local")
        };

        self.create_user(NewUser {
            full_name,
            email,
            // empty digest can never verify, so personnel cannot log in
            password_hash: String::new(),
            role: UserRole::Member,
            job_role,
        })
        .await
    }
}
