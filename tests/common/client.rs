use actix_web::{web, App};
use crewtrack::config::JwtConfig;
use crewtrack::db::postgres_service::PostgresService;
use crewtrack::db::user::NewUser;
use crewtrack::types::project::CreateProjectReq;
use crewtrack::utils::{password, token};
use entity::user::{Model as UserModel, UserRole};
use std::sync::Arc;
use uuid::Uuid;

use super::TestContext;

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub jwt: JwtConfig,
}

#[allow(dead_code)]
impl TestClient {
    pub fn new(ctx: &TestContext) -> Self {
        TestClient {
            db: Arc::clone(&ctx.db),
            jwt: ctx.jwt.clone(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.jwt.clone()))
            .configure(crewtrack::routes::configure_routes)
    }

    pub async fn create_admin(&self) -> (UserModel, String) {
        self.create_user_with_role(UserRole::Admin).await
    }

    pub async fn create_member(&self) -> (UserModel, String) {
        self.create_user_with_role(UserRole::Member).await
    }

    async fn create_user_with_role(&self, role: UserRole) -> (UserModel, String) {
        let suffix = Uuid::new_v4();
        let user = self
            .db
            .create_user(NewUser {
                full_name: format!("Test {role}"),
                email: format!("{role}-{suffix}@test.com").to_lowercase(),
                password_hash: password::hash("pw123456").expect("Failed to hash password"),
                role,
                job_role: None,
            })
            .await
            .expect("Failed to create user");

        let access_token = token::issue(&user, &self.jwt).expect("Failed to issue token");

        (user, access_token)
    }

    pub async fn create_team(&self, name: &str) -> entity::team::Model {
        self.db
            .create_team(name.to_string(), None)
            .await
            .expect("Failed to create team")
    }

    pub async fn create_project(&self, team_id: Uuid, name: &str) -> entity::project::Model {
        self.db
            .create_project(CreateProjectReq {
                name: name.to_string(),
                description: None,
                team_id,
                start_date: None,
                end_date: None,
            })
            .await
            .expect("Failed to create project")
    }
}
