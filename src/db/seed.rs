use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::password;
use chrono::{DateTime, Duration, Utc};
use entity::project::{ActiveModel as ProjectActive, Entity as Project, ProjectStatus};
use entity::task::{ActiveModel as TaskActive, Entity as Task, TaskStatus};
use entity::team::{ActiveModel as TeamActive, Entity as Team};
use entity::user::{ActiveModel as UserActive, Entity as User, UserRole};
use entity::user_team::{ActiveModel as UserTeamActive, Entity as UserTeam};
use sea_orm::{ConnectionTrait, EntityTrait, Set, TransactionTrait};
use tracing::info;
use uuid::Uuid;

impl PostgresService {
    /// One-shot bootstrap so a fresh instance has an admin to log in with
    /// and some data on the dashboard. Runs only against an empty user table.
    pub async fn seed_if_empty(&self) -> Result<(), AppError> {
        if self.count_users().await? > 0 {
            return Ok(());
        }

        info!("Seeding database...");
        let now = Utc::now();

        let admin_id = Uuid::new_v4();
        let member1_id = Uuid::new_v4();
        let member2_id = Uuid::new_v4();
        let team1_id = Uuid::new_v4();
        let team2_id = Uuid::new_v4();
        let project1_id = Uuid::new_v4();
        let project2_id = Uuid::new_v4();

        let txn = self.db.begin().await?;

        insert_user(
            &txn,
            admin_id,
            "Admin User",
            "admin@crewtrack.local",
            password::hash("Admin123!")?,
            UserRole::Admin,
            now,
        )
        .await?;
        insert_user(
            &txn,
            member1_id,
            "John Doe",
            "john@crewtrack.local",
            password::hash("Member123!")?,
            UserRole::Member,
            now,
        )
        .await?;
        insert_user(
            &txn,
            member2_id,
            "Jane Smith",
            "jane@crewtrack.local",
            password::hash("Member123!")?,
            UserRole::Member,
            now,
        )
        .await?;

        Team::insert(TeamActive {
            id: Set(team1_id),
            name: Set("Development Team".to_string()),
            description: Set(Some("Main development team".to_string())),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;
        Team::insert(TeamActive {
            id: Set(team2_id),
            name: Set("QA Team".to_string()),
            description: Set(Some("Quality Assurance team".to_string())),
            created_at: Set(now),
        })
        .exec(&txn)
        .await?;

        for (user_id, team_id) in [
            (member1_id, team1_id),
            (member2_id, team1_id),
            (member2_id, team2_id),
        ] {
            UserTeam::insert(UserTeamActive {
                user_id: Set(user_id),
                team_id: Set(team_id),
            })
            .exec(&txn)
            .await?;
        }

        Project::insert(ProjectActive {
            id: Set(project1_id),
            name: Set("E-Commerce Platform".to_string()),
            description: Set(Some("Building a new e-commerce platform".to_string())),
            status: Set(ProjectStatus::InProgress),
            start_date: Set(Some(now - Duration::days(30))),
            end_date: Set(Some(now + Duration::days(60))),
            team_id: Set(team1_id),
        })
        .exec(&txn)
        .await?;
        Project::insert(ProjectActive {
            id: Set(project2_id),
            name: Set("Mobile App".to_string()),
            description: Set(Some("iOS and Android mobile application".to_string())),
            status: Set(ProjectStatus::NotStarted),
            start_date: Set(Some(now + Duration::days(10))),
            end_date: Set(Some(now + Duration::days(100))),
            team_id: Set(team1_id),
        })
        .exec(&txn)
        .await?;

        let tasks: [(&str, &str, TaskStatus, Uuid, DateTime<Utc>); 3] = [
            (
                "Setup Database",
                "Configure database schema",
                TaskStatus::Done,
                member1_id,
                now - Duration::days(20),
            ),
            (
                "Implement Authentication",
                "JWT authentication system",
                TaskStatus::Doing,
                member1_id,
                now + Duration::days(10),
            ),
            (
                "Create API Endpoints",
                "RESTful API endpoints",
                TaskStatus::Todo,
                member2_id,
                now + Duration::days(20),
            ),
        ];
        for (title, description, status, assignee, due) in tasks {
            Task::insert(TaskActive {
                id: Set(Uuid::new_v4()),
                project_id: Set(project1_id),
                title: Set(title.to_string()),
                description: Set(Some(description.to_string())),
                status: Set(status),
                assigned_to: Set(Some(assignee)),
                due_date: Set(Some(due)),
            })
            .exec(&txn)
            .await?;
        }

        txn.commit().await?;

        info!("Database seeding completed.");
        Ok(())
    }
}

async fn insert_user<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    full_name: &str,
    email: &str,
    password_hash: String,
    role: UserRole,
    created_at: DateTime<Utc>,
) -> Result<(), AppError> {
    User::insert(UserActive {
        id: Set(id),
        full_name: Set(full_name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash),
        role: Set(role),
        job_role: Set(None),
        created_at: Set(created_at),
    })
    .exec(conn)
    .await?;
    Ok(())
}
