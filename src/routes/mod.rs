use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/auth")
                    .service(auth::register::register)
                    .service(auth::login::login)
                    .service(
                        web::scope("/profile")
                            .wrap(bearer.clone())
                            .service(auth::profile::profile),
                    ),
            )
            .service(
                web::scope("/teams")
                    .wrap(bearer.clone())
                    .service(team::list::list_teams)
                    .service(team::get::get_team)
                    .service(team::create::create_team)
                    .service(team::update::update_team)
                    .service(team::delete::delete_team)
                    .service(team::members::add_member)
                    .service(team::members::remove_member),
            )
            .service(
                web::scope("/projects")
                    .wrap(bearer.clone())
                    .service(project::list::list_projects)
                    .service(project::get::get_project)
                    .service(project::create::create_project)
                    .service(project::update::update_project)
                    .service(project::delete::delete_project)
                    .service(project::status::update_project_status),
            )
            .service(
                web::scope("/tasks")
                    .wrap(bearer.clone())
                    .service(task::list::list_tasks)
                    .service(task::list::list_tasks_for_project)
                    .service(task::get::get_task)
                    .service(task::create::create_task)
                    .service(task::update::update_task)
                    .service(task::delete::delete_task)
                    .service(task::status::update_task_status)
                    .service(task::assign::assign_task),
            )
            .service(
                web::scope("/users")
                    .wrap(bearer.clone())
                    .service(user::list::list_users)
                    .service(user::get::get_user)
                    .service(user::personnel::create_personnel),
            )
            .service(
                web::scope("/dashboard")
                    .wrap(bearer)
                    .service(dashboard::dashboard),
            ),
    );
}
