pub mod project;
pub mod task;
pub mod team;
pub mod user;
pub mod user_team;

/*
 Users sign up as Member, the one Admin comes from seeding.
 Teams own projects, projects own tasks, membership goes through user_team.
 A task may be assigned to any user, not just a teammate of the owning
 project's team. Matches what the UI actually allows.
 */
