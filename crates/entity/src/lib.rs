//! Entity definitions for Crewdesk
//!
//! This crate contains Sea-ORM entity definitions for the database models:
//! the employee/role hierarchy, team composition, typed projects, and the
//! authentication users table.

pub mod employees;
pub use employees::Entity as Employees;
pub mod programmers;
pub use programmers::Entity as Programmers;
pub mod programmer_languages;
pub use programmer_languages::Entity as ProgrammerLanguages;
pub mod leaders;
pub use leaders::Entity as Leaders;
pub mod teams;
pub use teams::Entity as Teams;
pub mod team_members;
pub use team_members::Entity as TeamMembers;
pub mod projects;
pub use projects::Entity as Projects;
pub mod management_projects;
pub use management_projects::Entity as ManagementProjects;
pub mod multimedia_projects;
pub use multimedia_projects::Entity as MultimediaProjects;
pub mod users;
pub use users::Entity as Users;
