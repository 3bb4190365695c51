//! # Project Data Transfer Objects
//!
//! Request and response types for base projects and their typed detail
//! rows.

use entity::{multimedia_projects::DevelopmentTool, projects::ProjectType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Project fields shared by direct creation and typed creation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ProjectData {
    /// Project name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Project name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Free-form description
    pub description: Option<String>,

    /// Estimated duration, must be positive
    #[validate(range(min = 1, message = "Estimated time must be greater than zero"))]
    pub estimated_time: i32,

    /// Contract price, must be positive
    pub price: Decimal,

    /// Team taking the project
    pub team_id: i32,
}

/// Request to create a base project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project fields
    #[validate(nested)]
    #[serde(flatten)]
    pub data: ProjectData,

    /// Project subtype (management or multimedia)
    pub project_type: ProjectType,
}

/// Request to partially update a base project
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    /// New name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Project name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New estimated duration
    #[validate(range(min = 1, message = "Estimated time must be greater than zero"))]
    pub estimated_time: Option<i32>,

    /// New price
    pub price: Option<Decimal>,

    /// New team; must exist and be project-free
    pub team_id: Option<i32>,
}

/// Request to create a management project with its base row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateManagementProjectRequest {
    /// Base project fields; the type is forced to `management`
    #[validate(nested)]
    pub project_data: ProjectData,

    /// Database engine used by the project
    #[validate(length(
        min = 1,
        max = 50,
        message = "Database type must be between 1 and 50 characters"
    ))]
    pub database_type: String,

    /// Main programming language
    #[validate(length(
        min = 1,
        max = 50,
        message = "Programming language must be between 1 and 50 characters"
    ))]
    pub programming_language: String,

    /// Main framework
    #[validate(length(
        min = 1,
        max = 50,
        message = "Framework must be between 1 and 50 characters"
    ))]
    pub framework: String,
}

/// Request to update a management detail row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateManagementProjectRequest {
    /// New database engine
    #[validate(length(
        min = 1,
        max = 50,
        message = "Database type must be between 1 and 50 characters"
    ))]
    pub database_type: Option<String>,

    /// New programming language
    #[validate(length(
        min = 1,
        max = 50,
        message = "Programming language must be between 1 and 50 characters"
    ))]
    pub programming_language: Option<String>,

    /// New framework
    #[validate(length(
        min = 1,
        max = 50,
        message = "Framework must be between 1 and 50 characters"
    ))]
    pub framework: Option<String>,
}

/// Request to create a multimedia project with its base row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateMultimediaProjectRequest {
    /// Base project fields; the type is forced to `multimedia`
    #[validate(nested)]
    pub project_data: ProjectData,

    /// Authoring tool (flash or director)
    pub development_tool: DevelopmentTool,
}

/// Request to update a multimedia detail row
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateMultimediaProjectRequest {
    /// New authoring tool
    pub development_tool: Option<DevelopmentTool>,
}

/// Response for a single project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResponse {
    /// Unique identifier
    pub id:             i32,
    /// Project name
    pub name:           String,
    /// Description
    pub description:    Option<String>,
    /// Estimated duration
    pub estimated_time: i32,
    /// Contract price
    pub price:          Decimal,
    /// Subtype discriminator
    pub project_type:   String,
    /// Assigned team, if any
    pub team_id:        Option<i32>,
}

impl ProjectResponse {
    /// Convert a project entity model to a response DTO
    pub fn from_model(project: &entity::projects::Model) -> Self {
        Self {
            id:             project.id,
            name:           project.name.clone(),
            description:    project.description.clone(),
            estimated_time: project.estimated_time,
            price:          project.price,
            project_type:   project.project_type.to_string(),
            team_id:        project.team_id,
        }
    }
}

/// Response for a management detail row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagementProjectResponse {
    /// Owning project id
    pub project_id:           i32,
    /// Database engine
    pub database_type:        String,
    /// Main programming language
    pub programming_language: String,
    /// Main framework
    pub framework:            String,
}

impl ManagementProjectResponse {
    /// Convert a management detail model to a response DTO
    pub fn from_model(details: &entity::management_projects::Model) -> Self {
        Self {
            project_id:           details.project_id,
            database_type:        details.database_type.clone(),
            programming_language: details.programming_language.clone(),
            framework:            details.framework.clone(),
        }
    }
}

/// Response for a multimedia detail row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultimediaProjectResponse {
    /// Owning project id
    pub project_id:       i32,
    /// Authoring tool
    pub development_tool: String,
}

impl MultimediaProjectResponse {
    /// Convert a multimedia detail model to a response DTO
    pub fn from_model(details: &entity::multimedia_projects::Model) -> Self {
        Self {
            project_id:       details.project_id,
            development_tool: details.development_tool.to_string(),
        }
    }
}

/// Project joined with the detail row matching its type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectWithDetailsResponse {
    /// Base project fields
    pub project:            ProjectResponse,
    /// Present when the project type is `management`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management_details: Option<ManagementProjectResponse>,
    /// Present when the project type is `multimedia`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multimedia_details: Option<MultimediaProjectResponse>,
}
