//! # Team Data Transfer Objects
//!
//! Request and response types for team and membership endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new team
///
/// Members are added only after creation, through the membership endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Team name must be between 1 and 100 characters"
    ))]
    pub name: String,

    /// Optional leader; must reference an existing leader when given
    pub leader_id: Option<i32>,
}

/// Request to update an existing team
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    /// Updated team name
    #[validate(length(
        min = 1,
        max = 100,
        message = "Team name must be between 1 and 100 characters"
    ))]
    pub name: Option<String>,

    /// Updated leader; must reference an existing leader
    pub leader_id: Option<i32>,
}

/// Request to add a programmer to a team
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct AddTeamMemberRequest {
    /// Programmer employee id to add
    pub programmer_id: i32,
}

/// Response for a single team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResponse {
    /// Team's unique identifier
    pub id:           i32,
    /// Team name
    pub name:         String,
    /// Leader employee id, if assigned
    pub leader_id:    Option<i32>,
    /// Number of members, when computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
}

impl TeamResponse {
    /// Convert a team entity model to a response DTO
    pub fn from_model(team: &entity::teams::Model, member_count: Option<u64>) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            leader_id: team.leader_id,
            member_count,
        }
    }
}

/// Composed view of one team member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberView {
    /// Programmer employee id
    pub programmer_id: i32,
    /// Identity card of the member
    pub identity_card: String,
    /// Member name
    pub name:          String,
    /// Member age
    pub age:           i32,
    /// Member sex
    pub sex:           String,
    /// Member base salary
    pub base_salary:   Decimal,
    /// Programmer category
    pub category:      String,
    /// Mastered languages
    pub languages:     Vec<String>,
}

/// Response for a team's member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMembersResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Team members
    pub members: Vec<TeamMemberView>,
}
