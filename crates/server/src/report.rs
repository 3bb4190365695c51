//! # Project Text Export
//!
//! Deterministic plain-text rendering of a project, its typed detail
//! block, and the team working on it. The output is byte-for-byte
//! reproducible from the same input state, so exports can be diffed.

use entity::{management_projects, multimedia_projects, projects};

/// Team fields flattened for the report.
#[derive(Debug, Clone)]
pub struct ReportTeam {
    /// Team name
    pub name:         String,
    /// Leader name, when the team has one
    pub leader_name:  Option<String>,
    /// Member names in membership order
    pub member_names: Vec<String>,
}

/// Render the plain-text report for a project.
///
/// At most one of `management`/`multimedia` is expected; the block is
/// picked by the project's own type tag.
pub fn format_project_report(
    project: &projects::Model,
    management: Option<&management_projects::Model>,
    multimedia: Option<&multimedia_projects::Model>,
    team: Option<&ReportTeam>,
) -> String {
    let mut out = String::new();

    out.push_str("PROJECT REPORT\n");
    out.push_str("==============\n");
    out.push_str(&format!("Name: {}\n", project.name));
    out.push_str(&format!(
        "Description: {}\n",
        project.description.as_deref().unwrap_or("-")
    ));
    out.push_str(&format!("Type: {}\n", project.project_type));
    out.push_str(&format!("Estimated time: {}\n", project.estimated_time));
    out.push_str(&format!("Price: {}\n", project.price));

    match project.project_type {
        projects::ProjectType::Management => {
            out.push_str("\nManagement details:\n");
            match management {
                Some(details) => {
                    out.push_str(&format!("  Database: {}\n", details.database_type));
                    out.push_str(&format!("  Language: {}\n", details.programming_language));
                    out.push_str(&format!("  Framework: {}\n", details.framework));
                },
                None => out.push_str("  (missing)\n"),
            }
        },
        projects::ProjectType::Multimedia => {
            out.push_str("\nMultimedia details:\n");
            match multimedia {
                Some(details) => {
                    out.push_str(&format!("  Tool: {}\n", details.development_tool));
                },
                None => out.push_str("  (missing)\n"),
            }
        },
    }

    out.push('\n');
    match team {
        Some(team) => {
            out.push_str(&format!("Team: {}\n", team.name));
            out.push_str(&format!(
                "Leader: {}\n",
                team.leader_name.as_deref().unwrap_or("(no leader)")
            ));
            out.push_str("Members:\n");
            if team.member_names.is_empty() {
                out.push_str("  (none)\n");
            }
            else {
                for name in &team.member_names {
                    out.push_str(&format!("  - {}\n", name));
                }
            }
        },
        None => {
            out.push_str("Team: (unassigned)\n");
        },
    }

    out
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn management_project() -> projects::Model {
        projects::Model {
            id:             1,
            name:           "Billing Portal".to_string(),
            description:    Some("Invoice management".to_string()),
            estimated_time: 12,
            price:          Decimal::new(2_500_000, 2),
            project_type:   projects::ProjectType::Management,
            team_id:        Some(4),
        }
    }

    fn management_details() -> management_projects::Model {
        management_projects::Model {
            project_id:           1,
            database_type:        "PostgreSQL".to_string(),
            programming_language: "Rust".to_string(),
            framework:            "Axum".to_string(),
        }
    }

    #[test]
    fn test_report_full_management_project() {
        let team = ReportTeam {
            name:         "Alpha".to_string(),
            leader_name:  Some("Maria Lopez".to_string()),
            member_names: vec!["Juan Perez".to_string(), "Ana Diaz".to_string()],
        };

        let report = format_project_report(&management_project(), Some(&management_details()), None, Some(&team));

        assert_eq!(
            report,
            "PROJECT REPORT\n\
             ==============\n\
             Name: Billing Portal\n\
             Description: Invoice management\n\
             Type: management\n\
             Estimated time: 12\n\
             Price: 25000.00\n\
             \n\
             Management details:\n\
             \x20\x20Database: PostgreSQL\n\
             \x20\x20Language: Rust\n\
             \x20\x20Framework: Axum\n\
             \n\
             Team: Alpha\n\
             Leader: Maria Lopez\n\
             Members:\n\
             \x20\x20- Juan Perez\n\
             \x20\x20- Ana Diaz\n"
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        let team = ReportTeam {
            name:         "Alpha".to_string(),
            leader_name:  None,
            member_names: vec!["Juan Perez".to_string()],
        };

        let first = format_project_report(&management_project(), Some(&management_details()), None, Some(&team));
        let second = format_project_report(&management_project(), Some(&management_details()), None, Some(&team));
        assert_eq!(first, second);
    }

    #[test]
    fn test_report_multimedia_project() {
        let project = projects::Model {
            id:             2,
            name:           "Kiosk Demo".to_string(),
            description:    None,
            estimated_time: 3,
            price:          Decimal::new(500_000, 2),
            project_type:   projects::ProjectType::Multimedia,
            team_id:        None,
        };
        let details = multimedia_projects::Model {
            project_id:       2,
            development_tool: multimedia_projects::DevelopmentTool::Director,
        };

        let report = format_project_report(&project, None, Some(&details), None);

        assert!(report.contains("Description: -\n"));
        assert!(report.contains("Multimedia details:\n  Tool: director\n"));
        assert!(report.contains("Team: (unassigned)\n"));
    }

    #[test]
    fn test_report_team_without_leader_or_members() {
        let team = ReportTeam {
            name:         "Bravo".to_string(),
            leader_name:  None,
            member_names: Vec::new(),
        };

        let report = format_project_report(&management_project(), Some(&management_details()), None, Some(&team));

        assert!(report.contains("Leader: (no leader)\n"));
        assert!(report.contains("Members:\n  (none)\n"));
    }
}
