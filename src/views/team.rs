//! Team card and the team info popup.

use serde::Serialize;
use uuid::Uuid;

use crate::model::Team;

/// Entry in a project's team list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamCard {
    pub id: Uuid,
    /// Material icon name for the role
    pub icon: &'static str,
    pub role: &'static str,
    pub name: String,
}

impl TeamCard {
    pub fn new(team: &Team) -> Self {
        Self {
            id: team.id(),
            icon: team.role.icon(),
            role: team.role.name(),
            name: team.name.clone(),
        }
    }
}

/// A labelled line of the team info popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoLine {
    pub label: &'static str,
    pub value: String,
}

impl InfoLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Lines shown in the team info popup, in display order.
pub fn team_info_lines(team: &Team) -> Vec<InfoLine> {
    vec![
        InfoLine::new("Company in charge", team.name.as_str()),
        InfoLine::new("Company's role", team.role.name()),
        InfoLine::new("Description", team.description.as_str()),
        InfoLine::new("Contact Name", team.contact_name.as_str()),
        InfoLine::new("Phone number", team.contact_phone.as_str()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TeamData, TeamRole};

    #[test]
    fn test_team_card() {
        let team = Team::new(TeamData::new("Pipes Inc", TeamRole::Mep), None).unwrap();
        let card = TeamCard::new(&team);
        assert_eq!(card.icon, "plumbing");
        assert_eq!(card.role, "MEP");
        assert_eq!(card.name, "Pipes Inc");
    }

    #[test]
    fn test_team_info_lines() {
        let team = Team::new(
            TeamData::new("Acme", TeamRole::BimManager)
                .with_description("Coordination")
                .with_contact("Ana", "555-0100"),
            None,
        )
        .unwrap();

        let lines = team_info_lines(&team);
        let labels: Vec<_> = lines.iter().map(|line| line.label).collect();
        assert_eq!(
            labels,
            [
                "Company in charge",
                "Company's role",
                "Description",
                "Contact Name",
                "Phone number"
            ]
        );
        assert_eq!(lines[1].value, "BIM Manager");
        assert_eq!(lines[4].value, "555-0100");
    }
}
