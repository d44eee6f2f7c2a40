use crate::{Catalog, Confederation, Draw, GROUP_CAPACITY, GROUP_COUNT, HostPlacement};
use itertools::Itertools;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawViolation {
    GroupCount { expected: usize, found: usize },
    GroupSize { group: char, size: usize },
    PotRepeated { group: char, pot: u8 },
    TeamMissing(String),
    TeamDuplicated(String),
    UnknownTeam(String),
    ConfederationCap { group: char, confederation: Confederation, count: usize },
    AvoidConflict { group: char, team: String, other: String },
    HostMisplaced { team: String, expected: char, found: Option<char> },
}

impl Display for DrawViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawViolation::GroupCount { expected, found } => {
                write!(f, "expected {} groups, found {}", expected, found)
            }
            DrawViolation::GroupSize { group, size } => {
                write!(f, "group {} holds {} teams", group, size)
            }
            DrawViolation::PotRepeated { group, pot } => {
                write!(f, "group {} holds more than one pot {} team", group, pot)
            }
            DrawViolation::TeamMissing(id) => write!(f, "team {} was not drawn", id),
            DrawViolation::TeamDuplicated(id) => write!(f, "team {} was drawn more than once", id),
            DrawViolation::UnknownTeam(id) => write!(f, "team {} is not in the catalog", id),
            DrawViolation::ConfederationCap { group, confederation, count } => write!(
                f,
                "group {} holds {} {} teams, cap is {}",
                group,
                count,
                confederation,
                confederation.group_cap()
            ),
            DrawViolation::AvoidConflict { group, team, other } => {
                write!(f, "group {}: {} must not share a group with {}", group, team, other)
            }
            DrawViolation::HostMisplaced { team, expected, found } => match found {
                Some(found) => write!(f, "host {} drawn into {}, expected {}", team, found, expected),
                None => write!(f, "host {} missing, expected in {}", team, expected),
            },
        }
    }
}

/// Checks a finished draw against every rule of the group stage.
pub struct DrawValidator;

impl DrawValidator {
    pub fn validate(draw: &Draw<'_>, catalog: &Catalog, hosts: &[HostPlacement]) -> Vec<DrawViolation> {
        let mut violations = Vec::new();

        if draw.groups.len() != GROUP_COUNT {
            violations.push(DrawViolation::GroupCount {
                expected: GROUP_COUNT,
                found: draw.groups.len(),
            });
        }

        for group in &draw.groups {
            if group.len() != GROUP_CAPACITY {
                violations.push(DrawViolation::GroupSize {
                    group: group.name,
                    size: group.len(),
                });
            }

            for pot in group.teams.iter().map(|t| t.pot).duplicates() {
                violations.push(DrawViolation::PotRepeated { group: group.name, pot });
            }

            for (confederation, count) in group.teams.iter().map(|t| t.confederation).counts() {
                if count > confederation.group_cap() {
                    violations.push(DrawViolation::ConfederationCap {
                        group: group.name,
                        confederation,
                        count,
                    });
                }
            }

            for (team, other) in group.teams.iter().tuple_combinations() {
                if team.avoids(other.confederation) || other.avoids(team.confederation) {
                    violations.push(DrawViolation::AvoidConflict {
                        group: group.name,
                        team: team.id.clone(),
                        other: other.id.clone(),
                    });
                }
            }
        }

        let drawn: Vec<&str> = draw
            .groups
            .iter()
            .flat_map(|g| g.teams.iter().map(|t| t.id.as_str()))
            .collect();

        for id in drawn.iter().duplicates() {
            violations.push(DrawViolation::TeamDuplicated(id.to_string()));
        }

        for id in drawn.iter().filter(|id| catalog.team(id).is_none()) {
            violations.push(DrawViolation::UnknownTeam(id.to_string()));
        }

        for team in catalog.teams().iter().filter(|t| !drawn.contains(&t.id.as_str())) {
            violations.push(DrawViolation::TeamMissing(team.id.clone()));
        }

        for host in hosts {
            let found = draw.group_of(&host.team_id);
            if found != Some(host.group) {
                violations.push(DrawViolation::HostMisplaced {
                    team: host.team_id.clone(),
                    expected: host.group,
                    found,
                });
            }
        }

        violations
    }
}
