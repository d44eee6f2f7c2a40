use crate::Group;
use serde::Serialize;

/// A completed draw: groups A..L in name order, teams in the order they were placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw<'c> {
    pub groups: Vec<Group<'c>>,
    pub attempts: usize,
}

impl<'c> Draw<'c> {
    pub fn group(&self, name: char) -> Option<&Group<'c>> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_of(&self, team_id: &str) -> Option<char> {
        self.groups
            .iter()
            .find(|g| g.contains(team_id))
            .map(|g| g.name)
    }
}
