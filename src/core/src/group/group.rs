use crate::{Confederation, GROUP_CAPACITY, GROUP_COUNT, Team};
use serde::Serialize;

pub const GROUP_NAMES: [char; GROUP_COUNT] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L'];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<'c> {
    pub name: char,
    pub teams: Vec<&'c Team>,
}

impl<'c> Group<'c> {
    pub fn new(name: char) -> Self {
        Group {
            name,
            teams: Vec::with_capacity(GROUP_CAPACITY),
        }
    }

    /// Fresh empty groups A..L in name order.
    pub fn empty_set() -> Vec<Group<'c>> {
        GROUP_NAMES.iter().map(|name| Group::new(*name)).collect()
    }

    pub fn index_of(name: char) -> Option<usize> {
        GROUP_NAMES.iter().position(|n| *n == name)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= GROUP_CAPACITY
    }

    pub fn push(&mut self, team: &'c Team) {
        debug_assert!(!self.is_full(), "group {} is already full", self.name);
        self.teams.push(team);
    }

    pub fn pop(&mut self) -> Option<&'c Team> {
        self.teams.pop()
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.teams.iter().any(|t| t.id == team_id)
    }

    pub fn confederation_count(&self, confederation: Confederation) -> usize {
        self.teams
            .iter()
            .filter(|t| t.confederation == confederation)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(id: &str, confederation: Confederation) -> Team {
        Team::builder().id(id).confederation(confederation).pot(1).build().unwrap()
    }

    #[test]
    fn test_empty_set_is_named_a_to_l() {
        let groups = Group::empty_set();

        assert_eq!(groups.len(), GROUP_COUNT);
        assert_eq!(groups[0].name, 'A');
        assert_eq!(groups[11].name, 'L');
        assert!(groups.iter().all(|g| g.is_empty()));
    }

    #[test]
    fn test_index_of() {
        assert_eq!(Group::index_of('A'), Some(0));
        assert_eq!(Group::index_of('D'), Some(3));
        assert_eq!(Group::index_of('M'), None);
    }

    #[test]
    fn test_push_pop_keeps_insertion_order() {
        let esp = team("esp", Confederation::Uefa);
        let cro = team("cro", Confederation::Uefa);
        let mar = team("mar", Confederation::Caf);

        let mut group = Group::new('C');
        group.push(&esp);
        group.push(&mar);
        group.push(&cro);

        assert_eq!(group.confederation_count(Confederation::Uefa), 2);
        assert_eq!(group.confederation_count(Confederation::Caf), 1);
        assert!(group.contains("mar"));

        assert_eq!(group.pop().map(|t| t.id.as_str()), Some("cro"));
        assert_eq!(
            group.teams.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["esp", "mar"]
        );
    }

    #[test]
    fn test_is_full() {
        let teams: Vec<Team> = (0..GROUP_CAPACITY)
            .map(|i| team(&format!("t{}", i), Confederation::ALL[i]))
            .collect();

        let mut group = Group::new('B');
        for team in &teams {
            assert!(!group.is_full());
            group.push(team);
        }

        assert!(group.is_full());
    }
}
