use crate::{DrawError, GROUP_COUNT, POT_COUNT, Team};
use itertools::Itertools;

/// Immutable set of the 48 drawn teams, validated once on construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    teams: Vec<Team>,
}

impl Catalog {
    pub fn new(teams: Vec<Team>) -> Result<Self, DrawError> {
        if let Some(team) = teams.iter().find(|t| t.pot == 0 || t.pot as usize > POT_COUNT) {
            return Err(DrawError::InvalidCatalog(format!(
                "team {} has pot {}, expected 1..={}",
                team.id, team.pot, POT_COUNT
            )));
        }

        if let Some(team) = teams
            .iter()
            .find(|t| t.avoid_confederations.is_some_and(|avoid| avoid.is_empty()))
        {
            return Err(DrawError::InvalidCatalog(format!(
                "team {} declares an empty avoid set",
                team.id
            )));
        }

        let duplicates: Vec<&str> = teams.iter().map(|t| t.id.as_str()).duplicates().collect();
        if !duplicates.is_empty() {
            return Err(DrawError::InvalidCatalog(format!(
                "duplicate team ids: {}",
                duplicates.join(", ")
            )));
        }

        for pot in 1..=POT_COUNT as u8 {
            let size = teams.iter().filter(|t| t.pot == pot).count();
            if size != GROUP_COUNT {
                return Err(DrawError::InvalidCatalog(format!(
                    "pot {} has {} teams, expected {}",
                    pot, size, GROUP_COUNT
                )));
            }
        }

        Ok(Catalog { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn pot(&self, number: u8) -> Pot<'_> {
        Pot {
            number,
            teams: self.teams.iter().filter(|t| t.pot == number).collect(),
        }
    }

    pub fn pots(&self) -> Vec<Pot<'_>> {
        (1..=POT_COUNT as u8).map(|number| self.pot(number)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Pot<'c> {
    pub number: u8,
    pub teams: Vec<&'c Team>,
}

impl<'c> Pot<'c> {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn contains(&self, team_id: &str) -> bool {
        self.teams.iter().any(|t| t.id == team_id)
    }
}
