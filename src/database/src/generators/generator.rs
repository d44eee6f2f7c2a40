use crate::DatabaseEntity;
use crate::loaders::TeamEntity;
use draw_core::{Catalog, Confederation, Team};
use log::debug;
use std::str::FromStr;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(data: &DatabaseEntity) -> Result<Catalog, String> {
        let teams = data
            .teams
            .iter()
            .map(DatabaseGenerator::generate_team)
            .collect::<Result<Vec<Team>, String>>()?;

        debug!(
            "generated {} teams, {} placeholders",
            teams.len(),
            teams.iter().filter(|t| t.is_placeholder()).count()
        );

        Catalog::new(teams).map_err(|e| e.to_string())
    }

    fn generate_team(team: &TeamEntity) -> Result<Team, String> {
        let mut builder = Team::builder()
            .id(&team.id)
            .name(&team.name)
            .confederation(Confederation::from_str(&team.confederation)?)
            .pot(team.pot);

        if let Some(iso2) = &team.iso2 {
            builder = builder.iso2(iso2);
        }

        if let Some(avoid) = &team.avoid_confederations {
            let avoid = avoid
                .iter()
                .map(|code| Confederation::from_str(code))
                .collect::<Result<Vec<Confederation>, String>>()?;

            builder = builder.avoid_confederations(avoid);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseLoader;

    fn entity(id: &str, confederation: &str, pot: u8) -> TeamEntity {
        TeamEntity {
            id: id.to_string(),
            name: id.to_uppercase(),
            confederation: confederation.to_string(),
            pot,
            iso2: None,
            avoid_confederations: None,
        }
    }

    #[test]
    fn test_static_catalog_generates() {
        let data = DatabaseLoader::load().unwrap();
        let catalog = DatabaseGenerator::generate(&data).unwrap();

        assert_eq!(catalog.teams().len(), 48);

        let playoff = catalog.team("po_fifa_1").unwrap();
        assert!(playoff.avoids(Confederation::Concacaf));
        assert!(playoff.avoids(Confederation::Caf));
        assert!(!playoff.avoids(Confederation::Uefa));

        let civ = catalog.team("civ").unwrap();
        assert_eq!(civ.name, "Côte d'Ivoire");
        assert_eq!(civ.iso2.as_deref(), Some("ci"));
    }

    #[test]
    fn test_unknown_confederation_is_rejected() {
        assert!(DatabaseGenerator::generate_team(&entity("atl", "ATLANTIS", 2)).is_err());

        let mut placeholder = entity("po", "OFC", 4);
        placeholder.avoid_confederations = Some(vec![String::from("MARS")]);
        assert!(DatabaseGenerator::generate_team(&placeholder).is_err());
    }

    #[test]
    fn test_incomplete_catalog_is_rejected() {
        let data = DatabaseEntity {
            teams: vec![entity("esp", "UEFA", 1), entity("mar", "CAF", 2)],
        };

        let error = DatabaseGenerator::generate(&data).unwrap_err();
        assert!(error.starts_with("Invalid catalog"), "{}", error);
    }
}
