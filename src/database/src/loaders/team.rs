use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../../data/teams.json");

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntity {
    pub id: String,
    pub name: String,
    pub confederation: String,
    pub pot: u8,
    pub iso2: Option<String>,
    #[serde(default)]
    pub avoid_confederations: Option<Vec<String>>,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<Vec<TeamEntity>, serde_json::Error> {
        Self::load_from_str(STATIC_TEAMS_JSON)
    }

    pub fn load_from_str(json: &str) -> Result<Vec<TeamEntity>, serde_json::Error> {
        serde_json::from_str(json)
    }
}
