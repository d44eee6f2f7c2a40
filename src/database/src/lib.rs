mod generators;
mod loaders;

pub use generators::*;
pub use loaders::*;

use log::info;

pub struct DatabaseEntity {
    pub teams: Vec<TeamEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Result<DatabaseEntity, serde_json::Error> {
        let teams = TeamLoader::load()?;

        info!("loaded {} teams", teams.len());

        Ok(DatabaseEntity { teams })
    }
}
