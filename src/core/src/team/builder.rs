use crate::{Confederation, ConfederationSet, POT_COUNT, Team};

#[derive(Default)]
pub struct TeamBuilder {
    id: Option<String>,
    name: Option<String>,
    confederation: Option<Confederation>,
    pot: Option<u8>,
    iso2: Option<String>,
    avoid_confederations: Option<ConfederationSet>,
}

impl TeamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn confederation(mut self, confederation: Confederation) -> Self {
        self.confederation = Some(confederation);
        self
    }

    pub fn pot(mut self, pot: u8) -> Self {
        self.pot = Some(pot);
        self
    }

    pub fn iso2(mut self, iso2: impl Into<String>) -> Self {
        self.iso2 = Some(iso2.into());
        self
    }

    pub fn avoid_confederations(mut self, avoid: impl IntoIterator<Item = Confederation>) -> Self {
        self.avoid_confederations = Some(avoid.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<Team, String> {
        let id = self.id.ok_or("id is required")?;

        let pot = self.pot.ok_or("pot is required")?;
        if pot == 0 || pot as usize > POT_COUNT {
            return Err(format!("team {}: pot {} is out of range 1..={}", id, pot, POT_COUNT));
        }

        if let Some(avoid) = &self.avoid_confederations {
            if avoid.is_empty() {
                return Err(format!("team {}: avoid set must not be empty", id));
            }
        }

        Ok(Team {
            name: self.name.unwrap_or_else(|| id.clone()),
            confederation: self.confederation.ok_or("confederation is required")?,
            pot,
            iso2: self.iso2,
            avoid_confederations: self.avoid_confederations,
            id,
        })
    }
}
