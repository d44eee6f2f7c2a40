use crate::team::builder::TeamBuilder;
use crate::{Confederation, ConfederationSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub confederation: Confederation,
    pub pot: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,

    // Play-off placeholders that may still turn into a team from one of several confederations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avoid_confederations: Option<ConfederationSet>,
}

impl Team {
    pub fn builder() -> TeamBuilder {
        TeamBuilder::default()
    }

    pub fn avoids(&self, confederation: Confederation) -> bool {
        self.avoid_confederations
            .is_some_and(|avoid| avoid.contains(confederation))
    }

    pub fn is_placeholder(&self) -> bool {
        self.avoid_confederations.is_some()
    }
}
