use crate::draw::shuffle::shuffled;
use crate::draw::solver::solve_pot;
use crate::{Catalog, Draw, DrawError, DrawSettings, GROUP_COUNT, Group, POT_COUNT, Team};
use log::{debug, info, warn};
use rand::Rng;

/// Pot that could not be completed during an attempt.
#[derive(Debug)]
struct DeadEnd {
    pot: u8,
}

pub struct DrawSimulator<'c> {
    catalog: &'c Catalog,
    settings: DrawSettings,
    hosts: Vec<(&'c Team, usize)>,
}

impl<'c> DrawSimulator<'c> {
    pub fn new(catalog: &'c Catalog, settings: DrawSettings) -> Result<Self, DrawError> {
        if settings.max_attempts == 0 {
            return Err(DrawError::InvalidSettings(String::from(
                "max_attempts must be at least 1",
            )));
        }

        let hosts = Self::resolve_hosts(catalog, &settings)?;

        Ok(DrawSimulator {
            catalog,
            settings,
            hosts,
        })
    }

    // Hosts skip constraint checks, which only holds while each of them is a
    // distinct pot 1 team going into its own group.
    fn resolve_hosts(
        catalog: &'c Catalog,
        settings: &DrawSettings,
    ) -> Result<Vec<(&'c Team, usize)>, DrawError> {
        let mut hosts: Vec<(&'c Team, usize)> = Vec::with_capacity(settings.hosts.len());

        for placement in &settings.hosts {
            let team = catalog.team(&placement.team_id).ok_or_else(|| {
                DrawError::InvalidHosts(format!("unknown host team {}", placement.team_id))
            })?;

            if team.pot != 1 {
                return Err(DrawError::InvalidHosts(format!(
                    "host {} is in pot {}, hosts must come from pot 1",
                    team.id, team.pot
                )));
            }

            let group_idx = Group::index_of(placement.group).ok_or_else(|| {
                DrawError::InvalidHosts(format!(
                    "host {} targets unknown group {}",
                    team.id, placement.group
                ))
            })?;

            if let Some((other, _)) = hosts.iter().find(|(t, _)| t.id == team.id) {
                return Err(DrawError::InvalidHosts(format!("host {} listed twice", other.id)));
            }

            if let Some((other, _)) = hosts.iter().find(|(_, idx)| *idx == group_idx) {
                return Err(DrawError::InvalidHosts(format!(
                    "hosts {} and {} both target group {}",
                    other.id, team.id, placement.group
                )));
            }

            hosts.push((team, group_idx));
        }

        Ok(hosts)
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn settings(&self) -> &DrawSettings {
        &self.settings
    }

    /// Runs a draw with the thread-local RNG.
    pub fn generate(&self) -> Result<Draw<'c>, DrawError> {
        let mut rng = rand::rng();
        self.generate_with(&mut rng)
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Draw<'c>, DrawError> {
        for attempt in 1..=self.settings.max_attempts {
            match self.attempt(rng) {
                Ok(groups) => {
                    info!("draw completed after {} attempt(s)", attempt);
                    return Ok(Draw {
                        groups,
                        attempts: attempt,
                    });
                }
                Err(dead_end) => {
                    debug!("attempt {}: dead end in pot {}, restarting draw", attempt, dead_end.pot);
                }
            }
        }

        warn!(
            "no valid draw found within {} attempts",
            self.settings.max_attempts
        );

        Err(DrawError::Exhausted {
            attempts: self.settings.max_attempts,
        })
    }

    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Group<'c>>, DeadEnd> {
        let mut groups = Group::empty_set();

        self.place_first_pot(&mut groups, rng);

        for number in 2..=POT_COUNT as u8 {
            let pot = shuffled(&self.catalog.pot(number).teams, rng);

            if !solve_pot(&pot, &mut groups, rng) {
                return Err(DeadEnd { pot: number });
            }

            debug!("pot {} placed", number);
        }

        Ok(groups)
    }

    fn place_first_pot<R: Rng + ?Sized>(&self, groups: &mut [Group<'c>], rng: &mut R) {
        let pot = shuffled(&self.catalog.pot(1).teams, rng);

        for &(team, group_idx) in &self.hosts {
            groups[group_idx].push(team);
        }

        let open_groups = (0..GROUP_COUNT).filter(|idx| !self.is_host_group(*idx));
        let remaining = pot.into_iter().filter(|team| !self.is_host(team));

        // One pot 1 team per group can never break a constraint
        for (group_idx, team) in open_groups.zip(remaining) {
            groups[group_idx].push(team);
        }
    }

    fn is_host(&self, team: &Team) -> bool {
        self.hosts.iter().any(|(host, _)| host.id == team.id)
    }

    fn is_host_group(&self, group_idx: usize) -> bool {
        self.hosts.iter().any(|(_, idx)| *idx == group_idx)
    }
}

/// One draw of `catalog` with the default hosts and attempt budget.
pub fn generate_draw(catalog: &Catalog) -> Result<Draw<'_>, DrawError> {
    DrawSimulator::new(catalog, DrawSettings::default())?.generate()
}
