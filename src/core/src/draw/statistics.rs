use crate::{Draw, DrawError, DrawSimulator, GROUP_COUNT, GROUP_NAMES};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;

/// Aggregate of many independent draws.
#[derive(Debug, Clone, Default)]
pub struct DrawStatistics {
    pub runs: usize,
    pub successes: usize,
    pub exhausted: usize,
    pub total_attempts: usize,
    pub placements: HashMap<String, [u32; GROUP_COUNT]>,
}

impl DrawStatistics {
    /// Runs `runs` draws in parallel. With a seed, run `n` uses `seed + n`,
    /// so the aggregate is reproducible regardless of scheduling.
    pub fn collect(simulator: &DrawSimulator<'_>, runs: usize, seed: Option<u64>) -> Self {
        (0..runs)
            .into_par_iter()
            .fold(DrawStatistics::default, |mut stats, run| {
                let result = match seed {
                    Some(seed) => {
                        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(run as u64));
                        simulator.generate_with(&mut rng)
                    }
                    None => simulator.generate(),
                };

                stats.record(&result);
                stats
            })
            .reduce(DrawStatistics::default, DrawStatistics::merge)
    }

    pub fn record(&mut self, result: &Result<Draw<'_>, DrawError>) {
        self.runs += 1;

        match result {
            Ok(draw) => {
                self.successes += 1;
                self.total_attempts += draw.attempts;

                for (group_idx, group) in draw.groups.iter().enumerate() {
                    for team in &group.teams {
                        self.placements
                            .entry(team.id.clone())
                            .or_insert([0; GROUP_COUNT])[group_idx] += 1;
                    }
                }
            }
            Err(DrawError::Exhausted { attempts }) => {
                self.exhausted += 1;
                self.total_attempts += attempts;
            }
            Err(_) => {}
        }
    }

    pub fn merge(mut self, other: DrawStatistics) -> DrawStatistics {
        self.runs += other.runs;
        self.successes += other.successes;
        self.exhausted += other.exhausted;
        self.total_attempts += other.total_attempts;

        for (team_id, counts) in other.placements {
            let entry = self.placements.entry(team_id).or_insert([0; GROUP_COUNT]);
            for (total, count) in entry.iter_mut().zip(counts) {
                *total += count;
            }
        }

        self
    }

    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }

        self.successes as f64 / self.runs as f64
    }

    pub fn average_attempts(&self) -> Option<f64> {
        if self.runs == 0 {
            return None;
        }

        Some(self.total_attempts as f64 / self.runs as f64)
    }

    pub fn frequency(&self, team_id: &str, group: char) -> u32 {
        let Some(group_idx) = GROUP_NAMES.iter().position(|name| *name == group) else {
            return 0;
        };

        self.placements
            .get(team_id)
            .map_or(0, |counts| counts[group_idx])
    }

    pub fn reachable_groups(&self, team_id: &str) -> Vec<char> {
        self.placements.get(team_id).map_or_else(Vec::new, |counts| {
            GROUP_NAMES
                .iter()
                .zip(counts)
                .filter(|(_, count)| **count > 0)
                .map(|(name, _)| *name)
                .collect()
        })
    }
}
