use crate::draw::constraints::admissible;
use crate::draw::shuffle::shuffled_indices;
use crate::{Group, Team};
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;
use rand::Rng;

const COST_INADMISSIBLE: i64 = 1;

/// Backtracking matcher placing one pot into the groups, one team per group.
///
/// Groups are mutated in place. A failed [`PotSolver::solve`] leaves both the groups
/// and the used flags exactly as they were before the call.
pub struct PotSolver<'c, 'g, 'r, R: Rng + ?Sized> {
    teams: &'g [&'c Team],
    groups: &'g mut [Group<'c>],
    used: Vec<bool>,
    rng: &'r mut R,
}

impl<'c, 'g, 'r, R: Rng + ?Sized> PotSolver<'c, 'g, 'r, R> {
    pub fn new(teams: &'g [&'c Team], groups: &'g mut [Group<'c>], rng: &'r mut R) -> Self {
        debug_assert!(
            teams.len() <= groups.len(),
            "{} teams cannot fill {} groups one each",
            teams.len(),
            groups.len()
        );
        debug_assert!(groups.iter().all(|g| !g.is_full()), "pot solved into a full group");

        let used = vec![false; groups.len()];

        PotSolver {
            teams,
            groups,
            used,
            rng,
        }
    }

    pub fn solve(&mut self) -> bool {
        self.completion_exists(0) && self.place(0)
    }

    pub fn used_groups(&self) -> &[bool] {
        &self.used
    }

    fn place(&mut self, team_idx: usize) -> bool {
        if team_idx == self.teams.len() {
            return true;
        }

        let team = self.teams[team_idx];

        // Fresh order on every call so early groups are not favoured
        for group_idx in shuffled_indices(self.groups.len(), &mut *self.rng) {
            if self.used[group_idx] || !admissible(&self.groups[group_idx], team) {
                continue;
            }

            self.groups[group_idx].push(team);
            self.used[group_idx] = true;

            if self.completion_exists(team_idx + 1) && self.place(team_idx + 1) {
                return true;
            }

            self.groups[group_idx].pop();
            self.used[group_idx] = false;
        }

        false
    }

    /// Whether teams `from..` can still be matched one-to-one onto the unused groups.
    ///
    /// A group only ever receives one team of the pot, so admissibility of each
    /// (team, group) pair is fixed for the rest of the pot and this is a plain
    /// bipartite matching question. Subtrees failing it hold no solution.
    fn completion_exists(&self, from: usize) -> bool {
        let remaining = &self.teams[from..];
        if remaining.is_empty() {
            return true;
        }

        let free: Vec<usize> = (0..self.groups.len()).filter(|idx| !self.used[*idx]).collect();
        if free.len() < remaining.len() {
            return false;
        }

        let rows = remaining.iter().map(|team| {
            free.iter().map(move |group_idx| {
                if admissible(&self.groups[*group_idx], team) {
                    0
                } else {
                    COST_INADMISSIBLE
                }
            })
        });

        let Ok(costs) = Matrix::from_rows(rows) else {
            return false;
        };

        let (total, _) = kuhn_munkres_min(&costs);

        total == 0
    }
}

pub fn solve_pot<'c, R: Rng + ?Sized>(
    teams: &[&'c Team],
    groups: &mut [Group<'c>],
    rng: &mut R,
) -> bool {
    PotSolver::new(teams, groups, rng).solve()
}
