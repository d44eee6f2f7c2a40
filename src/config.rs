use color_eyre::eyre::{Result, WrapErr, eyre};
use draw_core::DEFAULT_MAX_ATTEMPTS;
use std::env;

pub const DEFAULT_RUNS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    OneShot,
    Json,
    Stats,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: Mode,
    pub seed: Option<u64>,
    pub max_attempts: usize,
    pub runs: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self> {
        let mode = match lookup("MODE").as_deref() {
            None | Some("ONESHOT") => Mode::OneShot,
            Some("JSON") => Mode::Json,
            Some("STATS") => Mode::Stats,
            Some(other) => return Err(eyre!("unknown MODE {}, expected ONESHOT, JSON or STATS", other)),
        };

        let seed = lookup("DRAW_SEED")
            .map(|value| value.parse::<u64>().wrap_err("DRAW_SEED must be an unsigned integer"))
            .transpose()?;

        let max_attempts = match lookup("DRAW_MAX_ATTEMPTS") {
            Some(value) => value
                .parse::<usize>()
                .wrap_err("DRAW_MAX_ATTEMPTS must be an unsigned integer")?,
            None => DEFAULT_MAX_ATTEMPTS,
        };

        if max_attempts == 0 {
            return Err(eyre!("DRAW_MAX_ATTEMPTS must be at least 1"));
        }

        let runs = match lookup("DRAW_RUNS") {
            Some(value) => value.parse::<usize>().wrap_err("DRAW_RUNS must be an unsigned integer")?,
            None => DEFAULT_RUNS,
        };

        Ok(AppConfig {
            mode,
            seed,
            max_attempts,
            runs,
        })
    }
}
