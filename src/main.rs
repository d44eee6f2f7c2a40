mod config;

use color_eyre::eyre::Result;
use config::{AppConfig, Mode};
use draw_core::utils::{Logging, TimeEstimation};
use draw_core::{Catalog, Draw, DrawSettings, DrawSimulator, DrawStatistics, DrawValidator};
use draw_database::{DatabaseGenerator, DatabaseLoader};
use env_logger::Env;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let catalog = DatabaseGenerator::generate(&database?).map_err(color_eyre::eyre::Report::msg)?;

    let settings = DrawSettings::default().with_max_attempts(config.max_attempts);
    let simulator = DrawSimulator::new(&catalog, settings)?;

    match config.mode {
        Mode::OneShot | Mode::Json => {
            let draw = Logging::estimate_result(
                || match config.seed {
                    Some(seed) => simulator.generate_with(&mut StdRng::seed_from_u64(seed)),
                    None => simulator.generate(),
                },
                "draw generated",
            )?;

            verify(&draw, &catalog, &simulator);

            if config.mode == Mode::Json {
                println!("{}", serde_json::to_string_pretty(&draw)?);
            } else {
                print_draw(&draw);
            }
        }
        Mode::Stats => {
            info!("running {} draws", config.runs);

            let (stats, estimated) =
                TimeEstimation::estimate(|| DrawStatistics::collect(&simulator, config.runs, config.seed));

            info!(
                "{} draws in {} ms: {} succeeded, {} exhausted, {:.2} attempts on average",
                stats.runs,
                estimated,
                stats.successes,
                stats.exhausted,
                stats.average_attempts().unwrap_or(0.0)
            );

            print_statistics(&stats, &catalog);
        }
    }

    Ok(())
}

fn verify(draw: &Draw<'_>, catalog: &Catalog, simulator: &DrawSimulator<'_>) {
    for violation in DrawValidator::validate(draw, catalog, &simulator.settings().hosts) {
        warn!("{}", violation);
    }
}

fn print_draw(draw: &Draw<'_>) {
    for group in &draw.groups {
        let teams: Vec<String> = group
            .teams
            .iter()
            .map(|t| format!("{} ({})", t.name, t.confederation))
            .collect();

        println!("Group {}: {}", group.name, teams.join(", "));
    }
}

fn print_statistics(stats: &DrawStatistics, catalog: &Catalog) {
    for pot in catalog.pots() {
        println!("Pot {}", pot.number);

        for team in &pot.teams {
            let groups: String = stats.reachable_groups(&team.id).into_iter().collect();
            println!("  {:<24} {}", team.name, groups);
        }
    }
}
