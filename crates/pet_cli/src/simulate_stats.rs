use std::num::NonZeroU64;
use std::process;

use clap::Parser;
use pet_core::sim::{self, DecayRates, PetStats, SimParams};

#[derive(Debug, Parser)]
#[command(version, about = "Offline pet stat decay simulation")]
struct Cli {
    #[arg(long, default_value_t = 240)]
    minutes: u64,
    #[arg(long, default_value = "5")]
    tick: NonZeroU64,
    #[arg(long, default_value_t = 0.8)]
    hunger_decay: f64,
    #[arg(long, default_value_t = 0.5)]
    happy_decay: f64,
    #[arg(long, default_value_t = 0.6)]
    clean_decay: f64,
    #[arg(long, default_value_t = 0.7)]
    health_penalty: f64,
    #[arg(long, default_value_t = 20.0)]
    danger_threshold: f64,
    #[arg(long = "start-hunger", default_value_t = 100.0)]
    start_hunger: f64,
    #[arg(long = "start-happiness", default_value_t = 100.0)]
    start_happiness: f64,
    #[arg(long = "start-cleanliness", default_value_t = 100.0)]
    start_cleanliness: f64,
    #[arg(long = "start-health", default_value_t = 100.0)]
    start_health: f64,
    #[arg(long)]
    warnings: bool,
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let start = PetStats {
        hunger: cli.start_hunger,
        happiness: cli.start_happiness,
        cleanliness: cli.start_cleanliness,
        health: cli.start_health,
    };
    let params = SimParams {
        minutes: cli.minutes,
        tick: cli.tick,
        decay: DecayRates {
            hunger: cli.hunger_decay,
            happiness: cli.happy_decay,
            cleanliness: cli.clean_decay,
        },
        health_penalty: cli.health_penalty,
        danger_threshold: cli.danger_threshold,
    };

    let report = sim::simulate(start, &params);
    let warnings = cli
        .warnings
        .then(|| sim::danger_warnings(&report.stats, cli.danger_threshold));

    if cli.json {
        let json = pet_render::simulation_json(&report, warnings.as_deref());
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    print!(
        "{}",
        pet_render::simulation_text(&report, warnings.as_deref())
    );
}
