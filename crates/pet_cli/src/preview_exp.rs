use std::process;

use clap::Parser;
use pet_core::exp::estimate_exp;
use pet_core::stage::Stage;

#[derive(Debug, Parser)]
#[command(version, about = "Preview activity-to-EXP conversion")]
struct Cli {
    #[arg(long, default_value_t = 30)]
    active_minutes: u64,
    #[arg(long, default_value_t = 500)]
    input_events: u64,
    #[arg(long, default_value_t = 300)]
    daily_cap: u64,
    #[arg(long)]
    stage: bool,
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let estimated_exp = estimate_exp(cli.active_minutes, cli.input_events, cli.daily_cap);
    let stage = cli.stage.then(|| Stage::from_exp(estimated_exp));

    if cli.json {
        let json = pet_render::exp_json(
            cli.active_minutes,
            cli.input_events,
            cli.daily_cap,
            estimated_exp,
            stage,
        );
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
        return;
    }

    print!("{}", pet_render::exp_text(estimated_exp, stage));
}
