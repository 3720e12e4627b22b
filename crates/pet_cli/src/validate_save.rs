use std::path::PathBuf;
use std::process;

use clap::Parser;
use pet_core::schema;

#[derive(Debug, Parser)]
#[command(version, about = "Validate required pet save fields")]
struct Cli {
    #[arg(value_name = "SAVE.JSON")]
    path: PathBuf,
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let doc = schema::load_save(&cli.path).unwrap_or_else(|e| {
        eprintln!("Error validating {}: {e}", cli.path.display());
        process::exit(1);
    });

    let missing = schema::missing_fields(&doc);

    if cli.json {
        let json = pet_render::validation_json(&missing);
        let rendered = serde_json::to_string_pretty(&json).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
    } else {
        print!("{}", pet_render::validation_text(&missing));
    }

    if !missing.is_empty() {
        process::exit(1);
    }
}
