// main.rs - CLI entry point

use casemerge::cli::Config;
use casemerge::output::{format_error, write_json, write_summary, ConsoleProgress};
use casemerge::prelude::*;
use env_logger::Env;
use std::io;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    init_logging(args.verbose);

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validated = validate_args(&args)?;
    log::debug!("resolved arguments: {:?}", validated);

    let merger = Merger::new(validated.source, validated.destination).dry_run(validated.dry_run);

    if validated.json {
        let summary = merger.run(&mut NoProgress).map_err(|e| format_error(&e))?;
        return write_json(&mut io::stdout().lock(), &summary);
    }

    println!("🚀 {}", casemerge::get_info());
    println!("📥 Source: {}", merger.source().display());
    println!("📤 Destination: {}", merger.destination().display());
    if validated.dry_run {
        println!("🧪 Dry run: no files will be written");
    }
    println!();

    let mut progress = ConsoleProgress::stdout();
    let summary = merger.run(&mut progress).map_err(|e| format_error(&e))?;

    write_summary(&mut io::stdout().lock(), &summary).map_err(|e| format!("Write error: {}", e))?;
    Ok(())
}
