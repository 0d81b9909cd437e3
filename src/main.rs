use std::process::ExitCode;

use apt_filter::args::Args;
use apt_filter::{config, presentation, scenario};
use apt_filter_infra::load_dataset;
use clap::Parser;
use tracing::debug;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let dataset = load_dataset(&args.data)?;
    debug!(records = dataset.len(), "dataset ready");

    if let Some(scenario_path) = &args.verify {
        let suite = scenario::ScenarioSuite::load(scenario_path)?;
        let outcomes = scenario::run_suite(&suite, &dataset)?;
        let all_passed = presentation::print_report(&outcomes);
        return Ok(if all_passed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let filter = config::filter_options(args).resolve(dataset.bounds())?;
    let selected = dataset.select(&filter);
    presentation::print_matches(selected, dataset.len(), &config::list_options(args));
    Ok(ExitCode::SUCCESS)
}
