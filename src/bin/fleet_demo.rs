use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;
use vehicle_strategy::{describe_offering, Concert, FleetError, MoveReport, Movie, Scenario};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_scenario() -> Result<Scenario, FleetError> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Scenario::load(&path),
        None => Ok(Scenario::default()),
    }
}

fn print_report(report: &MoveReport) {
    let label = if report.swapped {
        format!("{}:", report.vehicle_type).yellow().bold()
    } else {
        format!("{}:", report.vehicle_type).cyan().bold()
    };
    println!("{} {}", label, report.movement);
}

fn main() -> ExitCode {
    init_logging();

    println!("{}", "Offerings".bold());
    println!("  Concert {}", describe_offering(&Concert::new()));
    println!("  Movie   {}", describe_offering(&Movie::new()));
    println!();

    println!("{}", "Vehicles".bold());
    let reports = match load_scenario().and_then(|scenario| scenario.run()) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    for report in &reports {
        print_report(report);
    }

    ExitCode::SUCCESS
}
