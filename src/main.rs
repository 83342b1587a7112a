use std::process::ExitCode;

use chrono::Local;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use leave_sim::calendar::SouthAfrica;
use leave_sim::config::SimulationWindow;
use leave_sim::simulation;

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "leave_sim=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = SimulationWindow::through_next_year(Local::now().date_naive())
        .and_then(|window| simulation::run(&SouthAfrica, window));

    match result {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Leave simulation aborted");
            ExitCode::FAILURE
        }
    }
}
