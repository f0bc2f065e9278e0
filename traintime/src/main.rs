use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::error;

use traintime::app::{AppError, HttpTimetable, run};
use traintime::board::StationboardConfig;
use traintime::cli::Args;
use traintime::domain::Coordinate;
use traintime::render::write_usage;
use traintime::search::StationFinderConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    traintime::logging::init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match board_near(&args, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        // Already reported on stdout
        Err(AppError::NoStations) => ExitCode::FAILURE,
        Err(e) => {
            let _ = out.flush();
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn board_near(args: &Args, out: &mut impl Write) -> Result<(), AppError> {
    let at = match args.coordinate()? {
        Some(at) => at,
        None => {
            write_usage(out, env!("CARGO_BIN_NAME"))?;
            Coordinate::DEFAULT
        }
    };

    let search_config = StationFinderConfig::new().with_radius(args.radius);
    let board_config = StationboardConfig::new().with_limit(args.limit);
    let timetable = HttpTimetable::new(search_config, board_config)?;

    run(&timetable, at, out, Utc::now).await?;
    out.flush()?;

    Ok(())
}
