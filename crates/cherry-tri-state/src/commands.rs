use std::io::Write;

use clap::ArgMatches;
use tracing::{error, info};

use cherry_core::events;
use cherry_core::{
    CherryError, CherryRequest, ClassifierConfig, ClassifyError, DEFAULT_TITLE_STRIP_PATTERN,
    GitRepo, State, classify,
};

/// Print an error for the user, log it, and box it for `main`.
fn report<E: CherryError>(e: E) -> Box<dyn std::error::Error> {
    eprintln!("error: {}", e);
    error!(event = "cli.run_failed", error = %e);
    events::log_app_error(&e);
    Box::new(e)
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let upstream = matches
        .get_one::<String>("upstream")
        .ok_or("Upstream branch argument is required")?;
    let reference = matches.get_one::<String>("reference").map(String::as_str);
    let strip_pattern = matches
        .get_one::<String>("strip-title")
        .map(String::as_str)
        .unwrap_or(DEFAULT_TITLE_STRIP_PATTERN);

    let output_level = matches
        .get_one::<State>("output-level")
        .copied()
        .unwrap_or_default();

    let config = ClassifierConfig::new(output_level, strip_pattern).map_err(report)?;
    let request = CherryRequest::new(upstream.as_str(), reference);

    info!(
        event = "cli.run_started",
        upstream = request.upstream.as_str(),
        reference = request.reference.as_str(),
        output_level = %config.output_level,
        strip_pattern = strip_pattern
    );

    let cwd = std::env::current_dir().map_err(|e| {
        eprintln!("error: Cannot read current directory: {}", e);
        error!(event = "cli.current_dir_failed", error = %e);
        e
    })?;
    let repo = GitRepo::discover(&cwd)
        .map_err(ClassifyError::from)
        .map_err(report)?;
    let records = classify(&repo, &request, &config).map_err(report)?;

    // Write each line as soon as it is classified, handling broken pipe gracefully
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut shown = 0usize;
    for record in records {
        let record = record.map_err(report)?;
        if let Err(e) = writeln!(out, "{}", record) {
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                info!(event = "cli.output_closed", shown = shown);
                return Ok(());
            }
            eprintln!("Write failed: {}", e);
            error!(event = "cli.write_failed", error = %e);
            return Err(format!("Write failed: {}", e).into());
        }
        shown += 1;
    }

    info!(
        event = "cli.run_completed",
        upstream = request.upstream.as_str(),
        reference = request.reference.as_str(),
        shown = shown
    );

    Ok(())
}
