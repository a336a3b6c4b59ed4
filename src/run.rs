use crate::settings::{OutputFormat, Settings};
use grid_route_lib::{GridWorld, Route, RouteError};
use std::io::Write;

/// Error types for the command line front end
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the route described by `settings` and render it in the requested format
pub fn render(settings: &Settings) -> Result<String, AppError> {
    let grid = GridWorld::new(settings.grid_config());
    let route = Route::new(settings.route.as_str(), &grid)?;

    let output = match settings.format {
        OutputFormat::Gpx => route.to_gpx(),
        OutputFormat::Nmea => route.to_nmea_with(settings.encoding.into()),
    };
    tracing::info!(
        "Exported route {} ({} points) as {:?}",
        route,
        route.len(),
        settings.format
    );
    Ok(output)
}

/// Render and write to the configured destination
#[profiling::function]
pub fn run(settings: &Settings) -> Result<(), AppError> {
    let output = render(settings)?;

    match &settings.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            // Sentences carry no trailing newline; end the terminal line here
            if !output.ends_with('\n') && !output.is_empty() {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
