use crate::cli::commands::{new_session, open_store};
use crate::cli::parser::ClockArgs;
use crate::config::Config;
use crate::core::ClockController;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::location::{
    CommandProvider, FixedProvider, LocationOptions, LocationProvider, NoProvider,
};
use crate::models::{EntryType, Geolocation};
use crate::ui::messages::{info, location, success};
use crate::ui::render::render_status;

/// Pick where the location comes from: explicit flags, then the configured
/// command, otherwise none.
fn provider_for(args: &ClockArgs, cfg: &Config) -> AppResult<Box<dyn LocationProvider>> {
    if args.no_location {
        return Ok(Box::new(NoProvider));
    }

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        let fixed = FixedProvider::new(Geolocation::new(lat, lon, args.accuracy.unwrap_or(0.0)))
            .map_err(|e| AppError::InvalidCoordinates(e.to_string()))?;
        return Ok(Box::new(fixed));
    }

    match &cfg.location_command {
        Some(cmd) if !cmd.trim().is_empty() => Ok(Box::new(CommandProvider::new(cmd.clone()))),
        _ => Ok(Box::new(NoProvider)),
    }
}

/// Record a clock-in or clock-out.
pub async fn handle(kind: EntryType, args: &ClockArgs, cfg: &Config) -> AppResult<()> {
    let provider = provider_for(args, cfg)?;
    let mut store = open_store(cfg)?;
    let mut session = new_session(cfg);

    let notes = args.notes.as_deref().unwrap_or("").trim();

    info(format!("Processing {kind}..."));
    let mut controller = ClockController::new(provider.as_ref())
        .with_options(LocationOptions::with_timeout_ms(cfg.location_timeout_ms));

    let outcome = controller
        .submit(&mut store, &mut session, kind, notes)
        .await?;

    let entry = outcome.entry();
    let geo = entry
        .geolocation
        .map(|g| format!("{:.5},{:.5}", g.latitude, g.longitude))
        .unwrap_or_else(|| "-".to_string());
    ttlog_quiet(
        store.backend().conn(),
        kind.operation(),
        &crate::utils::time::to_iso(&entry.timestamp),
        &format!("location={geo} notes={}", entry.notes.lines().count()),
    );

    location(outcome.location_status());
    success(outcome.status_message());
    println!("{}", render_status(store.current_status()));

    Ok(())
}
