//! Binary entry point: a small command-line consumer of the persistence
//! core. It covers the jobs that make sense without the app's UI: inspecting
//! what the store holds, exporting a backup snapshot, and restoring one.
use std::fs;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use gym_tracker::backup::{backup_file_name, export_json, import_json};
use gym_tracker::db::{ensure_ready, fetch_exercises_grouped, fetch_workout_dates, today_string};
use gym_tracker::Store;

/// Initialize persistence and dispatch the requested command. Returning a
/// `Result` bubbles fatal problems (for example an unwritable data
/// directory) up to the terminal instead of crashing silently.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let store = ensure_ready()?;

    match args.first().map(String::as_str) {
        None | Some("summary") => summary(&store),
        Some("export") => export(&store, args.get(1).map(String::as_str)),
        Some("import") => match args.get(1) {
            Some(path) => import(&store, path),
            None => bail!("usage: gym-tracker import <snapshot.json>"),
        },
        Some(other) => bail!("unknown command `{other}` (expected summary, export, or import)"),
    }
}

/// Print per-group exercise counts and overall activity.
fn summary(store: &Store) -> Result<()> {
    let grouped = fetch_exercises_grouped(store)?;
    println!("Exercises:");
    for (group, exercises) in &grouped {
        println!("  {} {:<12} {}", group.icon(), group.label(), exercises.len());
    }

    let dates = fetch_workout_dates(store)?;
    match (dates.first(), dates.last()) {
        (Some(first), Some(last)) => {
            println!("Workouts logged on {} days ({first} .. {last})", dates.len())
        }
        _ => println!("No workouts logged yet"),
    }
    Ok(())
}

/// Write the snapshot document, defaulting to the dated backup file name in
/// the current directory.
fn export(store: &Store, path: Option<&str>) -> Result<()> {
    let default_name = backup_file_name(&today_string());
    let path = path.unwrap_or(&default_name);
    let document = export_json(store)?;
    fs::write(path, document).with_context(|| format!("failed to write {path}"))?;
    println!("Exported snapshot to {path}");
    Ok(())
}

/// Restore a snapshot document into the store.
fn import(store: &Store, path: &str) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?;
    let counts = import_json(store, &text)?;
    println!(
        "Imported {} exercises, {} programs, {} workouts",
        counts.exercises, counts.programs, counts.workouts
    );
    Ok(())
}
