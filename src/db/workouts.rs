//! Workout repository: CRUD over the `workouts` collection plus the
//! calendar-oriented read paths. A workout row is written the moment a
//! session starts so an in-progress log survives a crash or navigation away;
//! everything after that is incremental updates to the same record.

use chrono::{Local, Utc};

use crate::db::collections;
use crate::db::store::Store;
use crate::error::Result;
use crate::models::{Program, RecordId, Workout, WorkoutExercise};

/// Title given to a session started without picking a program.
const UNTITLED_SESSION: &str = "Workout";

pub fn fetch_workouts(store: &Store) -> Result<Vec<Workout>> {
    store.get_all(collections::WORKOUTS)
}

pub fn fetch_workout(store: &Store, id: RecordId) -> Result<Option<Workout>> {
    store.get_by_id(collections::WORKOUTS, id)
}

/// All workouts logged on a calendar day, via the secondary index on `date`.
/// A day with no activity yields an empty list.
pub fn fetch_workouts_for_date(store: &Store, date: &str) -> Result<Vec<Workout>> {
    store.query_by_index(collections::WORKOUTS, "date", date)
}

/// Distinct dates that have at least one workout, used to mark calendar days
/// as active. Computed by a full scan and dedup; the sorted set also gives
/// the calendar its chronological order for free.
pub fn fetch_workout_dates(store: &Store) -> Result<std::collections::BTreeSet<String>> {
    let workouts = fetch_workouts(store)?;
    Ok(workouts.into_iter().map(|w| w.date).collect())
}

/// Start a session and persist its row immediately. With a program, every
/// exercise snapshot comes in with one blank set ready for input; without
/// one, the session starts empty under a default title.
pub fn start_session(
    store: &Store,
    program: Option<&Program>,
    date: Option<&str>,
) -> Result<Workout> {
    let date = date.map(str::to_string).unwrap_or_else(today_string);

    let mut workout = match program {
        Some(program) => Workout {
            id: None,
            date,
            program_name: program.name.clone(),
            program_id: program.id,
            start_time: now_millis(),
            end_time: None,
            exercises: program
                .exercises
                .iter()
                .cloned()
                .map(WorkoutExercise::begin)
                .collect(),
        },
        None => Workout {
            id: None,
            date,
            program_name: UNTITLED_SESSION.to_string(),
            program_id: None,
            start_time: now_millis(),
            end_time: None,
            exercises: Vec::new(),
        },
    };

    let id = store.add(collections::WORKOUTS, &workout)?;
    workout.id = Some(id);
    tracing::debug!(id, date = %workout.date, "started workout session");
    Ok(workout)
}

/// Stamp the end time and persist the final state of the session.
pub fn finish_session(store: &Store, workout: &mut Workout) -> Result<()> {
    workout.end_time = Some(now_millis());
    save_workout(store, workout)
}

/// Write the current state of a workout back to the store. This is the
/// target of the debounced autosave path as well as the explicit finish.
pub fn save_workout(store: &Store, workout: &Workout) -> Result<()> {
    store.put(collections::WORKOUTS, workout)?;
    Ok(())
}

pub fn delete_workout(store: &Store, id: RecordId) -> Result<()> {
    store.remove(collections::WORKOUTS, id)
}

/// Today's local calendar date as a zero-padded `YYYY-MM-DD` string, the
/// only date format the store ever sees.
pub fn today_string() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
