//! Persistence module split across logical submodules.

mod connection;
mod exercises;
mod programs;
mod store;
mod workouts;

/// Names of the store's collections, shared by the bootstrap path, the
/// repositories, and the backup service.
pub mod collections {
    pub const EXERCISES: &str = "exercises";
    pub const PROGRAMS: &str = "programs";
    pub const WORKOUTS: &str = "workouts";
}

pub use connection::{ensure_ready, initialize};
pub use exercises::{
    create_exercise, delete_exercise, fetch_exercise, fetch_exercises, fetch_exercises_grouped,
    update_exercise,
};
pub use programs::{create_program, delete_program, fetch_program, fetch_programs, update_program};
pub use store::Store;
pub use workouts::{
    delete_workout, fetch_workout, fetch_workout_dates, fetch_workouts, fetch_workouts_for_date,
    finish_session, save_workout, start_session, today_string,
};
