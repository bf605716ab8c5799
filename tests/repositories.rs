//! Repository-level behavior: grouped partitioning, calendar queries, the
//! session lifecycle, and the tolerated dangling references that keep
//! historical data intact.

use gym_tracker::db::{
    create_exercise, create_program, delete_exercise, delete_program, fetch_exercise,
    fetch_exercises, fetch_exercises_grouped, fetch_program, fetch_workout, fetch_workout_dates,
    fetch_workouts, fetch_workouts_for_date, finish_session, save_workout, start_session,
    update_exercise,
};
use gym_tracker::models::{ExerciseRef, MuscleGroup, Program, SetValue};

mod common;
use common::{squat_ref, test_store};

#[test]
fn created_exercises_are_always_custom() {
    let store = test_store();
    let exercise = create_exercise(&store, "Face Pull", MuscleGroup::Shoulders).unwrap();
    assert!(exercise.is_custom);
    assert!(exercise.id.is_some());

    let stored = fetch_exercise(&store, exercise.id.unwrap()).unwrap().unwrap();
    assert!(stored.is_custom);
}

#[test]
fn updating_an_exercise_keeps_its_id() {
    let store = test_store();
    let mut exercise = create_exercise(&store, "Fase Pull", MuscleGroup::Shoulders).unwrap();
    let id = exercise.id.unwrap();

    exercise.name = "Face Pull".to_string();
    update_exercise(&store, &exercise).unwrap();

    let stored = fetch_exercise(&store, id).unwrap().unwrap();
    assert_eq!(stored.name, "Face Pull");
    assert_eq!(stored.id, Some(id));
}

#[test]
fn grouping_partitions_every_fixed_group_exercise_exactly_once() {
    let store = test_store();
    create_exercise(&store, "Face Pull", MuscleGroup::Shoulders).unwrap();

    let all = fetch_exercises(&store).unwrap();
    let grouped = fetch_exercises_grouped(&store).unwrap();

    // Every fixed group has a bucket, and each bucket holds exactly the
    // exercises carrying that group.
    assert_eq!(grouped.len(), MuscleGroup::FIXED.len());
    for (group, bucket) in &grouped {
        assert!(bucket.iter().all(|ex| ex.group == *group));
    }

    let bucketed: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(bucketed, all.len());
}

#[test]
fn unknown_groups_are_stored_but_dropped_from_grouped_views() {
    let store = test_store();
    let exercise =
        create_exercise(&store, "Sun Salutation", MuscleGroup::Other("yoga".to_string())).unwrap();

    // The store accepted it.
    let stored = fetch_exercise(&store, exercise.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.group, MuscleGroup::Other("yoga".to_string()));

    // Grouped views exclude it without an "other" bucket.
    let grouped = fetch_exercises_grouped(&store).unwrap();
    assert_eq!(grouped.len(), MuscleGroup::FIXED.len());
    let bucketed: usize = grouped.values().map(Vec::len).sum();
    assert_eq!(bucketed, fetch_exercises(&store).unwrap().len() - 1);
}

#[test]
fn deleting_an_exercise_leaves_program_snapshots_dangling_but_intact() {
    let store = test_store();
    let exercise = create_exercise(&store, "Zercher Squat", MuscleGroup::Legs).unwrap();

    let program = create_program(
        &store,
        Program {
            id: None,
            name: "Legs".to_string(),
            color: "#bf5af2".to_string(),
            exercises: vec![ExerciseRef {
                id: exercise.id.unwrap(),
                name: exercise.name.clone(),
                group: exercise.group.clone(),
            }],
        },
    )
    .unwrap();

    delete_exercise(&store, exercise.id.unwrap()).unwrap();

    let stored = fetch_program(&store, program.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.exercises.len(), 1);
    assert_eq!(stored.exercises[0].name, "Zercher Squat");
}

#[test]
fn programs_allow_duplicate_exercises_in_display_order() {
    let store = test_store();
    let first = squat_ref();
    let again = squat_ref();

    let program = create_program(
        &store,
        Program {
            id: None,
            name: "Squats, Twice".to_string(),
            color: "#007aff".to_string(),
            exercises: vec![first, again],
        },
    )
    .unwrap();

    let stored = fetch_program(&store, program.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.exercises.len(), 2);
    assert_eq!(stored.exercises[0].id, stored.exercises[1].id);
}

#[test]
fn deleted_programs_are_gone() {
    let store = test_store();
    let program = create_program(
        &store,
        Program {
            id: None,
            name: "Ephemeral".to_string(),
            color: "#30d158".to_string(),
            exercises: Vec::new(),
        },
    )
    .unwrap();
    let id = program.id.unwrap();

    delete_program(&store, id).unwrap();
    assert!(fetch_program(&store, id).unwrap().is_none());
}

#[test]
fn workouts_by_date_match_a_full_scan_filter() {
    let store = test_store();
    start_session(&store, None, Some("2024-06-01")).unwrap();
    start_session(&store, None, Some("2024-06-01")).unwrap();
    start_session(&store, None, Some("2024-06-02")).unwrap();

    let by_index = fetch_workouts_for_date(&store, "2024-06-01").unwrap();
    let by_scan: Vec<_> = fetch_workouts(&store)
        .unwrap()
        .into_iter()
        .filter(|w| w.date == "2024-06-01")
        .collect();

    assert_eq!(by_index.len(), 2);
    assert_eq!(by_index.len(), by_scan.len());

    assert!(fetch_workouts_for_date(&store, "2024-12-25").unwrap().is_empty());
}

#[test]
fn workout_dates_are_deduplicated() {
    let store = test_store();
    start_session(&store, None, Some("2024-06-01")).unwrap();
    start_session(&store, None, Some("2024-06-01")).unwrap();
    start_session(&store, None, Some("2024-06-03")).unwrap();

    let dates = fetch_workout_dates(&store).unwrap();
    assert_eq!(
        dates.into_iter().collect::<Vec<_>>(),
        vec!["2024-06-01".to_string(), "2024-06-03".to_string()]
    );
}

#[test]
fn starting_a_session_persists_the_row_immediately() {
    let store = test_store();
    let workout = start_session(&store, None, Some("2024-06-01")).unwrap();

    let stored = fetch_workout(&store, workout.id.unwrap()).unwrap().unwrap();
    assert_eq!(stored.date, "2024-06-01");
    assert!(!stored.is_finished());
    assert!(stored.exercises.is_empty());
}

#[test]
fn starting_from_a_program_snapshots_its_exercises_with_one_blank_set() {
    let store = test_store();
    let program = create_program(
        &store,
        Program {
            id: None,
            name: "Leg Day".to_string(),
            color: "#bf5af2".to_string(),
            exercises: vec![squat_ref()],
        },
    )
    .unwrap();

    let workout = start_session(&store, Some(&program), Some("2024-06-01")).unwrap();
    assert_eq!(workout.program_name, "Leg Day");
    assert_eq!(workout.program_id, program.id);
    assert_eq!(workout.exercises.len(), 1);
    assert_eq!(workout.exercises[0].sets.len(), 1);
    assert!(workout.exercises[0].sets[0].weight.is_blank());
}

#[test]
fn finishing_a_session_stamps_the_end_time() {
    let store = test_store();
    let mut workout = start_session(&store, None, Some("2024-06-01")).unwrap();

    workout.add_exercise(squat_ref());
    workout.exercises[0].sets[0].weight = SetValue::Number(60.0);
    workout.exercises[0].sets[0].reps = SetValue::Number(5.0);
    save_workout(&store, &workout).unwrap();

    finish_session(&store, &mut workout).unwrap();

    let stored = fetch_workout(&store, workout.id.unwrap()).unwrap().unwrap();
    assert!(stored.is_finished());
    assert!(stored.end_time.unwrap() >= stored.start_time);
    assert_eq!(stored.exercises[0].sets[0].reps, SetValue::Number(5.0));
}

#[test]
fn pushing_a_set_copies_the_previous_weight() {
    let mut exercise = gym_tracker::models::WorkoutExercise::begin(squat_ref());
    exercise.sets[0].weight = SetValue::Number(80.0);
    exercise.sets[0].reps = SetValue::Number(5.0);

    exercise.push_set();
    assert_eq!(exercise.sets.len(), 2);
    assert_eq!(exercise.sets[1].weight, SetValue::Number(80.0));
    assert!(exercise.sets[1].reps.is_blank());
}
