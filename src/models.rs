//! Domain models that mirror the stored record shapes and get passed between
//! the persistence layer and its callers. These types stay light-weight data
//! holders; the field names follow the on-disk JSON documents so exported
//! snapshots stay readable and stable across versions.

use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Store-assigned record identifier. Identifiers are unique per collection,
/// strictly increasing, and never reused even after a delete.
pub type RecordId = i64;

/// Muscle group used to categorize exercises and drive grouped display.
///
/// The eight named variants are the fixed enumeration the grouped views are
/// built from. The store itself never rejects a group it does not recognize;
/// such values survive round-trips through `Other` and are silently excluded
/// from grouped views.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MuscleGroup {
    Stretching,
    Cardio,
    Chest,
    Back,
    Arms,
    Legs,
    Shoulders,
    Abs,
    /// A group key outside the fixed enumeration, preserved verbatim.
    Other(String),
}

impl MuscleGroup {
    /// The fixed enumeration, in the order grouped views present it.
    pub const FIXED: [MuscleGroup; 8] = [
        MuscleGroup::Stretching,
        MuscleGroup::Cardio,
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Arms,
        MuscleGroup::Legs,
        MuscleGroup::Shoulders,
        MuscleGroup::Abs,
    ];

    /// The stable key stored on disk and used in exported snapshots.
    pub fn key(&self) -> &str {
        match self {
            MuscleGroup::Stretching => "stretching",
            MuscleGroup::Cardio => "cardio",
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Arms => "arms",
            MuscleGroup::Legs => "legs",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Abs => "abs",
            MuscleGroup::Other(key) => key,
        }
    }

    /// Parse a stored key. Unknown keys are preserved rather than rejected so
    /// reading a record can never fail on an unexpected group value.
    pub fn from_key(key: &str) -> MuscleGroup {
        match key {
            "stretching" => MuscleGroup::Stretching,
            "cardio" => MuscleGroup::Cardio,
            "chest" => MuscleGroup::Chest,
            "back" => MuscleGroup::Back,
            "arms" => MuscleGroup::Arms,
            "legs" => MuscleGroup::Legs,
            "shoulders" => MuscleGroup::Shoulders,
            "abs" => MuscleGroup::Abs,
            other => MuscleGroup::Other(other.to_string()),
        }
    }

    /// Whether this group belongs to the fixed enumeration.
    pub fn is_fixed(&self) -> bool {
        !matches!(self, MuscleGroup::Other(_))
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Serialize for MuscleGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for MuscleGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(MuscleGroup::from_key(&key))
    }
}

/// An exercise in the catalog, either seeded (`is_custom == false`) or created
/// by the user. The `id` is absent until the store assigns one and immutable
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub group: MuscleGroup,
    #[serde(default)]
    pub is_custom: bool,
}

/// Denormalized copy of an exercise's identity, taken at the moment a program
/// or workout references it. Snapshots never resync: renaming or deleting the
/// live exercise leaves historical data exactly as it was logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRef {
    /// Identifier of the exercise at snapshot time. May dangle after the
    /// exercise is deleted; consumers render a fallback for dangling refs.
    pub id: RecordId,
    pub name: String,
    pub group: MuscleGroup,
}

/// A workout program: a named, colored, ordered list of exercise snapshots.
/// Order is display order and duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    /// Color token shown on the program card, drawn from the fixed palette.
    pub color: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseRef>,
}

/// One value of a logged set. Sets start as blank placeholders ("" on the
/// wire) and are coerced to numbers the first time the user edits them; both
/// states must survive a snapshot round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SetValue {
    Number(f64),
    Blank(String),
}

impl SetValue {
    /// The untouched placeholder a fresh set starts with.
    pub fn blank() -> SetValue {
        SetValue::Blank(String::new())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, SetValue::Blank(_))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SetValue::Number(n) => Some(*n),
            SetValue::Blank(_) => None,
        }
    }
}

impl Default for SetValue {
    fn default() -> Self {
        SetValue::blank()
    }
}

/// A single logged set: weight in kilograms and a repetition count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    #[serde(default)]
    pub weight: SetValue,
    #[serde(default)]
    pub reps: SetValue,
}

impl WorkoutSet {
    /// A fresh set with both fields still blank.
    pub fn blank() -> WorkoutSet {
        WorkoutSet {
            weight: SetValue::blank(),
            reps: SetValue::blank(),
        }
    }
}

/// An exercise inside a workout log: the snapshot of its identity plus the
/// ordered sets performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: RecordId,
    pub name: String,
    pub group: MuscleGroup,
    #[serde(default)]
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    /// Start logging an exercise from its snapshot, with one blank set so the
    /// first row is ready for input.
    pub fn begin(snapshot: ExerciseRef) -> WorkoutExercise {
        WorkoutExercise {
            id: snapshot.id,
            name: snapshot.name,
            group: snapshot.group,
            sets: vec![WorkoutSet::blank()],
        }
    }

    /// Append a set, carrying the previous set's weight forward so repeated
    /// working sets only need the rep count typed in.
    pub fn push_set(&mut self) {
        let weight = self
            .sets
            .last()
            .map(|set| set.weight.clone())
            .unwrap_or_default();
        self.sets.push(WorkoutSet {
            weight,
            reps: SetValue::blank(),
        });
    }
}

/// A workout session. The row is created the moment a session starts so an
/// in-progress workout survives a crash; `end_time` is only stamped when the
/// user explicitly finishes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Plain `YYYY-MM-DD` calendar string with no timezone component. All
    /// date comparisons are lexicographic, which the zero-padded format keeps
    /// correct.
    pub date: String,
    pub program_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<RecordId>,
    /// Session start in epoch milliseconds.
    pub start_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default)]
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Add an exercise to the session from a caller-built snapshot.
    pub fn add_exercise(&mut self, snapshot: ExerciseRef) {
        self.exercises.push(WorkoutExercise::begin(snapshot));
    }
}
