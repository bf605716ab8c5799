//! Fixed reference data: the default exercise catalog seeded into a fresh
//! store and the display metadata for muscle groups and program colors. The
//! catalog is seeded exactly once, at store creation; changing it here never
//! reconciles into stores that already exist.

use crate::models::MuscleGroup;

/// Default exercises seeded with `is_custom == false` when the store is first
/// created. Grouped by muscle group so additions land in the right section.
pub const DEFAULT_EXERCISES: &[(&str, MuscleGroup)] = &[
    // Cardio
    ("Elliptical Trainer", MuscleGroup::Cardio),
    ("Treadmill", MuscleGroup::Cardio),
    ("Exercise Bike", MuscleGroup::Cardio),
    ("Rowing Machine", MuscleGroup::Cardio),
    // Chest
    ("Barbell Bench Press", MuscleGroup::Chest),
    ("Dumbbell Bench Press", MuscleGroup::Chest),
    ("Incline Bench Press", MuscleGroup::Chest),
    ("Machine Chest Fly", MuscleGroup::Chest),
    ("Push-Ups", MuscleGroup::Chest),
    // Back
    ("Lat Pulldown", MuscleGroup::Back),
    ("Seated Cable Row", MuscleGroup::Back),
    ("Bent-Over Barbell Row", MuscleGroup::Back),
    ("One-Arm Dumbbell Row", MuscleGroup::Back),
    ("Pull-Ups", MuscleGroup::Back),
    ("Back Extension", MuscleGroup::Back),
    // Arms
    ("Barbell Curl", MuscleGroup::Arms),
    ("Dumbbell Curl", MuscleGroup::Arms),
    ("Lying Triceps Extension", MuscleGroup::Arms),
    ("Cable Triceps Pushdown", MuscleGroup::Arms),
    // Legs
    ("Barbell Squat", MuscleGroup::Legs),
    ("Leg Press", MuscleGroup::Legs),
    ("Leg Extension", MuscleGroup::Legs),
    ("Leg Curl", MuscleGroup::Legs),
    ("Dumbbell Lunges", MuscleGroup::Legs),
    // Shoulders
    ("Seated Dumbbell Press", MuscleGroup::Shoulders),
    ("Lateral Raise", MuscleGroup::Shoulders),
    ("Upright Row", MuscleGroup::Shoulders),
    // Abs
    ("Crunches", MuscleGroup::Abs),
    ("Plank", MuscleGroup::Abs),
    ("Hanging Leg Raise", MuscleGroup::Abs),
    // Stretching
    ("Back Stretch", MuscleGroup::Stretching),
    ("Leg Stretch", MuscleGroup::Stretching),
    ("Shoulder Stretch", MuscleGroup::Stretching),
];

/// Color tokens offered when authoring a program. The program editor cycles
/// through these; the chosen token is stored verbatim on the program record.
pub const PROGRAM_COLORS: [&str; 8] = [
    "#007aff", "#ff9500", "#5856d6", "#ff375f", "#30d158", "#64d2ff", "#bf5af2", "#ff6482",
];

/// Icon shown for exercises whose group is not in the fixed enumeration.
const FALLBACK_ICON: &str = "🏋️";

impl MuscleGroup {
    /// Human-readable name shown as the section header in grouped views.
    pub fn label(&self) -> &str {
        match self {
            MuscleGroup::Stretching => "Stretching",
            MuscleGroup::Cardio => "Cardio",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Other(key) => key,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            MuscleGroup::Stretching => "🧘",
            MuscleGroup::Cardio => "🏃",
            MuscleGroup::Chest => "💪",
            MuscleGroup::Back => "🔙",
            MuscleGroup::Arms => "💪",
            MuscleGroup::Legs => "🦵",
            MuscleGroup::Shoulders => "🏋️",
            MuscleGroup::Abs => "🎯",
            MuscleGroup::Other(_) => FALLBACK_ICON,
        }
    }

    /// Accent color for the group's cards and chips.
    pub fn color(&self) -> &str {
        match self {
            MuscleGroup::Stretching => "#64d2ff",
            MuscleGroup::Cardio => "#30d158",
            MuscleGroup::Chest => "#ff9500",
            MuscleGroup::Back => "#007aff",
            MuscleGroup::Arms => "#ff375f",
            MuscleGroup::Legs => "#bf5af2",
            MuscleGroup::Shoulders => "#ff6482",
            MuscleGroup::Abs => "#ffd60a",
            MuscleGroup::Other(_) => "#8e8e93",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_spans_every_fixed_group() {
        for group in MuscleGroup::FIXED {
            assert!(
                DEFAULT_EXERCISES.iter().any(|(_, g)| *g == group),
                "no default exercises for {group}"
            );
        }
    }

    #[test]
    fn catalog_groups_are_all_fixed() {
        assert!(DEFAULT_EXERCISES.iter().all(|(_, g)| g.is_fixed()));
    }
}
