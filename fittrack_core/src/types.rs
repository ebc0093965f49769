//! Core domain types for FitTrack.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and their categories
//! - Workout sets and partial set updates
//! - Workouts and their status
//! - The exercise catalog

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Exercise Types
// ============================================================================

/// Category of an exercise; decides which set fields are tracked
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
}

impl ExerciseCategory {
    /// Fields a set of this category records
    pub fn fields(&self) -> &'static [SetField] {
        match self {
            ExerciseCategory::Strength => &[SetField::Weight, SetField::Reps],
            ExerciseCategory::Cardio => &[SetField::Duration, SetField::Distance],
            ExerciseCategory::Flexibility => &[SetField::Duration],
        }
    }

    /// Whether sets of this category record the given field
    pub fn accepts(&self, field: SetField) -> bool {
        self.fields().contains(&field)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(ExerciseCategory::Strength),
            "cardio" => Ok(ExerciseCategory::Cardio),
            "flexibility" => Ok(ExerciseCategory::Flexibility),
            other => Err(crate::Error::Parse(format!(
                "unknown category '{}' (expected strength, cardio or flexibility)",
                other
            ))),
        }
    }
}

/// An exercise definition (e.g., "Bench Press")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub target_muscles: Vec<String>,
    pub default_sets: Option<u32>,
    pub default_reps: Option<u32>,
    /// Suggested duration in minutes
    pub default_duration: Option<f64>,
}

impl Exercise {
    /// Whether this exercise works `muscle` (case-insensitive)
    pub fn targets(&self, muscle: &str) -> bool {
        let muscle = muscle.trim();
        self.target_muscles
            .iter()
            .any(|m| m.eq_ignore_ascii_case(muscle))
    }
}

// ============================================================================
// Set Types
// ============================================================================

/// An editable numeric field of a workout set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetField {
    Weight,
    Reps,
    Duration,
    Distance,
}

impl SetField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetField::Weight => "weight",
            SetField::Reps => "reps",
            SetField::Duration => "duration",
            SetField::Distance => "distance",
        }
    }
}

impl fmt::Display for SetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One performed instance of an exercise within a workout
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    pub id: Uuid,
    /// Catalog key, resolved through [`Catalog::get`] when needed
    pub exercise_id: String,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    /// Duration in minutes
    pub duration: Option<f64>,
    /// Distance in kilometres
    pub distance: Option<f64>,
    pub completed: bool,
}

impl WorkoutSet {
    /// Create a set for `exercise` pre-filled from its defaults
    pub fn for_exercise(exercise: &Exercise) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id: exercise.id.clone(),
            weight: Some(0.0),
            reps: exercise.default_reps,
            duration: exercise.default_duration,
            distance: None,
            completed: false,
        }
    }

    /// Short human readable summary, e.g. `100kg x 10 reps` or `20 min`
    ///
    /// Zero and absent values are omitted.
    pub fn summary(&self, weight_unit: &str, distance_unit: &str) -> String {
        let mut parts = Vec::new();

        match (self.weight.filter(|w| *w != 0.0), self.reps.filter(|r| *r != 0)) {
            (Some(weight), Some(reps)) => parts.push(format!("{}{} x {} reps", weight, weight_unit, reps)),
            (Some(weight), None) => parts.push(format!("{}{}", weight, weight_unit)),
            (None, Some(reps)) => parts.push(format!("{} reps", reps)),
            (None, None) => {}
        }
        if let Some(duration) = self.duration.filter(|d| *d != 0.0) {
            parts.push(format!("{} min", duration));
        }
        if let Some(distance) = self.distance.filter(|d| *d != 0.0) {
            parts.push(format!("{}{}", distance, distance_unit));
        }

        parts.join(", ")
    }
}

/// Partial update for a [`WorkoutSet`]; `None` fields are left untouched
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetUpdate {
    pub weight: Option<f64>,
    pub reps: Option<u32>,
    pub duration: Option<f64>,
    pub distance: Option<f64>,
    pub completed: Option<bool>,
}

impl SetUpdate {
    pub fn is_empty(&self) -> bool {
        *self == SetUpdate::default()
    }

    /// Numeric fields this update touches
    pub fn fields(&self) -> Vec<SetField> {
        let mut fields = Vec::new();
        if self.weight.is_some() {
            fields.push(SetField::Weight);
        }
        if self.reps.is_some() {
            fields.push(SetField::Reps);
        }
        if self.duration.is_some() {
            fields.push(SetField::Duration);
        }
        if self.distance.is_some() {
            fields.push(SetField::Distance);
        }
        fields
    }

    /// Fields carrying NaN or an infinity
    pub fn non_finite_fields(&self) -> Vec<SetField> {
        [
            (SetField::Weight, self.weight),
            (SetField::Duration, self.duration),
            (SetField::Distance, self.distance),
        ]
        .into_iter()
        .filter(|(_, value)| value.map_or(false, |v| !v.is_finite()))
        .map(|(field, _)| field)
        .collect()
    }

    /// Merge this update into `set`
    pub fn apply_to(&self, set: &mut WorkoutSet) {
        if let Some(weight) = self.weight {
            set.weight = Some(weight);
        }
        if let Some(reps) = self.reps {
            set.reps = Some(reps);
        }
        if let Some(duration) = self.duration {
            set.duration = Some(duration);
        }
        if let Some(distance) = self.distance {
            set.distance = Some(distance);
        }
        if let Some(completed) = self.completed {
            set.completed = completed;
        }
    }
}

// ============================================================================
// Workout Types
// ============================================================================

/// Two-state workout status, changed only by an explicit toggle
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutStatus {
    InProgress,
    Completed,
}

impl WorkoutStatus {
    pub fn toggled(self) -> Self {
        match self {
            WorkoutStatus::InProgress => WorkoutStatus::Completed,
            WorkoutStatus::Completed => WorkoutStatus::InProgress,
        }
    }

    pub fn is_completed(self) -> bool {
        self == WorkoutStatus::Completed
    }
}

impl fmt::Display for WorkoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkoutStatus::InProgress => f.write_str("in-progress"),
            WorkoutStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A saved workout
///
/// Sets and total duration are fixed at construction, so `duration` always
/// equals the sum of the set durations (absent durations count as zero).
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    sets: Vec<WorkoutSet>,
    duration: f64,
    pub status: WorkoutStatus,
}

impl Workout {
    /// Build an in-progress workout dated `date`
    pub fn new(
        title: impl Into<String>,
        notes: Option<String>,
        sets: Vec<WorkoutSet>,
        date: DateTime<Utc>,
    ) -> Self {
        let duration = sets.iter().map(|s| s.duration.unwrap_or(0.0)).sum();
        Self {
            id: Uuid::new_v4(),
            date,
            title: title.into(),
            notes,
            sets,
            duration,
            status: WorkoutStatus::InProgress,
        }
    }

    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    /// Total duration in minutes
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Copy of this workout with the status flipped
    pub fn with_toggled_status(&self) -> Self {
        Self {
            status: self.status.toggled(),
            ..self.clone()
        }
    }
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The exercise catalog, in display order
#[derive(Clone, Debug, Serialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> Exercise {
        Exercise {
            id: "squat".into(),
            name: "Squat".into(),
            category: ExerciseCategory::Strength,
            target_muscles: vec!["quadriceps".into()],
            default_sets: Some(3),
            default_reps: Some(10),
            default_duration: None,
        }
    }

    #[test]
    fn test_set_prefilled_from_defaults() {
        let set = WorkoutSet::for_exercise(&squat());
        assert_eq!(set.exercise_id, "squat");
        assert_eq!(set.weight, Some(0.0));
        assert_eq!(set.reps, Some(10));
        assert_eq!(set.duration, None);
        assert!(!set.completed);
    }

    #[test]
    fn test_set_update_preserves_unspecified_fields() {
        let mut set = WorkoutSet::for_exercise(&squat());
        let update = SetUpdate {
            weight: Some(100.0),
            ..Default::default()
        };
        update.apply_to(&mut set);

        assert_eq!(set.weight, Some(100.0));
        assert_eq!(set.reps, Some(10));
        assert_eq!(update.fields(), vec![SetField::Weight]);
    }

    #[test]
    fn test_set_update_non_finite_fields() {
        let update = SetUpdate {
            weight: Some(f64::INFINITY),
            reps: Some(5),
            duration: Some(f64::NAN),
            distance: Some(3.5),
            completed: None,
        };
        assert_eq!(
            update.non_finite_fields(),
            vec![SetField::Weight, SetField::Duration]
        );

        let plain = SetUpdate {
            weight: Some(0.0),
            ..Default::default()
        };
        assert!(plain.non_finite_fields().is_empty());
    }

    #[test]
    fn test_workout_duration_ignores_absent_durations() {
        let mut strength = WorkoutSet::for_exercise(&squat());
        strength.duration = None;
        let mut cardio = WorkoutSet::for_exercise(&squat());
        cardio.duration = Some(20.0);

        let workout = Workout::new("Leg Day", None, vec![strength, cardio], Utc::now());
        assert_eq!(workout.duration(), 20.0);
        assert_eq!(workout.status, WorkoutStatus::InProgress);
    }

    #[test]
    fn test_toggle_changes_only_status() {
        let workout = Workout::new("Push", Some("felt good".into()), vec![], Utc::now());
        let toggled = workout.with_toggled_status();

        assert_eq!(toggled.status, WorkoutStatus::Completed);
        assert_eq!(toggled.id, workout.id);
        assert_eq!(toggled.title, workout.title);
        assert_eq!(toggled.notes, workout.notes);
        assert_eq!(toggled.date, workout.date);
        assert_eq!(toggled.with_toggled_status(), workout);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "Cardio".parse::<ExerciseCategory>().unwrap(),
            ExerciseCategory::Cardio
        );
        assert!("swimming".parse::<ExerciseCategory>().is_err());
    }

    #[test]
    fn test_category_fields() {
        assert!(ExerciseCategory::Strength.accepts(SetField::Weight));
        assert!(!ExerciseCategory::Strength.accepts(SetField::Duration));
        assert!(ExerciseCategory::Cardio.accepts(SetField::Distance));
        assert!(!ExerciseCategory::Flexibility.accepts(SetField::Distance));
    }

    #[test]
    fn test_summary() {
        let mut set = WorkoutSet::for_exercise(&squat());
        set.weight = Some(100.0);
        assert_eq!(set.summary("kg", "km"), "100kg x 10 reps");

        set.weight = Some(0.0);
        set.reps = None;
        set.duration = Some(20.0);
        set.distance = Some(5.0);
        assert_eq!(set.summary("kg", "km"), "20 min, 5km");
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&WorkoutStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
