//! Default exercise catalog.
//!
//! The catalog is fixed at build time; sets refer to its entries by id.

use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and shared read-only
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference. This function is retained for testing.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn strength(id: &str, name: &str, muscles: &[&str], sets: u32, reps: u32) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        category: ExerciseCategory::Strength,
        target_muscles: muscles.iter().map(|m| m.to_string()).collect(),
        default_sets: Some(sets),
        default_reps: Some(reps),
        default_duration: None,
    }
}

fn timed(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    muscles: &[&str],
    minutes: f64,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        category,
        target_muscles: muscles.iter().map(|m| m.to_string()).collect(),
        default_sets: None,
        default_reps: None,
        default_duration: Some(minutes),
    }
}

fn build_default_catalog_internal() -> Catalog {
    Catalog {
        exercises: vec![
            strength(
                "bench-press",
                "Bench Press",
                &["chest", "shoulders", "triceps"],
                3,
                10,
            ),
            strength(
                "squat",
                "Squat",
                &["quadriceps", "hamstrings", "glutes"],
                3,
                10,
            ),
            strength(
                "deadlift",
                "Deadlift",
                &["back", "hamstrings", "glutes"],
                3,
                8,
            ),
            timed(
                "running",
                "Running",
                ExerciseCategory::Cardio,
                &["legs", "heart"],
                30.0,
            ),
            timed(
                "yoga",
                "Yoga Flow",
                ExerciseCategory::Flexibility,
                &["full body"],
                20.0,
            ),
        ],
    }
}

impl Catalog {
    /// Look up an exercise by id
    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Display name for an exercise id, falling back to the id itself
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or(id)
    }

    /// Exercises in the given category, in catalog order
    pub fn by_category(&self, category: ExerciseCategory) -> impl Iterator<Item = &Exercise> {
        self.exercises.iter().filter(move |e| e.category == category)
    }

    /// Exercises targeting the given muscle (case-insensitive), in catalog order
    pub fn by_muscle<'a>(&'a self, muscle: &'a str) -> impl Iterator<Item = &'a Exercise> {
        self.exercises.iter().filter(move |e| e.targets(muscle))
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            let id = &exercise.id;
            if id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if !seen.insert(id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", id));
            }
            if exercise.target_muscles.is_empty() {
                errors.push(format!("Exercise '{}' has no target muscles", id));
            }

            match exercise.category {
                ExerciseCategory::Strength => {
                    if exercise.default_reps.is_none() {
                        errors.push(format!("Strength exercise '{}' has no default reps", id));
                    }
                }
                ExerciseCategory::Cardio | ExerciseCategory::Flexibility => {
                    if exercise.default_duration.is_none() {
                        errors.push(format!(
                            "{} exercise '{}' has no default duration",
                            exercise.category, id
                        ));
                    }
                }
            }

            if let Some(duration) = exercise.default_duration {
                if duration <= 0.0 {
                    errors.push(format!(
                        "Exercise '{}': default duration {} must be positive",
                        id, duration
                    ));
                }
            }
            if exercise.default_reps == Some(0) {
                errors.push(format!("Exercise '{}': default reps must be positive", id));
            }
        }

        for category in [
            ExerciseCategory::Strength,
            ExerciseCategory::Cardio,
            ExerciseCategory::Flexibility,
        ] {
            if self.by_category(category).next().is_none() {
                errors.push(format!("Catalog has no {} exercises", category));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = build_default_catalog();
        assert_eq!(catalog.exercises.len(), 5);
    }

    #[test]
    fn test_catalog_order() {
        let catalog = get_default_catalog();
        let ids: Vec<_> = catalog.exercises.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["bench-press", "squat", "deadlift", "running", "yoga"]);
    }

    #[test]
    fn test_default_catalog_validates() {
        let catalog = build_default_catalog();
        let errors = catalog.validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_lookup() {
        let catalog = get_default_catalog();
        let running = catalog.get("running").unwrap();
        assert_eq!(running.category, ExerciseCategory::Cardio);
        assert_eq!(running.default_duration, Some(30.0));
        assert!(catalog.get("swimming").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let catalog = get_default_catalog();
        assert_eq!(catalog.display_name("yoga"), "Yoga Flow");
        assert_eq!(catalog.display_name("swimming"), "swimming");
    }

    #[test]
    fn test_filters() {
        let catalog = get_default_catalog();
        assert_eq!(catalog.by_category(ExerciseCategory::Strength).count(), 3);

        let hamstrings: Vec<_> = catalog.by_muscle("Hamstrings").map(|e| e.id.as_str()).collect();
        assert_eq!(hamstrings, ["squat", "deadlift"]);
    }

    #[test]
    fn test_validate_catches_duplicates_and_missing_defaults() {
        let mut catalog = build_default_catalog();
        let mut dup = catalog.exercises[0].clone();
        dup.default_reps = None;
        catalog.exercises.push(dup);

        let errors = catalog.validate();
        assert!(errors.iter().any(|e| e.contains("Duplicate exercise ID 'bench-press'")));
        assert!(errors.iter().any(|e| e.contains("no default reps")));
    }
}
