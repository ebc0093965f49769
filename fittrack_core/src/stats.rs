//! Workout statistics.
//!
//! Everything here is a pure projection of the store contents and is
//! recomputed on demand. Workouts are expected in store order (newest first).

use crate::{Catalog, Workout};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Aggregates shown on the stats view
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WorkoutStats {
    pub total_workouts: usize,
    /// Minutes
    pub total_duration: f64,
    /// Minutes per workout, rounded
    pub average_duration: f64,
    pub completed_workouts: usize,
    /// Percentage in `0..=100`
    pub completion_rate: u32,
    pub streak_days: u32,
    pub latest: Option<LatestWorkout>,
    pub personal_bests: Vec<PersonalBest>,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct LatestWorkout {
    pub title: String,
    pub date: DateTime<Utc>,
}

/// Heaviest recorded weight for one exercise
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PersonalBest {
    pub exercise_id: String,
    pub exercise_name: String,
    pub weight: f64,
    /// Date of the first workout in store order that reached `weight`
    pub date: DateTime<Utc>,
}

/// Compute all statistics for `workouts`
pub fn compute_stats(workouts: &[Workout], catalog: &Catalog) -> WorkoutStats {
    let total_workouts = workouts.len();
    let total_duration = total_duration(workouts);
    let completed_workouts = workouts.iter().filter(|w| w.status.is_completed()).count();

    let stats = WorkoutStats {
        total_workouts,
        total_duration,
        average_duration: average_duration(workouts),
        completed_workouts,
        completion_rate: completion_rate(workouts),
        streak_days: streak_days(workouts),
        latest: workouts.first().map(|w| LatestWorkout {
            title: w.title.clone(),
            date: w.date,
        }),
        personal_bests: personal_bests(workouts, catalog),
    };

    tracing::debug!(
        "Computed stats: {} workouts, {}% complete, {} personal bests",
        stats.total_workouts,
        stats.completion_rate,
        stats.personal_bests.len()
    );
    stats
}

/// Sum of each workout's own duration
pub fn total_duration(workouts: &[Workout]) -> f64 {
    workouts.iter().map(|w| w.duration()).sum()
}

/// Rounded mean duration, 0 for no workouts
pub fn average_duration(workouts: &[Workout]) -> f64 {
    if workouts.is_empty() {
        return 0.0;
    }
    (total_duration(workouts) / workouts.len() as f64).round()
}

/// Rounded percentage of completed workouts, 0 for no workouts
pub fn completion_rate(workouts: &[Workout]) -> u32 {
    if workouts.is_empty() {
        return 0;
    }
    let completed = workouts.iter().filter(|w| w.status.is_completed()).count();
    (100.0 * completed as f64 / workouts.len() as f64).round() as u32
}

/// Personal bests for each catalog exercise, in catalog order
///
/// Sets without a weight or with a zero weight never count. When several
/// workouts reach the same maximum, the one earliest in store order wins,
/// which for a newest-first store is the most recently added.
pub fn personal_bests(workouts: &[Workout], catalog: &Catalog) -> Vec<PersonalBest> {
    catalog
        .exercises
        .iter()
        .filter_map(|exercise| {
            let weights_for = |w: &Workout| {
                w.sets()
                    .iter()
                    .filter(|s| s.exercise_id == exercise.id)
                    .filter_map(|s| s.weight.filter(|weight| *weight != 0.0))
                    .collect::<Vec<_>>()
            };

            let max = workouts
                .iter()
                .flat_map(weights_for)
                .fold(0.0_f64, f64::max);
            if max <= 0.0 {
                return None;
            }

            let achieved = workouts
                .iter()
                .find(|w| weights_for(*w).contains(&max))?;

            Some(PersonalBest {
                exercise_id: exercise.id.clone(),
                exercise_name: exercise.name.clone(),
                weight: max,
                date: achieved.date,
            })
        })
        .collect()
}

/// Consecutive days with at least one workout, ending on the latest workout day
///
/// Days are UTC calendar days; several workouts on one day count once.
pub fn streak_days(workouts: &[Workout]) -> u32 {
    let days: BTreeSet<NaiveDate> = workouts.iter().map(|w| w.date.date_naive()).collect();

    let Some(&last) = days.iter().next_back() else {
        return 0;
    };

    let mut streak = 0;
    let mut day = last;
    while days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}
