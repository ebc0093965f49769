//! In-memory workout store.
//!
//! Workouts are kept newest-first: `add` prepends and `update` replaces in
//! place. There is no removal.

use crate::{compute_stats, Catalog, Workout, WorkoutStats, WorkoutStatus};
use uuid::Uuid;

#[derive(Clone, Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a newly saved workout
    pub fn add(&mut self, workout: Workout) {
        tracing::debug!("Adding workout {} '{}'", workout.id, workout.title);
        self.workouts.insert(0, workout);
    }

    /// Replace the workout with the same id
    ///
    /// Returns false, leaving the store unchanged, if no workout matches.
    pub fn update(&mut self, workout: Workout) -> bool {
        match self.workouts.iter_mut().find(|w| w.id == workout.id) {
            Some(slot) => {
                tracing::debug!("Updated workout {}", workout.id);
                *slot = workout;
                true
            }
            None => {
                tracing::warn!("Ignoring update for unknown workout {}", workout.id);
                false
            }
        }
    }

    /// Flip the status of the workout with `id`, returning the new status
    pub fn toggle_status(&mut self, id: Uuid) -> Option<WorkoutStatus> {
        let toggled = self.get(id)?.with_toggled_status();
        let status = toggled.status;
        self.update(toggled);
        Some(status)
    }

    pub fn get(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// The most recently added workout
    ///
    /// This follows insertion order, not the workout dates.
    pub fn latest(&self) -> Option<&Workout> {
        self.workouts.first()
    }

    /// All workouts, newest first
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Statistics over the current contents
    pub fn stats(&self, catalog: &Catalog) -> WorkoutStats {
        compute_stats(&self.workouts, catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn workout(title: &str) -> Workout {
        Workout::new(title, None, vec![], Utc::now())
    }

    #[test]
    fn test_add_prepends() {
        let mut store = WorkoutStore::new();
        store.add(workout("first"));
        store.add(workout("second"));

        let titles: Vec<_> = store.workouts().iter().map(|w| w.title.as_str()).collect();
        assert_eq!(titles, ["second", "first"]);
        assert_eq!(store.latest().unwrap().title, "second");
    }

    #[test]
    fn test_latest_follows_insertion_order() {
        let mut store = WorkoutStore::new();
        store.add(workout("today"));
        // Backdated workout added later still counts as latest
        store.add(Workout::new("last week", None, vec![], Utc::now() - Duration::days(7)));

        assert_eq!(store.latest().unwrap().title, "last week");
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = WorkoutStore::new();
        let w = workout("a");
        store.add(w.clone());
        store.add(workout("b"));

        let mut changed = w.clone();
        changed.title = "renamed".into();
        assert!(store.update(changed));

        assert_eq!(store.len(), 2);
        assert_eq!(store.workouts()[1].title, "renamed");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = WorkoutStore::new();
        store.add(workout("a"));
        let before = store.workouts().to_vec();

        assert!(!store.update(workout("stranger")));
        assert_eq!(store.workouts(), before.as_slice());
    }

    #[test]
    fn test_toggle_status_roundtrip() {
        let mut store = WorkoutStore::new();
        let w = workout("a");
        let id = w.id;
        store.add(w.clone());

        assert_eq!(store.toggle_status(id), Some(WorkoutStatus::Completed));
        assert_eq!(store.get(id).unwrap().status, WorkoutStatus::Completed);

        assert_eq!(store.toggle_status(id), Some(WorkoutStatus::InProgress));
        assert_eq!(store.get(id).unwrap(), &w);
    }

    #[test]
    fn test_toggle_unknown_returns_none() {
        let mut store = WorkoutStore::new();
        assert_eq!(store.toggle_status(Uuid::new_v4()), None);
        assert!(store.is_empty());
    }
}
