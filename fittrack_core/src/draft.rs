//! Draft builder for new workouts.
//!
//! A draft accumulates a title, notes and sets until it is saved. Saving is
//! refused (not an error) while the title is empty or no sets were added.

use crate::{Exercise, SetUpdate, Workout, WorkoutSet};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Unsaved workout being assembled
#[derive(Clone, Debug, Default)]
pub struct DraftBuilder {
    title: String,
    notes: String,
    sets: Vec<WorkoutSet>,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Sets in the order they were added
    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.notes.is_empty() && self.sets.is_empty()
    }

    /// Append a set for `exercise`, pre-filled from its defaults
    ///
    /// The same exercise may be added any number of times.
    pub fn add_exercise(&mut self, exercise: &Exercise) -> Uuid {
        let set = WorkoutSet::for_exercise(exercise);
        let id = set.id;
        tracing::debug!("Added {} to draft as set {}", exercise.id, id);
        self.sets.push(set);
        id
    }

    /// Remove the set with `set_id`; returns false if there was none
    pub fn remove_exercise(&mut self, set_id: Uuid) -> bool {
        let before = self.sets.len();
        self.sets.retain(|s| s.id != set_id);
        let removed = self.sets.len() != before;
        if !removed {
            tracing::warn!("No draft set {} to remove", set_id);
        }
        removed
    }

    /// Merge `update` into the set with `set_id`; returns false if there was none
    pub fn update_set(&mut self, set_id: Uuid, update: &SetUpdate) -> bool {
        match self.sets.iter_mut().find(|s| s.id == set_id) {
            Some(set) => {
                update.apply_to(set);
                tracing::debug!("Updated draft set {}: {:?}", set_id, update);
                true
            }
            None => {
                tracing::warn!("No draft set {} to update", set_id);
                false
            }
        }
    }

    /// Whether `save` would currently produce a workout
    pub fn can_save(&self) -> bool {
        !self.title.is_empty() && !self.sets.is_empty()
    }

    /// Save the draft as a workout dated now
    pub fn save(&mut self) -> Option<Workout> {
        self.save_at(Utc::now())
    }

    /// Save the draft as a workout dated `date`
    ///
    /// Returns `None` and leaves the draft untouched when saving is blocked.
    /// On success the draft is reset to empty.
    pub fn save_at(&mut self, date: DateTime<Utc>) -> Option<Workout> {
        if !self.can_save() {
            tracing::debug!(
                "Save blocked: title empty = {}, sets = {}",
                self.title.is_empty(),
                self.sets.len()
            );
            return None;
        }

        let draft = std::mem::take(self);
        let notes = Some(draft.notes).filter(|n| !n.is_empty());
        let workout = Workout::new(draft.title, notes, draft.sets, date);

        tracing::info!(
            "Saved workout '{}' ({} sets, {} min)",
            workout.title,
            workout.sets().len(),
            workout.duration()
        );
        Some(workout)
    }

    /// Discard everything in the draft
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
