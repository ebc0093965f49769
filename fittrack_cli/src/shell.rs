//! Interactive session: the draft form, workout history and stats view.
//!
//! Each input line is parsed with clap into a [`ShellCommand`]. All state is
//! dropped when the session ends.

use clap::{Parser, Subcommand};
use fittrack_core::config::DisplayConfig;
use fittrack_core::*;
use std::io::Write;

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ShellCommand {
    /// List the exercise catalog
    Exercises,

    /// Set the title of the new workout (runs of spaces become one space)
    Title {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Set the notes of the new workout (no words clears them; runs of
    /// spaces become one space)
    Notes {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Add an exercise to the new workout
    Add {
        /// Catalog id, e.g. squat
        exercise_id: String,
    },

    /// Remove set N from the new workout
    Remove { index: usize },

    /// Edit set N of the new workout
    Set {
        index: usize,

        #[arg(long)]
        weight: Option<f64>,

        #[arg(long)]
        reps: Option<u32>,

        /// Minutes
        #[arg(long)]
        duration: Option<f64>,

        #[arg(long)]
        distance: Option<f64>,
    },

    /// Show the new workout
    Draft,

    /// Save the new workout to the history
    Save,

    /// Throw away the new workout
    Discard,

    /// Show the workout history, newest first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Mark workout N completed, or back to in-progress
    Toggle { index: usize },

    /// Show workout statistics
    Stats {
        #[arg(long)]
        json: bool,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    catalog: &'a Catalog,
    display: &'a DisplayConfig,
    draft: DraftBuilder,
    store: WorkoutStore,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a Catalog, display: &'a DisplayConfig) -> Self {
        Self {
            catalog,
            display,
            draft: DraftBuilder::new(),
            store: WorkoutStore::new(),
        }
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    #[cfg(test)]
    pub fn draft(&self) -> &DraftBuilder {
        &self.draft
    }

    /// Parse and execute one input line
    ///
    /// Usage errors and `help` are printed and the session continues.
    pub fn run_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match ShellLine::try_parse_from(words) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(e) => {
                write!(out, "{}", e.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand, out: &mut impl Write) -> Result<Flow> {
        match command {
            ShellCommand::Exercises => {
                for exercise in &self.catalog.exercises {
                    write_exercise(out, exercise)?;
                }
            }
            ShellCommand::Title { words } => {
                self.draft.set_title(words.join(" "));
                writeln!(out, "Title: {}", self.draft.title())?;
            }
            ShellCommand::Notes { words } => {
                self.draft.set_notes(words.join(" "));
                if self.draft.notes().is_empty() {
                    writeln!(out, "Notes cleared")?;
                } else {
                    writeln!(out, "Notes: {}", self.draft.notes())?;
                }
            }
            ShellCommand::Add { exercise_id } => match self.catalog.get(&exercise_id) {
                Some(exercise) => {
                    self.draft.add_exercise(exercise);
                    writeln!(
                        out,
                        "Added {} as set #{}",
                        exercise.name,
                        self.draft.sets().len()
                    )?;
                }
                None => {
                    writeln!(
                        out,
                        "Unknown exercise '{}'. Try 'exercises' to see the catalog.",
                        exercise_id
                    )?;
                }
            },
            ShellCommand::Remove { index } => match self.draft_set_id(index) {
                Some(id) => {
                    self.draft.remove_exercise(id);
                    writeln!(out, "Removed set #{}", index)?;
                }
                None => writeln!(out, "No set #{} in the draft", index)?,
            },
            ShellCommand::Set {
                index,
                weight,
                reps,
                duration,
                distance,
            } => {
                let update = SetUpdate {
                    weight,
                    reps,
                    duration,
                    distance,
                    completed: None,
                };
                self.update_draft_set(index, &update, out)?;
            }
            ShellCommand::Draft => self.write_draft(out)?,
            ShellCommand::Save => match self.draft.save() {
                Some(workout) => {
                    writeln!(
                        out,
                        "Saved '{}' ({} sets, {} min)",
                        workout.title,
                        workout.sets().len(),
                        workout.duration()
                    )?;
                    self.store.add(workout);
                }
                None => {
                    let reason = if self.draft.title().is_empty() {
                        "set a title first"
                    } else {
                        "add at least one exercise first"
                    };
                    writeln!(out, "Cannot save yet: {}", reason)?;
                }
            },
            ShellCommand::Discard => {
                self.draft.clear();
                writeln!(out, "Draft discarded")?;
            }
            ShellCommand::List { json } => {
                if json {
                    serde_json::to_writer_pretty(&mut *out, self.store.workouts())?;
                    writeln!(out)?;
                } else {
                    self.write_history(out)?;
                }
            }
            ShellCommand::Toggle { index } => {
                let id = index
                    .checked_sub(1)
                    .and_then(|i| self.store.workouts().get(i))
                    .map(|w| w.id);
                match id.and_then(|id| self.store.toggle_status(id)) {
                    Some(status) => writeln!(out, "Workout #{} is now {}", index, status)?,
                    None => writeln!(out, "No workout #{}", index)?,
                }
            }
            ShellCommand::Stats { json } => {
                let stats = self.store.stats(self.catalog);
                if json {
                    serde_json::to_writer_pretty(&mut *out, &stats)?;
                    writeln!(out)?;
                } else {
                    self.write_stats(&stats, out)?;
                }
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    fn draft_set_id(&self, index: usize) -> Option<uuid::Uuid> {
        let i = index.checked_sub(1)?;
        self.draft.sets().get(i).map(|s| s.id)
    }

    fn update_draft_set(
        &mut self,
        index: usize,
        update: &SetUpdate,
        out: &mut impl Write,
    ) -> Result<()> {
        let Some(id) = self.draft_set_id(index) else {
            writeln!(out, "No set #{} in the draft", index)?;
            return Ok(());
        };
        if update.is_empty() {
            writeln!(out, "Nothing to change; pass --weight, --reps, --duration or --distance")?;
            return Ok(());
        }

        let non_finite: Vec<String> = update
            .non_finite_fields()
            .into_iter()
            .map(|f| f.to_string())
            .collect();
        if !non_finite.is_empty() {
            writeln!(out, "Not a usable number for {}", non_finite.join(", "))?;
            return Ok(());
        }

        let exercise_id = &self.draft.sets()[index - 1].exercise_id;
        if let Some(exercise) = self.catalog.get(exercise_id) {
            let rejected: Vec<String> = update
                .fields()
                .into_iter()
                .filter(|f| !exercise.category.accepts(*f))
                .map(|f| f.to_string())
                .collect();
            if !rejected.is_empty() {
                writeln!(
                    out,
                    "{} is a {} exercise and doesn't track {}",
                    exercise.name,
                    exercise.category,
                    rejected.join(", ")
                )?;
                return Ok(());
            }
        }

        self.draft.update_set(id, update);
        writeln!(out, "Updated set #{}", index)?;
        Ok(())
    }

    fn write_set_line(&self, out: &mut impl Write, n: usize, set: &WorkoutSet) -> Result<()> {
        let summary = set.summary(&self.display.weight_unit, &self.display.distance_unit);
        writeln!(
            out,
            "  {}. {}  {}",
            n,
            self.catalog.display_name(&set.exercise_id),
            summary
        )?;
        Ok(())
    }

    fn write_draft(&self, out: &mut impl Write) -> Result<()> {
        let title = match self.draft.title() {
            "" => "(untitled)",
            t => t,
        };
        writeln!(out, "Draft: {}", title)?;
        if !self.draft.notes().is_empty() {
            writeln!(out, "  Notes: {}", self.draft.notes())?;
        }
        if self.draft.sets().is_empty() {
            writeln!(out, "  No exercises yet")?;
        }
        for (i, set) in self.draft.sets().iter().enumerate() {
            self.write_set_line(out, i + 1, set)?;
        }
        Ok(())
    }

    fn write_history(&self, out: &mut impl Write) -> Result<()> {
        if self.store.is_empty() {
            writeln!(out, "No workouts yet. Start by creating a new workout!")?;
            return Ok(());
        }

        for (i, workout) in self.store.workouts().iter().enumerate() {
            let mark = if workout.status.is_completed() { "[x]" } else { "[ ]" };
            writeln!(out, "{}. {} {}", i + 1, mark, workout.title)?;
            writeln!(
                out,
                "   {}  {} min",
                workout.date.format(&self.display.date_format),
                workout.duration()
            )?;
            if let Some(notes) = &workout.notes {
                writeln!(out, "   {}", notes)?;
            }
            for (j, set) in workout.sets().iter().enumerate() {
                self.write_set_line(out, j + 1, set)?;
            }
        }
        Ok(())
    }

    fn write_stats(&self, stats: &WorkoutStats, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Total workouts: {}", stats.total_workouts)?;
        writeln!(out, "  {}% completion rate", stats.completion_rate)?;
        writeln!(out, "Total duration: {} min", stats.total_duration)?;
        writeln!(out, "  Avg. {} min per workout", stats.average_duration)?;
        writeln!(out, "Streak: {} days", stats.streak_days)?;

        match &stats.latest {
            Some(latest) => writeln!(
                out,
                "Latest workout: {} ({})",
                latest.title,
                latest.date.format(&self.display.date_format)
            )?,
            None => writeln!(out, "Latest workout: No workouts yet")?,
        }

        if !stats.personal_bests.is_empty() {
            writeln!(out, "Personal bests:")?;
            for best in &stats.personal_bests {
                writeln!(
                    out,
                    "  {}: {}{} ({})",
                    best.exercise_name,
                    best.weight,
                    self.display.weight_unit,
                    best.date.format(&self.display.date_format)
                )?;
            }
        }
        Ok(())
    }
}

/// One catalog line, e.g. `squat  Squat [strength] quadriceps, hamstrings, glutes`
pub fn write_exercise(out: &mut impl Write, exercise: &Exercise) -> Result<()> {
    writeln!(
        out,
        "{:<12} {} [{}] {}",
        exercise.id,
        exercise.name,
        exercise.category,
        exercise.target_muscles.join(", ")
    )?;
    Ok(())
}
