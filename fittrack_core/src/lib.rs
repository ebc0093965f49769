#![forbid(unsafe_code)]

//! Core domain model and business logic for FitTrack.
//!
//! This crate provides:
//! - Domain types (exercises, sets, workouts)
//! - The static exercise catalog
//! - Draft building and the in-memory workout store
//! - Workout statistics

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod draft;
pub mod store;
pub mod stats;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog};
pub use config::Config;
pub use draft::DraftBuilder;
pub use store::WorkoutStore;
pub use stats::{compute_stats, LatestWorkout, PersonalBest, WorkoutStats};
