mod shell;

use clap::{Parser, Subcommand};
use fittrack_core::*;
use shell::Shell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout log with statistics, kept in memory for one session", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive workout session (default)
    Shell {
        /// Don't print the prompt (for scripted input)
        #[arg(long)]
        quiet: bool,
    },

    /// List the exercise catalog
    Exercises {
        /// Only show one category (strength, cardio, flexibility)
        #[arg(long)]
        category: Option<String>,

        /// Only show exercises targeting this muscle
        #[arg(long)]
        muscle: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log = fittrack_core::logging::init();

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path)?,
        None => Config::load()?,
    };
    log.set_level(&config.logging.level)?;

    let catalog = get_default_catalog();
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    match cli.command {
        Some(Commands::Shell { quiet }) => cmd_shell(catalog, &config, quiet),
        Some(Commands::Exercises {
            category,
            muscle,
            json,
        }) => cmd_exercises(catalog, category, muscle, json),
        None => cmd_shell(catalog, &config, false),
    }
}

fn cmd_shell(catalog: &Catalog, config: &Config, quiet: bool) -> Result<()> {
    let mut shell = Shell::new(catalog, &config.display);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !quiet {
        writeln!(out, "FitTrack - type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = stdin.lock().lines();
    loop {
        if !quiet {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        if shell.run_line(&line?, &mut out)? == shell::Flow::Quit {
            break;
        }
    }

    tracing::debug!("Session ended with {} workouts", shell.store().len());
    Ok(())
}

fn cmd_exercises(
    catalog: &Catalog,
    category: Option<String>,
    muscle: Option<String>,
    json: bool,
) -> Result<()> {
    let category = category
        .as_deref()
        .map(str::parse::<ExerciseCategory>)
        .transpose()?;

    let in_category: Vec<&Exercise> = match category {
        Some(category) => catalog.by_category(category).collect(),
        None => catalog.exercises.iter().collect(),
    };
    let exercises: Vec<&Exercise> = in_category
        .into_iter()
        .filter(|e| muscle.as_deref().map_or(true, |m| e.targets(m)))
        .collect();

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &exercises)?;
        writeln!(out)?;
        return Ok(());
    }

    if exercises.is_empty() {
        writeln!(out, "No matching exercises.")?;
    }
    for exercise in exercises {
        shell::write_exercise(&mut out, exercise)?;
    }
    Ok(())
}
