//! Command-line surface
//!
//! Reads JSON requests (file or stdin), runs them through `commands`, and
//! hands back a JSON value for the caller to print.

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::commands::{self, schedule};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{
  IntendedFrequency, PerceivedEffort, PrimaryIntent, StressKind, Workout, WorkoutAttributes,
};
use crate::week::ScheduledBlock;

#[derive(Debug, Parser)]
#[command(
  name = "supplement-coach",
  about = "Fatigue, placement and scheduling guidance for supplemental workouts"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Assess an ad-hoc workout described by flags
  Classify {
    #[arg(long)]
    intent: PrimaryIntent,
    #[arg(long)]
    effort: PerceivedEffort,
    /// Stress characteristics, comma-separated (impact,tendons,...)
    #[arg(long, value_delimiter = ',')]
    stress: Vec<StressKind>,
    #[arg(long, default_value = "2_3_per_week")]
    frequency: IntendedFrequency,
    #[arg(long, default_value = "Unnamed block")]
    name: String,
  },
  /// Assess one workout (JSON object)
  Assess {
    #[arg(long)]
    input: Option<PathBuf>,
  },
  /// Compare two workouts (JSON array of exactly two)
  Compare {
    #[arg(long)]
    input: Option<PathBuf>,
  },
  /// Review workouts planned for one day (JSON array)
  Day {
    #[arg(long)]
    input: Option<PathBuf>,
  },
  /// Review a weekly schedule (JSON array of scheduled blocks)
  Week {
    #[arg(long)]
    input: Option<PathBuf>,
  },
}

fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(p) => Ok(std::fs::read_to_string(p)?),
    None => {
      let mut body = String::new();
      std::io::stdin().read_to_string(&mut body)?;
      Ok(body)
    }
  }
}

pub fn execute(command: &Command, settings: &Settings) -> Result<Value> {
  let value = match command {
    Command::Classify {
      intent,
      effort,
      stress,
      frequency,
      name,
    } => {
      let attributes = WorkoutAttributes::new(*intent, *effort)
        .with_stress(stress)
        .with_frequency(*frequency);
      serde_json::to_value(commands::assess_workout(&Workout::new(name.clone(), attributes)))?
    }
    Command::Assess { input } => {
      let workout: Workout = commands::decode(&read_input(input.as_deref())?)?;
      serde_json::to_value(commands::assess_workout(&workout))?
    }
    Command::Compare { input } => {
      let workouts: Vec<Workout> = commands::decode(&read_input(input.as_deref())?)?;
      serde_json::to_value(commands::compare_pair(&workouts)?)?
    }
    Command::Day { input } => {
      let workouts: Vec<Workout> = commands::decode(&read_input(input.as_deref())?)?;
      serde_json::to_value(schedule::review_day(&workouts, settings))?
    }
    Command::Week { input } => {
      let blocks: Vec<ScheduledBlock> = commands::decode(&read_input(input.as_deref())?)?;
      serde_json::to_value(schedule::review_week(&blocks, settings))?
    }
  };
  Ok(value)
}
