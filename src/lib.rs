pub mod cli;
pub mod commands;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod fatigue;
pub mod guidance;
pub mod logging;
pub mod models;
pub mod placement;
pub mod week;

#[cfg(test)]
mod test_utils;

pub use compatibility::{compatibility_matrix, evaluate};
pub use config::Settings;
pub use error::GuidanceError;
pub use fatigue::{classify, FatigueClassifier, RuleBasedClassifier};
pub use guidance::{day_guidance, workout_guidance};
pub use placement::{recommend, PlacementInput};

use clap::Parser;
use std::process::ExitCode;

pub fn run() -> ExitCode {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  let settings = match Settings::from_env() {
    Ok(s) => s,
    Err(e) => {
      eprintln!("Failed to load settings: {}", e);
      return ExitCode::FAILURE;
    }
  };
  logging::init(&settings.log_filter);

  let cli = cli::Cli::parse();
  match cli::execute(&cli.command, &settings) {
    Ok(value) => match serde_json::to_string_pretty(&value) {
      Ok(out) => {
        println!("{}", out);
        ExitCode::SUCCESS
      }
      Err(e) => {
        tracing::error!(error = %e, "failed to render output");
        ExitCode::FAILURE
      }
    },
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}
