//! Runtime settings
//!
//! Read from the environment (a `.env` file is loaded by `run()` first).
//! None of these touch the engine rule tables; they only shape day-load
//! tiers, main-day flags and log output.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{GuidanceError, Result};

pub const LOG_FILTER_VAR: &str = "COACH_LOG";
pub const LOAD_MODERATE_VAR: &str = "COACH_LOAD_MODERATE";
pub const LOAD_HEAVY_VAR: &str = "COACH_LOAD_HEAVY";
pub const MAIN_DAYS_VAR: &str = "COACH_MAIN_DAYS";

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_LOAD_MODERATE: f64 = 10.0;
const DEFAULT_LOAD_HEAVY: f64 = 20.0;

/// Day-load tier cut-offs. A total equal to a cut-off lands in the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadThresholds {
  pub moderate: f64,
  pub heavy: f64,
}

impl Default for LoadThresholds {
  fn default() -> Self {
    Self {
      moderate: DEFAULT_LOAD_MODERATE,
      heavy: DEFAULT_LOAD_HEAVY,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
  pub log_filter: String,
  pub load_thresholds: LoadThresholds,
  /// Days the user does their main training session
  pub main_workout_days: Vec<Weekday>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      log_filter: DEFAULT_LOG_FILTER.to_string(),
      load_thresholds: LoadThresholds::default(),
      main_workout_days: Vec::new(),
    }
  }
}

impl Settings {
  pub fn from_env() -> Result<Self> {
    let log_filter = env::var(LOG_FILTER_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let moderate = read_threshold(LOAD_MODERATE_VAR, DEFAULT_LOAD_MODERATE)?;
    let heavy = read_threshold(LOAD_HEAVY_VAR, DEFAULT_LOAD_HEAVY)?;
    if moderate >= heavy {
      return Err(GuidanceError::invalid_setting(
        LOAD_HEAVY_VAR,
        &format!("{} (must exceed {}={})", heavy, LOAD_MODERATE_VAR, moderate),
      ));
    }

    let main_workout_days = match env::var(MAIN_DAYS_VAR) {
      Ok(raw) => parse_weekdays(&raw)?,
      Err(_) => Vec::new(),
    };

    Ok(Self {
      log_filter,
      load_thresholds: LoadThresholds { moderate, heavy },
      main_workout_days,
    })
  }

  pub fn is_main_workout_day(&self, day: Weekday) -> bool {
    self.main_workout_days.contains(&day)
  }
}

fn read_threshold(key: &str, default: f64) -> Result<f64> {
  match env::var(key) {
    Ok(raw) => {
      let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GuidanceError::invalid_setting(key, &raw))?;
      if !value.is_finite() || value < 0.0 {
        return Err(GuidanceError::invalid_setting(key, &raw));
      }
      Ok(value)
    }
    Err(_) => Ok(default),
  }
}

/// Comma-separated weekday names ("monday, thu"), duplicates dropped
fn parse_weekdays(raw: &str) -> Result<Vec<Weekday>> {
  let mut days = Vec::new();
  for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
    let day: Weekday = part
      .parse()
      .map_err(|_| GuidanceError::invalid_setting(MAIN_DAYS_VAR, part))?;
    if !days.contains(&day) {
      days.push(day);
    }
  }
  Ok(days)
}
