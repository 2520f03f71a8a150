//! Week review
//!
//! Groups the active schedule per weekday and runs the day-level engines on
//! each day: fatigue load, day guidance and the pairwise compatibility matrix.

use chrono::Weekday;
use serde::{de, Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::compatibility::{compatibility_matrix, PairCompatibility};
use crate::config::{LoadThresholds, Settings};
use crate::error::{GuidanceError, Result};
use crate::fatigue::{classify, round_to};
use crate::guidance::day_guidance;
use crate::models::{DayFatigueLoad, GuidanceNote, LoadTier, Workout};

/// Monday first, matching stored day indices 0..6
pub const WEEK: [Weekday; 7] = [
  Weekday::Mon,
  Weekday::Tue,
  Weekday::Wed,
  Weekday::Thu,
  Weekday::Fri,
  Weekday::Sat,
  Weekday::Sun,
];

/// Stored day index (0 = Monday) to weekday
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
  WEEK
    .get(index as usize)
    .copied()
    .ok_or_else(|| GuidanceError::unknown_tag("day of week", &index.to_string()))
}

/// Stored rows use an index, hand-written plans use names
#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayRepr {
  Index(u8),
  Name(String),
}

fn deserialize_weekday<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Weekday, D::Error> {
  match WeekdayRepr::deserialize(deserializer)? {
    WeekdayRepr::Index(i) => weekday_from_index(i).map_err(de::Error::custom),
    WeekdayRepr::Name(name) => name
      .parse()
      .map_err(|_| de::Error::custom(format!("unknown weekday: {}", name))),
  }
}

/// ---------------------------------------------------------------------------
/// Day Fatigue Load
/// ---------------------------------------------------------------------------

pub fn load_tier(total_score: f64, workout_count: usize, thresholds: &LoadThresholds) -> LoadTier {
  if workout_count == 0 {
    LoadTier::Rest
  } else if total_score >= thresholds.heavy {
    LoadTier::Heavy
  } else if total_score >= thresholds.moderate {
    LoadTier::Moderate
  } else {
    LoadTier::Light
  }
}

/// Sum of per-workout total scores, re-derived from current attributes
pub fn day_fatigue_load(workouts: &[Workout], thresholds: &LoadThresholds) -> DayFatigueLoad {
  let total: f64 = workouts
    .iter()
    .map(|w| classify(&w.attributes).total_score)
    .sum();
  let total_score = round_to(total, 1);
  DayFatigueLoad {
    total_score,
    tier: load_tier(total_score, workouts.len(), thresholds),
  }
}

/// ---------------------------------------------------------------------------
/// Schedule
/// ---------------------------------------------------------------------------

fn default_active() -> bool {
  true
}

/// A workout assigned to a weekday slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledBlock {
  #[serde(deserialize_with = "deserialize_weekday")]
  pub weekday: Weekday,
  #[serde(default)]
  pub slot_order: u32,
  #[serde(default = "default_active")]
  pub active: bool,
  pub workout: Workout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReview {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weekday: Option<Weekday>,
  pub is_main_workout_day: bool,
  pub workouts: Vec<String>,
  pub load: DayFatigueLoad,
  pub notes: Vec<GuidanceNote>,
  pub compatibility: Vec<PairCompatibility>,
}

impl DayReview {
  /// Review one day's workouts, in slot order
  pub fn compute(weekday: Option<Weekday>, workouts: &[Workout], settings: &Settings) -> Self {
    Self {
      weekday,
      is_main_workout_day: weekday.is_some_and(|d| settings.is_main_workout_day(d)),
      workouts: workouts.iter().map(|w| w.name.clone()).collect(),
      load: day_fatigue_load(workouts, &settings.load_thresholds),
      notes: day_guidance(workouts),
      compatibility: compatibility_matrix(workouts),
    }
  }
}

/// Active blocks grouped per weekday, Monday first, slot order within a day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeekPlan {
  days: [Vec<Workout>; 7],
}

impl WeekPlan {
  pub fn from_blocks(blocks: &[ScheduledBlock]) -> Self {
    let mut active: Vec<&ScheduledBlock> = blocks.iter().filter(|b| b.active).collect();
    // Stable, so equal slot orders keep input order
    active.sort_by_key(|b| b.slot_order);

    let mut plan = Self::default();
    for block in active {
      plan.days[block.weekday.num_days_from_monday() as usize].push(block.workout.clone());
    }
    plan
  }

  pub fn day(&self, weekday: Weekday) -> &[Workout] {
    &self.days[weekday.num_days_from_monday() as usize]
  }

  pub fn review(&self, settings: &Settings) -> Vec<DayReview> {
    let reviews: Vec<DayReview> = WEEK
      .iter()
      .map(|d| DayReview::compute(Some(*d), self.day(*d), settings))
      .collect();

    debug!(
      scheduled = self.days.iter().map(Vec::len).sum::<usize>(),
      heavy_days = reviews.iter().filter(|r| r.load.tier == LoadTier::Heavy).count(),
      "reviewed week"
    );
    reviews
  }
}
