use crate::commands::with_fatigue_types;
use crate::config::Settings;
use crate::models::Workout;
use crate::week::{DayReview, ScheduledBlock, WeekPlan};

/// Review an ad-hoc set of workouts planned for the same day
pub fn review_day(workouts: &[Workout], settings: &Settings) -> DayReview {
  DayReview::compute(None, &with_fatigue_types(workouts), settings)
}

/// Review the whole schedule, one entry per weekday starting Monday
pub fn review_week(blocks: &[ScheduledBlock], settings: &Settings) -> Vec<DayReview> {
  let blocks: Vec<ScheduledBlock> = blocks
    .iter()
    .cloned()
    .map(|mut b| {
      b.workout.ensure_fatigue_type();
      b
    })
    .collect();
  WeekPlan::from_blocks(&blocks).review(settings)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::commands::decode;
  use crate::models::{Compatibility, LoadTier, NoteVariant};

  #[test]
  fn test_review_day_from_json() {
    let body = r#"[
      {"name": "Breathing", "primary_intent": "feel_good_regulation", "perceived_effort": "very_light"},
      {"name": "Hip CARs", "primary_intent": "mobility", "perceived_effort": "light_focused"}
    ]"#;
    let workouts: Vec<Workout> = decode(body).unwrap();
    let review = review_day(&workouts, &Settings::default());

    assert_eq!(review.weekday, None);
    assert!(!review.is_main_workout_day);
    assert_eq!(review.load.tier, LoadTier::Light);
    assert_eq!(review.notes.len(), 1);
    assert_eq!(review.notes[0].variant, NoteVariant::Positive);
    assert_eq!(review.compatibility.len(), 1);
  }

  #[test]
  fn test_review_week_from_json() {
    let body = r#"[
      {"weekday": "Mon", "slot_order": 0, "workout":
        {"name": "Tempo run", "primary_intent": "conditioning", "perceived_effort": "moderate", "stress_breathing_hr": true}},
      {"weekday": "Mon", "slot_order": 1, "active": false, "workout":
        {"name": "Old block", "primary_intent": "rehab", "perceived_effort": "moderate"}}
    ]"#;
    let blocks: Vec<ScheduledBlock> = decode(body).unwrap();
    let reviews = review_week(&blocks, &Settings::default());

    assert_eq!(reviews.len(), 7);
    assert_eq!(reviews[0].workouts, vec!["Tempo run"]);
    assert!(reviews[1..].iter().all(|r| r.load.tier == LoadTier::Rest));
  }

  const UNTYPED_CNS_DAY: &str = r#"[
    {"name": "Hill sprints", "primary_intent": "conditioning", "perceived_effort": "very_taxing",
     "stress_tendons": true, "stress_coordination": true},
    {"name": "Agility ladder", "primary_intent": "skill_coordination", "perceived_effort": "sneaky_hard",
     "stress_tendons": true, "stress_coordination": true}
  ]"#;

  #[test]
  fn test_review_day_counts_untyped_cns_blocks() {
    let workouts: Vec<Workout> = decode(UNTYPED_CNS_DAY).unwrap();
    let review = review_day(&workouts, &Settings::default());

    let titles: Vec<&str> = review.notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["Multiple CNS demands"]);
    assert_eq!(review.compatibility[0].result.score, -6);
  }

  #[test]
  fn test_review_week_counts_untyped_cns_blocks() {
    let workouts: Vec<Workout> = decode(UNTYPED_CNS_DAY).unwrap();
    let blocks: Vec<ScheduledBlock> = workouts
      .into_iter()
      .enumerate()
      .map(|(i, workout)| ScheduledBlock {
        weekday: chrono::Weekday::Thu,
        slot_order: i as u32,
        active: true,
        workout,
      })
      .collect();
    let reviews = review_week(&blocks, &Settings::default());

    assert_eq!(reviews[3].notes[0].title, "Multiple CNS demands");
    assert_eq!(reviews[3].compatibility[0].result.compatibility, Compatibility::LikelyInterference);
  }
}
