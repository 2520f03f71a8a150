//! Test utilities and fixture builders
//!
//! Shared by the unit tests in every engine module:
//! - attribute and workout factories
//! - exhaustive attribute sweeps for property-style checks

use crate::models::{
  FatigueType, IntendedFrequency, PerceivedEffort, PrimaryIntent, StressKind, StressProfile,
  Workout, WorkoutAttributes,
};

/// Attributes with the given stress flags and default frequency
pub fn attrs(intent: PrimaryIntent, effort: PerceivedEffort, stress: &[StressKind]) -> WorkoutAttributes {
  WorkoutAttributes::new(intent, effort).with_stress(stress)
}

/// A classified workout record
pub fn workout(name: &str, intent: PrimaryIntent, effort: PerceivedEffort, stress: &[StressKind]) -> Workout {
  Workout::new(name, attrs(intent, effort, stress))
}

/// A record with an explicit (possibly absent) stored fatigue type
pub fn stored_workout(
  name: &str,
  intent: PrimaryIntent,
  effort: PerceivedEffort,
  stress: &[StressKind],
  fatigue_type: Option<FatigueType>,
) -> Workout {
  Workout {
    name: name.to_string(),
    attributes: attrs(intent, effort, stress),
    fatigue_type,
  }
}

/// All 32 subsets of the stress flags
pub fn all_stress_profiles() -> Vec<StressProfile> {
  (0u8..32)
    .map(|bits| {
      let kinds: Vec<StressKind> = StressKind::ALL
        .into_iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .map(|(_, k)| k)
        .collect();
      StressProfile::from_kinds(&kinds)
    })
    .collect()
}

/// Every intent x effort x stress subset (8 * 5 * 32)
pub fn all_attribute_combinations() -> Vec<WorkoutAttributes> {
  let mut out = Vec::with_capacity(8 * 5 * 32);
  for intent in PrimaryIntent::ALL {
    for effort in PerceivedEffort::ALL {
      for stress in all_stress_profiles() {
        out.push(WorkoutAttributes {
          primary_intent: intent,
          perceived_effort: effort,
          stress,
          intended_frequency: IntendedFrequency::default(),
          lived_experience: None,
        });
      }
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_sweep_sizes() {
    let profiles = all_stress_profiles();
    assert_eq!(profiles.len(), 32);
    assert_eq!(profiles.iter().filter(|p| p.count() == 5).count(), 1);
    assert_eq!(all_attribute_combinations().len(), 1280);
  }
}
