pub mod schedule;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::compatibility;
use crate::error::{GuidanceError, Result};
use crate::fatigue::classify;
use crate::guidance::workout_guidance;
use crate::models::{
  CompatibilityResult, FatigueClassification, GuidanceNote, PlacementPreference, Workout,
};
use crate::placement::{self, PlacementInput};

/// ---------------------------------------------------------------------------
/// Request Decoding
/// ---------------------------------------------------------------------------

/// Decode a JSON request body. Unknown enum tags fail here, before any
/// engine sees the data.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
  serde_json::from_str(body).map_err(GuidanceError::from)
}

/// Copies of the request workouts, with a fatigue type filled in on any
/// record that arrived without one
pub(crate) fn with_fatigue_types(workouts: &[Workout]) -> Vec<Workout> {
  workouts
    .iter()
    .cloned()
    .map(|mut w| {
      w.ensure_fatigue_type();
      w
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Single Workout
/// ---------------------------------------------------------------------------

/// Everything the workout detail view shows for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutAssessment {
  pub name: String,
  pub classification: FatigueClassification,
  pub placement: PlacementPreference,
  pub placement_label: String,
  pub placement_rationale: String,
  pub notes: Vec<GuidanceNote>,
}

pub fn assess_workout(workout: &Workout) -> WorkoutAssessment {
  let classification = classify(&workout.attributes);
  let input = PlacementInput::from_classified(&workout.attributes, &classification);
  let placement = placement::recommend(&input);
  let notes = workout_guidance(&workout.attributes, &classification);

  WorkoutAssessment {
    name: workout.name.clone(),
    placement_label: placement.label().to_string(),
    placement_rationale: placement::rationale(&input, placement).to_string(),
    placement,
    classification,
    notes,
  }
}

/// Compare two workouts, deriving a fatigue type for either one that lacks it
pub fn compare_workouts(a: &Workout, b: &Workout) -> CompatibilityResult {
  let (mut a, mut b) = (a.clone(), b.clone());
  a.ensure_fatigue_type();
  b.ensure_fatigue_type();
  compatibility::evaluate(&a, &b)
}

/// Compare exactly two workouts from a request list
pub fn compare_pair(workouts: &[Workout]) -> Result<CompatibilityResult> {
  match workouts {
    [a, b] => Ok(compare_workouts(a, b)),
    _ => Err(GuidanceError::InvalidRequest(format!(
      "compare needs exactly 2 workouts, got {}",
      workouts.len()
    ))),
  }
}
