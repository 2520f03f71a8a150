//! Compatibility evaluator
//!
//! Scores how well two workouts coexist on the same day. Every rule adds a
//! signed delta and, when it fires, a reason. The bucket comes from the final
//! score only.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Compatibility, CompatibilityResult, FatigueType, PrimaryIntent, Workout};

/// Intent pairs that tend to help each other, matched in either order
const COMPLEMENTARY_INTENTS: [(PrimaryIntent, PrimaryIntent); 4] = [
  (PrimaryIntent::Mobility, PrimaryIntent::StrengthSupport),
  (PrimaryIntent::Mobility, PrimaryIntent::PowerBoneDensity),
  (PrimaryIntent::FeelGoodRegulation, PrimaryIntent::Conditioning),
  (PrimaryIntent::Rehab, PrimaryIntent::Mobility),
];

pub fn evaluate(a: &Workout, b: &Workout) -> CompatibilityResult {
  let mut score: i32 = 0;
  let mut reasons: Vec<String> = Vec::new();

  let (aa, ba) = (&a.attributes, &b.attributes);

  // Same fatigue type stacking
  if let (Some(fa), Some(fb)) = (a.fatigue_type, b.fatigue_type) {
    if fa == fb {
      match fa {
        FatigueType::SystemCns => {
          score -= 3;
          reasons.push(
            "Both workouts load the central nervous system — stacking them could accumulate more systemic fatigue than expected.".to_string(),
          );
        }
        FatigueType::MuscularTissue => {
          score -= 1;
          reasons.push(
            "Both target muscular/tissue fatigue — watch for overlapping muscle groups.".to_string(),
          );
        }
        FatigueType::Mixed => {}
      }
    } else if fa != FatigueType::Mixed && fb != FatigueType::Mixed {
      score += 2;
      reasons.push("These load different systems, which tends to spread fatigue more evenly.".to_string());
    }
  }

  if aa.perceived_effort.is_demanding() && ba.perceived_effort.is_demanding() {
    score -= 3;
    reasons.push(
      "Stacking two demanding blocks on the same day may be more taxing than either alone suggests.".to_string(),
    );
  }

  for (x, y) in COMPLEMENTARY_INTENTS {
    let matched = (aa.primary_intent == x && ba.primary_intent == y)
      || (aa.primary_intent == y && ba.primary_intent == x);
    if matched {
      score += 2;
      reasons.push(format!(
        "{} and {} tend to complement each other well.",
        x.label(),
        y.label()
      ));
    }
  }

  let overlap = aa.stress.shared_with(&ba.stress);
  if overlap >= 3 {
    score -= 2;
    reasons.push(
      "These share multiple stress characteristics, which may concentrate fatigue in similar ways.".to_string(),
    );
  } else if overlap == 0 {
    score += 1;
    reasons.push("No overlapping stress characteristics — good separation of demands.".to_string());
  }

  if aa.stress.impact_with_breathing() && ba.stress.impact_with_breathing() {
    score -= 2;
    reasons.push(
      "Both involve impact and elevated heart rate — this combination can be particularly taxing on joints and the cardiovascular system.".to_string(),
    );
  }

  let compatibility = Compatibility::from_score(score);

  debug!(
    first = %a.name,
    second = %b.name,
    score,
    compatibility = ?compatibility,
    "evaluated compatibility"
  );

  CompatibilityResult {
    compatibility,
    score,
    reasons,
    suggestion: compatibility.suggestion().to_string(),
  }
}

/// One cell of a day's compatibility matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCompatibility {
  /// Index into the input slice, always less than `second`
  pub first: usize,
  pub second: usize,
  pub first_name: String,
  pub second_name: String,
  pub result: CompatibilityResult,
}

/// Evaluate every unordered pair, in input order
pub fn compatibility_matrix(workouts: &[Workout]) -> Vec<PairCompatibility> {
  let mut pairs = Vec::new();
  for (i, a) in workouts.iter().enumerate() {
    for (j, b) in workouts.iter().enumerate().skip(i + 1) {
      pairs.push(PairCompatibility {
        first: i,
        second: j,
        first_name: a.name.clone(),
        second_name: b.name.clone(),
        result: evaluate(a, b),
      });
    }
  }
  pairs
}
