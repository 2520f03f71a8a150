//! Rule-based fatigue classifier
//!
//! Splits a workout's cost into a muscular/tissue component and a
//! systemic/CNS component:
//! - per-intent base scores
//! - per-effort multipliers (system scales faster at the hard end)
//! - additive per-flag stress adjustments
//!
//! The ratio of the two decides the fatigue type; total size and how lopsided
//! the ratio is decide how much to trust it.

use tracing::debug;

use crate::models::{
  Confidence, FatigueClassification, FatigueType, PerceivedEffort, PrimaryIntent, StressKind,
  WorkoutAttributes,
};

/// ---------------------------------------------------------------------------
/// Score Tables
/// ---------------------------------------------------------------------------

/// A (muscular, system) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorePair {
  pub muscular: f64,
  pub system: f64,
}

const fn pair(muscular: f64, system: f64) -> ScorePair {
  ScorePair { muscular, system }
}

pub fn intent_base(intent: PrimaryIntent) -> ScorePair {
  match intent {
    PrimaryIntent::Rehab => pair(6.0, 1.0),
    PrimaryIntent::InjuryPrevention => pair(5.0, 2.0),
    PrimaryIntent::StrengthSupport => pair(7.0, 3.0),
    PrimaryIntent::PowerBoneDensity => pair(4.0, 7.0),
    PrimaryIntent::SkillCoordination => pair(2.0, 6.0),
    PrimaryIntent::Mobility => pair(4.0, 1.0),
    PrimaryIntent::Conditioning => pair(3.0, 6.0),
    PrimaryIntent::FeelGoodRegulation => pair(2.0, 2.0),
  }
}

pub fn effort_multiplier(effort: PerceivedEffort) -> ScorePair {
  match effort {
    PerceivedEffort::VeryLight => pair(0.5, 0.3),
    PerceivedEffort::LightFocused => pair(0.7, 0.5),
    PerceivedEffort::Moderate => pair(1.0, 1.0),
    PerceivedEffort::SneakyHard => pair(1.2, 1.6),
    PerceivedEffort::VeryTaxing => pair(1.5, 1.8),
  }
}

pub fn stress_adjustment(kind: StressKind) -> ScorePair {
  match kind {
    StressKind::Impact => pair(1.0, 2.0),
    StressKind::Tendons => pair(2.0, 1.0),
    StressKind::LocalizedMuscle => pair(3.0, 0.0),
    StressKind::BreathingHr => pair(0.0, 3.0),
    StressKind::Coordination => pair(0.0, 2.0),
  }
}

const MUSCULAR_RATIO_ABOVE: f64 = 0.65;
const SYSTEM_RATIO_BELOW: f64 = 0.35;

const HIGH_CONFIDENCE_TOTAL: f64 = 10.0;
const MODERATE_CONFIDENCE_TOTAL: f64 = 5.0;
const DECISIVE_RATIO_LOW: f64 = 0.25;
const DECISIVE_RATIO_HIGH: f64 = 0.75;

/// ---------------------------------------------------------------------------
/// Classifier
/// ---------------------------------------------------------------------------

pub trait FatigueClassifier {
  fn classify(&self, attrs: &WorkoutAttributes) -> FatigueClassification;
}

/// The table-driven classifier. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl FatigueClassifier for RuleBasedClassifier {
  fn classify(&self, attrs: &WorkoutAttributes) -> FatigueClassification {
    let base = intent_base(attrs.primary_intent);
    let mult = effort_multiplier(attrs.perceived_effort);

    let mut muscular = base.muscular * mult.muscular;
    let mut system = base.system * mult.system;

    for kind in attrs.stress.active() {
      let adj = stress_adjustment(kind);
      muscular += adj.muscular;
      system += adj.system;
    }

    let total = muscular + system;
    let muscular_ratio = muscular_ratio(muscular, system);

    let fatigue_type = classify_type(muscular_ratio);
    let confidence = assess_confidence(total, muscular_ratio);

    let muscular_score = round_to(muscular, 1);
    let system_score = round_to(system, 1);

    debug!(
      intent = %attrs.primary_intent,
      effort = %attrs.perceived_effort,
      muscular_score,
      system_score,
      muscular_ratio,
      fatigue_type = %fatigue_type,
      confidence = %confidence,
      "classified workout"
    );

    FatigueClassification {
      fatigue_type,
      muscular_score,
      system_score,
      total_score: round_to(muscular_score + system_score, 1),
      muscular_ratio: round_to(muscular_ratio, 2),
      confidence,
    }
  }
}

/// Classify with the rule-based classifier
pub fn classify(attrs: &WorkoutAttributes) -> FatigueClassification {
  RuleBasedClassifier.classify(attrs)
}

/// Share of the total that is muscular. A zero total splits evenly.
fn muscular_ratio(muscular: f64, system: f64) -> f64 {
  let total = muscular + system;
  if total > 0.0 {
    muscular / total
  } else {
    0.5
  }
}

fn classify_type(muscular_ratio: f64) -> FatigueType {
  if muscular_ratio > MUSCULAR_RATIO_ABOVE {
    FatigueType::MuscularTissue
  } else if muscular_ratio < SYSTEM_RATIO_BELOW {
    FatigueType::SystemCns
  } else {
    FatigueType::Mixed
  }
}

fn assess_confidence(total: f64, muscular_ratio: f64) -> Confidence {
  let decisive = muscular_ratio > DECISIVE_RATIO_HIGH || muscular_ratio < DECISIVE_RATIO_LOW;
  if total > HIGH_CONFIDENCE_TOTAL && decisive {
    Confidence::High
  } else if total > MODERATE_CONFIDENCE_TOTAL {
    Confidence::Moderate
  } else {
    Confidence::Low
  }
}

/// Round half away from zero to `places` decimals
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{all_attribute_combinations, attrs};

  #[test]
  fn test_power_moderate_is_mixed_with_moderate_confidence() {
    let c = classify(&attrs(PrimaryIntent::PowerBoneDensity, PerceivedEffort::Moderate, &[]));
    assert_eq!(c.muscular_score, 4.0);
    assert_eq!(c.system_score, 7.0);
    assert_eq!(c.total_score, 11.0);
    assert_eq!(c.muscular_ratio, 0.36);
    assert_eq!(c.fatigue_type, FatigueType::Mixed);
    assert_eq!(c.confidence, Confidence::Moderate);
  }

  #[test]
  fn test_sneaky_hard_scales_system_faster() {
    // conditioning: 3 * 1.2 = 3.6 muscular, 6 * 1.6 = 9.6 system
    let c = classify(&attrs(PrimaryIntent::Conditioning, PerceivedEffort::SneakyHard, &[]));
    assert_eq!(c.muscular_score, 3.6);
    assert_eq!(c.system_score, 9.6);
    assert_eq!(c.total_score, 13.2);
    assert_eq!(c.muscular_ratio, 0.27);
    assert_eq!(c.fatigue_type, FatigueType::SystemCns);
    assert_eq!(c.confidence, Confidence::Moderate);
  }

  #[test]
  fn test_stress_flags_are_additive() {
    // strength support moderate: 7/3, + localized muscle (3/0) + tendons (2/1)
    let c = classify(&attrs(
      PrimaryIntent::StrengthSupport,
      PerceivedEffort::Moderate,
      &[StressKind::LocalizedMuscle, StressKind::Tendons],
    ));
    assert_eq!(c.muscular_score, 12.0);
    assert_eq!(c.system_score, 4.0);
    assert_eq!(c.total_score, 16.0);
    assert_eq!(c.muscular_ratio, 0.75);
    assert_eq!(c.fatigue_type, FatigueType::MuscularTissue);
    // 0.75 is not strictly outside [0.25, 0.75]
    assert_eq!(c.confidence, Confidence::Moderate);
  }

  #[test]
  fn test_high_confidence_needs_size_and_lopsided_ratio() {
    // rehab moderate + localized muscle + tendons: 11 muscular, 2 system
    let c = classify(&attrs(
      PrimaryIntent::Rehab,
      PerceivedEffort::Moderate,
      &[StressKind::LocalizedMuscle, StressKind::Tendons],
    ));
    assert_eq!(c.total_score, 13.0);
    assert_eq!(c.confidence, Confidence::High);
    assert_eq!(c.fatigue_type, FatigueType::MuscularTissue);
  }

  #[test]
  fn test_small_totals_have_low_confidence() {
    // feel good very light: 1.0 / 0.6
    let c = classify(&attrs(PrimaryIntent::FeelGoodRegulation, PerceivedEffort::VeryLight, &[]));
    assert_eq!(c.muscular_score, 1.0);
    assert_eq!(c.system_score, 0.6);
    assert_eq!(c.total_score, 1.6);
    assert_eq!(c.muscular_ratio, 0.63);
    assert_eq!(c.fatigue_type, FatigueType::Mixed);
    assert_eq!(c.confidence, Confidence::Low);
  }

  #[test]
  fn test_ratio_boundaries_fall_to_mixed() {
    assert_eq!(classify_type(0.65), FatigueType::Mixed);
    assert_eq!(classify_type(0.35), FatigueType::Mixed);
    assert_eq!(classify_type(0.651), FatigueType::MuscularTissue);
    assert_eq!(classify_type(0.349), FatigueType::SystemCns);
    assert_eq!(classify_type(0.5), FatigueType::Mixed);
  }

  #[test]
  fn test_zero_total_splits_evenly_as_mixed() {
    let ratio = muscular_ratio(0.0, 0.0);
    assert_eq!(ratio, 0.5);
    assert_eq!(classify_type(ratio), FatigueType::Mixed);
    assert_eq!(assess_confidence(0.0, ratio), Confidence::Low);
    assert_eq!(muscular_ratio(3.0, 1.0), 0.75);
  }

  #[test]
  fn test_confidence_gates() {
    assert_eq!(assess_confidence(10.5, 0.2), Confidence::High);
    assert_eq!(assess_confidence(10.0, 0.2), Confidence::Moderate);
    assert_eq!(assess_confidence(10.5, 0.25), Confidence::Moderate);
    assert_eq!(assess_confidence(5.5, 0.9), Confidence::Moderate);
    assert_eq!(assess_confidence(5.0, 0.9), Confidence::Low);
  }

  #[test]
  fn test_rounding_is_half_away_from_zero() {
    assert_eq!(round_to(0.125, 2), 0.13);
    assert_eq!(round_to(2.25, 1), 2.3);
    assert_eq!(round_to(0.364, 2), 0.36);
  }

  #[test]
  fn test_invariants_hold_for_every_combination() {
    for a in all_attribute_combinations() {
      let c = classify(&a);
      assert!(
        (c.total_score - (c.muscular_score + c.system_score)).abs() < 1e-9,
        "total mismatch for {:?}",
        a
      );
      assert!((0.0..=1.0).contains(&c.muscular_ratio));
      assert!(c.muscular_score >= 0.0 && c.system_score >= 0.0);
      assert_eq!(classify(&a), c, "classification not deterministic for {:?}", a);
    }
  }

  #[test]
  fn test_trait_and_free_function_agree() {
    let a = attrs(PrimaryIntent::Mobility, PerceivedEffort::LightFocused, &[StressKind::Tendons]);
    assert_eq!(RuleBasedClassifier.classify(&a), classify(&a));
  }
}
