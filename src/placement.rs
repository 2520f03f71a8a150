//! Placement advisor
//!
//! Recommends where a supplemental block sits relative to the day's main
//! session. This is a priority list: the first rule that matches decides.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
  FatigueClassification, FatigueType, PerceivedEffort, PlacementPreference, PrimaryIntent,
  WorkoutAttributes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementInput {
  pub primary_intent: PrimaryIntent,
  pub perceived_effort: PerceivedEffort,
  pub fatigue_type: FatigueType,
  pub stress_impact: bool,
  pub stress_breathing_hr: bool,
}

impl PlacementInput {
  pub fn from_classified(attrs: &WorkoutAttributes, classification: &FatigueClassification) -> Self {
    Self {
      primary_intent: attrs.primary_intent,
      perceived_effort: attrs.perceived_effort,
      fatigue_type: classification.fatigue_type,
      stress_impact: attrs.stress.impact,
      stress_breathing_hr: attrs.stress.breathing_hr,
    }
  }
}

/// Where an intent goes when no higher-priority rule has spoken
fn intent_default(intent: PrimaryIntent) -> Option<PlacementPreference> {
  match intent {
    PrimaryIntent::Mobility | PrimaryIntent::Rehab | PrimaryIntent::SkillCoordination => {
      Some(PlacementPreference::BeforeMain)
    }
    PrimaryIntent::Conditioning | PrimaryIntent::StrengthSupport => Some(PlacementPreference::AfterMain),
    PrimaryIntent::FeelGoodRegulation => Some(PlacementPreference::Flexible),
    PrimaryIntent::PowerBoneDensity | PrimaryIntent::InjuryPrevention => None,
  }
}

pub fn recommend(input: &PlacementInput) -> PlacementPreference {
  let placement = decide(input);
  debug!(
    intent = %input.primary_intent,
    effort = %input.perceived_effort,
    fatigue_type = %input.fatigue_type,
    placement = %placement,
    "recommended placement"
  );
  placement
}

fn decide(input: &PlacementInput) -> PlacementPreference {
  let effort = input.perceived_effort;

  if effort == PerceivedEffort::VeryLight {
    return PlacementPreference::Flexible;
  }

  if input.fatigue_type == FatigueType::SystemCns && effort.is_demanding() {
    return PlacementPreference::Standalone;
  }

  if input.stress_impact && input.stress_breathing_hr && effort != PerceivedEffort::LightFocused {
    return PlacementPreference::Standalone;
  }

  match input.primary_intent {
    PrimaryIntent::PowerBoneDensity => {
      if effort == PerceivedEffort::VeryTaxing {
        PlacementPreference::Standalone
      } else {
        PlacementPreference::BeforeMain
      }
    }
    PrimaryIntent::InjuryPrevention => match effort {
      PerceivedEffort::Moderate | PerceivedEffort::SneakyHard => PlacementPreference::AfterMain,
      _ => PlacementPreference::BeforeMain,
    },
    intent => intent_default(intent).unwrap_or(match input.fatigue_type {
      FatigueType::MuscularTissue => PlacementPreference::AfterMain,
      _ => PlacementPreference::Flexible,
    }),
  }
}

/// Display text explaining a placement. No decision logic here.
pub fn rationale(input: &PlacementInput, placement: PlacementPreference) -> &'static str {
  match placement {
    PlacementPreference::Standalone => {
      if input.fatigue_type == FatigueType::SystemCns {
        "This likely draws on your central nervous system enough that pairing it with main training could compromise both. Consider doing it on a lighter day or with plenty of buffer."
      } else {
        "The combined demands of this block suggest giving it its own timeslot for best results."
      }
    }
    PlacementPreference::BeforeMain => match input.primary_intent {
      PrimaryIntent::Mobility => {
        "Mobility work before training can help you access better positions and move more comfortably under load."
      }
      PrimaryIntent::SkillCoordination => {
        "Coordination and skill work benefits from a fresh nervous system. Doing it before heavy work tends to produce better quality."
      }
      PrimaryIntent::PowerBoneDensity => {
        "Power work requires neural freshness. Placing it early lets you move fast and absorb impact while your system is primed."
      }
      _ => "This type of work tends to benefit from being done while you're still fresh.",
    },
    PlacementPreference::AfterMain => match input.primary_intent {
      PrimaryIntent::StrengthSupport => {
        "Accessory strength work pairs well after main lifts — the muscles are warm and you've already done your priority work."
      }
      PrimaryIntent::Conditioning => {
        "Conditioning after strength training lets you push your main lifts without pre-fatiguing your cardiovascular system."
      }
      _ => "This fits naturally after your main session when the targeted areas are warm.",
    },
    PlacementPreference::Flexible => {
      if input.perceived_effort == PerceivedEffort::VeryLight {
        "At this effort level, timing probably doesn't matter much. Fit it wherever works for your schedule."
      } else {
        "This is fairly adaptable in terms of timing — before, after, or standalone should all work reasonably well."
      }
    }
  }
}
