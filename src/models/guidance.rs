//! Engine outputs. All of these are projections recomputed on demand from
//! workout attributes and never stored on their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GuidanceError;

/// ---------------------------------------------------------------------------
/// Fatigue Classification
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FatigueType {
  MuscularTissue,
  Mixed,
  SystemCns,
}

impl FatigueType {
  pub const ALL: [FatigueType; 3] = [
    FatigueType::MuscularTissue,
    FatigueType::Mixed,
    FatigueType::SystemCns,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      FatigueType::MuscularTissue => "muscular_tissue",
      FatigueType::Mixed => "mixed",
      FatigueType::SystemCns => "system_cns",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      FatigueType::MuscularTissue => "Muscular / Tissue",
      FatigueType::Mixed => "Mixed",
      FatigueType::SystemCns => "System / CNS",
    }
  }
}

impl fmt::Display for FatigueType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for FatigueType {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("fatigue type", s))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
  High,
  Moderate,
  Low,
}

impl Confidence {
  pub const ALL: [Confidence; 3] = [Confidence::High, Confidence::Moderate, Confidence::Low];

  pub fn as_str(&self) -> &'static str {
    match self {
      Confidence::High => "high",
      Confidence::Moderate => "moderate",
      Confidence::Low => "low",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Confidence::High => "High confidence",
      Confidence::Moderate => "Moderate confidence",
      Confidence::Low => "Low confidence",
    }
  }
}

impl fmt::Display for Confidence {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Confidence {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("confidence", s))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FatigueClassification {
  pub fatigue_type: FatigueType,
  /// One decimal place
  pub muscular_score: f64,
  /// One decimal place
  pub system_score: f64,
  /// muscular_score + system_score
  pub total_score: f64,
  /// In [0, 1], two decimal places
  pub muscular_ratio: f64,
  pub confidence: Confidence,
}

/// ---------------------------------------------------------------------------
/// Placement
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementPreference {
  BeforeMain,
  AfterMain,
  Standalone,
  Flexible,
}

impl PlacementPreference {
  pub const ALL: [PlacementPreference; 4] = [
    PlacementPreference::BeforeMain,
    PlacementPreference::AfterMain,
    PlacementPreference::Standalone,
    PlacementPreference::Flexible,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PlacementPreference::BeforeMain => "before_main",
      PlacementPreference::AfterMain => "after_main",
      PlacementPreference::Standalone => "standalone",
      PlacementPreference::Flexible => "flexible",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PlacementPreference::BeforeMain => "Before main workout",
      PlacementPreference::AfterMain => "After main workout",
      PlacementPreference::Standalone => "On its own",
      PlacementPreference::Flexible => "Flexible timing",
    }
  }
}

impl fmt::Display for PlacementPreference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PlacementPreference {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("placement", s))
  }
}

/// ---------------------------------------------------------------------------
/// Compatibility
/// ---------------------------------------------------------------------------

/// Buckets over the additive compatibility score, worst first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
  LikelyInterference,
  PotentialInterference,
  Neutral,
  Complementary,
}

impl Compatibility {
  pub const ALL: [Compatibility; 4] = [
    Compatibility::LikelyInterference,
    Compatibility::PotentialInterference,
    Compatibility::Neutral,
    Compatibility::Complementary,
  ];

  pub fn from_score(score: i32) -> Self {
    match score {
      s if s >= 3 => Compatibility::Complementary,
      s if s >= 0 => Compatibility::Neutral,
      s if s >= -2 => Compatibility::PotentialInterference,
      _ => Compatibility::LikelyInterference,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Compatibility::Complementary => "complementary",
      Compatibility::Neutral => "neutral",
      Compatibility::PotentialInterference => "potential_interference",
      Compatibility::LikelyInterference => "likely_interference",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Compatibility::Complementary => "Complementary",
      Compatibility::Neutral => "Neutral",
      Compatibility::PotentialInterference => "Possible interference",
      Compatibility::LikelyInterference => "Likely interference",
    }
  }

  pub fn suggestion(&self) -> &'static str {
    match self {
      Compatibility::Complementary => {
        "These two blocks work well together. Stacking them on the same day is probably fine."
      }
      Compatibility::Neutral => {
        "No strong signal either way. Stacking these should be okay, but pay attention to how you feel."
      }
      Compatibility::PotentialInterference => {
        "There's some overlap in what these demand. Consider spacing them out or doing one lighter if they're on the same day."
      }
      Compatibility::LikelyInterference => {
        "These might compete for similar recovery resources. If possible, separate them by at least a day, or be prepared to scale one back."
      }
    }
  }
}

impl fmt::Display for Compatibility {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Compatibility {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("compatibility", s))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
  pub compatibility: Compatibility,
  /// Underlying additive score the bucket came from
  pub score: i32,
  /// In rule evaluation order
  pub reasons: Vec<String>,
  pub suggestion: String,
}

/// ---------------------------------------------------------------------------
/// Guidance Notes
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteVariant {
  Info,
  Caution,
  Positive,
}

impl NoteVariant {
  pub const ALL: [NoteVariant; 3] = [NoteVariant::Info, NoteVariant::Caution, NoteVariant::Positive];

  pub fn as_str(&self) -> &'static str {
    match self {
      NoteVariant::Info => "info",
      NoteVariant::Caution => "caution",
      NoteVariant::Positive => "positive",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      NoteVariant::Info => "Info",
      NoteVariant::Caution => "Heads up",
      NoteVariant::Positive => "Looking good",
    }
  }
}

impl fmt::Display for NoteVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for NoteVariant {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("note variant", s))
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceNote {
  pub title: String,
  pub message: String,
  pub variant: NoteVariant,
}

impl GuidanceNote {
  pub fn new(title: impl Into<String>, message: impl Into<String>, variant: NoteVariant) -> Self {
    Self {
      title: title.into(),
      message: message.into(),
      variant,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day Fatigue Load
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTier {
  Rest,
  Light,
  Moderate,
  Heavy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayFatigueLoad {
  /// Sum of per-workout total scores, one decimal place
  pub total_score: f64,
  pub tier: LoadTier,
}
