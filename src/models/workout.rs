use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GuidanceError;
use crate::models::guidance::FatigueType;

/// ---------------------------------------------------------------------------
/// Primary Intent
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimaryIntent {
  Rehab,
  InjuryPrevention,
  StrengthSupport,
  PowerBoneDensity,
  SkillCoordination,
  Mobility,
  Conditioning,
  FeelGoodRegulation,
}

impl PrimaryIntent {
  pub const ALL: [PrimaryIntent; 8] = [
    PrimaryIntent::Rehab,
    PrimaryIntent::InjuryPrevention,
    PrimaryIntent::StrengthSupport,
    PrimaryIntent::PowerBoneDensity,
    PrimaryIntent::SkillCoordination,
    PrimaryIntent::Mobility,
    PrimaryIntent::Conditioning,
    PrimaryIntent::FeelGoodRegulation,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PrimaryIntent::Rehab => "rehab",
      PrimaryIntent::InjuryPrevention => "injury_prevention",
      PrimaryIntent::StrengthSupport => "strength_support",
      PrimaryIntent::PowerBoneDensity => "power_bone_density",
      PrimaryIntent::SkillCoordination => "skill_coordination",
      PrimaryIntent::Mobility => "mobility",
      PrimaryIntent::Conditioning => "conditioning",
      PrimaryIntent::FeelGoodRegulation => "feel_good_regulation",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PrimaryIntent::Rehab => "Rehab",
      PrimaryIntent::InjuryPrevention => "Injury Prevention",
      PrimaryIntent::StrengthSupport => "Strength Support",
      PrimaryIntent::PowerBoneDensity => "Power & Bone Density",
      PrimaryIntent::SkillCoordination => "Skill & Coordination",
      PrimaryIntent::Mobility => "Mobility",
      PrimaryIntent::Conditioning => "Conditioning",
      PrimaryIntent::FeelGoodRegulation => "Feel-Good / Regulation",
    }
  }
}

impl fmt::Display for PrimaryIntent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PrimaryIntent {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("intent", s))
  }
}

/// ---------------------------------------------------------------------------
/// Perceived Effort (ordered, lightest first)
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerceivedEffort {
  VeryLight,
  LightFocused,
  Moderate,
  SneakyHard,
  VeryTaxing,
}

impl PerceivedEffort {
  pub const ALL: [PerceivedEffort; 5] = [
    PerceivedEffort::VeryLight,
    PerceivedEffort::LightFocused,
    PerceivedEffort::Moderate,
    PerceivedEffort::SneakyHard,
    PerceivedEffort::VeryTaxing,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      PerceivedEffort::VeryLight => "very_light",
      PerceivedEffort::LightFocused => "light_focused",
      PerceivedEffort::Moderate => "moderate",
      PerceivedEffort::SneakyHard => "sneaky_hard",
      PerceivedEffort::VeryTaxing => "very_taxing",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      PerceivedEffort::VeryLight => "Very Light",
      PerceivedEffort::LightFocused => "Light but Focused",
      PerceivedEffort::Moderate => "Moderate",
      PerceivedEffort::SneakyHard => "Sneaky Hard",
      PerceivedEffort::VeryTaxing => "Very Taxing",
    }
  }

  /// Sneaky hard and very taxing: the efforts that stack badly
  pub fn is_demanding(&self) -> bool {
    matches!(self, PerceivedEffort::SneakyHard | PerceivedEffort::VeryTaxing)
  }

  /// Day-load weight, 1 (very light) through 5 (very taxing)
  pub fn load_weight(&self) -> u32 {
    match self {
      PerceivedEffort::VeryLight => 1,
      PerceivedEffort::LightFocused => 2,
      PerceivedEffort::Moderate => 3,
      PerceivedEffort::SneakyHard => 4,
      PerceivedEffort::VeryTaxing => 5,
    }
  }
}

impl fmt::Display for PerceivedEffort {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PerceivedEffort {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("effort", s))
  }
}

/// ---------------------------------------------------------------------------
/// Intended Frequency
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntendedFrequency {
  #[serde(rename = "daily")]
  Daily,
  #[serde(rename = "2_3_per_week")]
  #[default]
  TwoToThreePerWeek,
  #[serde(rename = "1_per_week")]
  OncePerWeek,
  #[serde(rename = "occasional")]
  Occasional,
}

impl IntendedFrequency {
  pub const ALL: [IntendedFrequency; 4] = [
    IntendedFrequency::Daily,
    IntendedFrequency::TwoToThreePerWeek,
    IntendedFrequency::OncePerWeek,
    IntendedFrequency::Occasional,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      IntendedFrequency::Daily => "daily",
      IntendedFrequency::TwoToThreePerWeek => "2_3_per_week",
      IntendedFrequency::OncePerWeek => "1_per_week",
      IntendedFrequency::Occasional => "occasional",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      IntendedFrequency::Daily => "Daily",
      IntendedFrequency::TwoToThreePerWeek => "2-3x per Week",
      IntendedFrequency::OncePerWeek => "1x per Week",
      IntendedFrequency::Occasional => "Occasional",
    }
  }
}

impl fmt::Display for IntendedFrequency {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for IntendedFrequency {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == s)
      .ok_or_else(|| GuidanceError::unknown_tag("frequency", s))
  }
}

/// ---------------------------------------------------------------------------
/// Stress Characteristics
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressKind {
  Impact,
  Tendons,
  LocalizedMuscle,
  BreathingHr,
  Coordination,
}

impl StressKind {
  pub const ALL: [StressKind; 5] = [
    StressKind::Impact,
    StressKind::Tendons,
    StressKind::LocalizedMuscle,
    StressKind::BreathingHr,
    StressKind::Coordination,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      StressKind::Impact => "impact",
      StressKind::Tendons => "tendons",
      StressKind::LocalizedMuscle => "localized_muscle",
      StressKind::BreathingHr => "breathing_hr",
      StressKind::Coordination => "coordination",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      StressKind::Impact => "Impact / Joints",
      StressKind::Tendons => "Tendons / Connective",
      StressKind::LocalizedMuscle => "Localized Muscle",
      StressKind::BreathingHr => "Breathing / Heart Rate",
      StressKind::Coordination => "Coordination / CNS",
    }
  }
}

impl fmt::Display for StressKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for StressKind {
  type Err = GuidanceError;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    // Accept the stored column name too ("stress_impact")
    let tag = s.strip_prefix("stress_").unwrap_or(s);
    Self::ALL
      .into_iter()
      .find(|v| v.as_str() == tag)
      .ok_or_else(|| GuidanceError::unknown_tag("stress characteristic", s))
  }
}

/// The five independent stress flags. Any subset may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StressProfile {
  #[serde(rename = "stress_impact", default)]
  pub impact: bool,
  #[serde(rename = "stress_tendons", default)]
  pub tendons: bool,
  #[serde(rename = "stress_localized_muscle", default)]
  pub localized_muscle: bool,
  #[serde(rename = "stress_breathing_hr", default)]
  pub breathing_hr: bool,
  #[serde(rename = "stress_coordination", default)]
  pub coordination: bool,
}

impl StressProfile {
  pub fn from_kinds(kinds: &[StressKind]) -> Self {
    let mut profile = Self::default();
    for kind in kinds {
      profile.set(*kind, true);
    }
    profile
  }

  pub fn has(&self, kind: StressKind) -> bool {
    match kind {
      StressKind::Impact => self.impact,
      StressKind::Tendons => self.tendons,
      StressKind::LocalizedMuscle => self.localized_muscle,
      StressKind::BreathingHr => self.breathing_hr,
      StressKind::Coordination => self.coordination,
    }
  }

  pub fn set(&mut self, kind: StressKind, on: bool) {
    match kind {
      StressKind::Impact => self.impact = on,
      StressKind::Tendons => self.tendons = on,
      StressKind::LocalizedMuscle => self.localized_muscle = on,
      StressKind::BreathingHr => self.breathing_hr = on,
      StressKind::Coordination => self.coordination = on,
    }
  }

  /// Set flags in declaration order
  pub fn active(&self) -> impl Iterator<Item = StressKind> + '_ {
    StressKind::ALL.into_iter().filter(|k| self.has(*k))
  }

  pub fn count(&self) -> usize {
    self.active().count()
  }

  /// Number of flags set on both profiles
  pub fn shared_with(&self, other: &StressProfile) -> usize {
    self.active().filter(|k| other.has(*k)).count()
  }

  /// Impact and elevated breathing/heart rate together
  pub fn impact_with_breathing(&self) -> bool {
    self.impact && self.breathing_hr
  }
}

/// ---------------------------------------------------------------------------
/// Workout Attributes: the only input the engines consume
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutAttributes {
  pub primary_intent: PrimaryIntent,
  pub perceived_effort: PerceivedEffort,
  #[serde(flatten)]
  pub stress: StressProfile,
  #[serde(default)]
  pub intended_frequency: IntendedFrequency,
  /// User's own notes on how this block actually lands
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lived_experience: Option<String>,
}

impl WorkoutAttributes {
  pub fn new(primary_intent: PrimaryIntent, perceived_effort: PerceivedEffort) -> Self {
    Self {
      primary_intent,
      perceived_effort,
      stress: StressProfile::default(),
      intended_frequency: IntendedFrequency::default(),
      lived_experience: None,
    }
  }

  pub fn with_stress(mut self, kinds: &[StressKind]) -> Self {
    self.stress = StressProfile::from_kinds(kinds);
    self
  }

  pub fn with_frequency(mut self, frequency: IntendedFrequency) -> Self {
    self.intended_frequency = frequency;
    self
  }

  pub fn with_lived_experience(mut self, text: impl Into<String>) -> Self {
    self.lived_experience = Some(text.into());
    self
  }

  /// Lived experience text, if the user actually wrote something
  pub fn lived_experience(&self) -> Option<&str> {
    self.lived_experience.as_deref().filter(|s| !s.is_empty())
  }
}

/// ---------------------------------------------------------------------------
/// Workout: a named record as the storage layer hands it over
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub name: String,
  #[serde(flatten)]
  pub attributes: WorkoutAttributes,
  /// Denormalized at write time. Older records may not carry one.
  #[serde(default)]
  pub fatigue_type: Option<FatigueType>,
}

impl Workout {
  /// Build a record with its fatigue type derived from the attributes
  pub fn new(name: impl Into<String>, attributes: WorkoutAttributes) -> Self {
    let fatigue_type = Some(crate::fatigue::classify(&attributes).fatigue_type);
    Self {
      name: name.into(),
      attributes,
      fatigue_type,
    }
  }

  /// Re-derive the stored fatigue type after an attribute edit
  pub fn reclassify(&mut self) {
    self.fatigue_type = Some(crate::fatigue::classify(&self.attributes).fatigue_type);
  }

  /// Derive the fatigue type only when the record arrived without one
  pub fn ensure_fatigue_type(&mut self) {
    if self.fatigue_type.is_none() {
      self.reclassify();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tags_parse_back() {
    for intent in PrimaryIntent::ALL {
      assert_eq!(intent.as_str().parse::<PrimaryIntent>().unwrap(), intent);
    }
    assert_eq!(
      "2_3_per_week".parse::<IntendedFrequency>().unwrap(),
      IntendedFrequency::TwoToThreePerWeek
    );
    assert_eq!("stress_tendons".parse::<StressKind>().unwrap(), StressKind::Tendons);
  }

  #[test]
  fn test_unknown_tags_rejected() {
    assert!(matches!(
      "crossfit".parse::<PrimaryIntent>(),
      Err(GuidanceError::UnknownTag { .. })
    ));
    assert!("hard".parse::<PerceivedEffort>().is_err());
    assert!("weekly".parse::<IntendedFrequency>().is_err());
    assert!("stress_grip".parse::<StressKind>().is_err());
  }

  #[test]
  fn test_effort_order_and_weights() {
    assert!(PerceivedEffort::VeryLight < PerceivedEffort::VeryTaxing);
    let weights: Vec<u32> = PerceivedEffort::ALL.iter().map(|e| e.load_weight()).collect();
    assert_eq!(weights, vec![1, 2, 3, 4, 5]);
    assert!(PerceivedEffort::SneakyHard.is_demanding());
    assert!(!PerceivedEffort::Moderate.is_demanding());
  }

  #[test]
  fn test_stress_profile_counts() {
    let a = StressProfile::from_kinds(&[StressKind::Impact, StressKind::BreathingHr, StressKind::Tendons]);
    let b = StressProfile::from_kinds(&[StressKind::Impact, StressKind::Coordination]);
    assert_eq!(a.count(), 3);
    assert_eq!(a.shared_with(&b), 1);
    assert_eq!(b.shared_with(&a), 1);
    assert!(a.impact_with_breathing());
    assert!(!b.impact_with_breathing());
  }

  #[test]
  fn test_workout_json_shape() {
    let json = r#"{
      "name": "Pogo hops",
      "primary_intent": "power_bone_density",
      "perceived_effort": "moderate",
      "stress_impact": true,
      "intended_frequency": "2_3_per_week",
      "lived_experience": "Calves feel it the next day"
    }"#;
    let workout: Workout = serde_json::from_str(json).unwrap();
    assert_eq!(workout.attributes.primary_intent, PrimaryIntent::PowerBoneDensity);
    assert!(workout.attributes.stress.impact);
    assert!(!workout.attributes.stress.tendons);
    assert_eq!(workout.fatigue_type, None);
    assert_eq!(
      workout.attributes.lived_experience(),
      Some("Calves feel it the next day")
    );
  }

  #[test]
  fn test_unknown_intent_rejected_on_decode() {
    let json = r#"{"name": "x", "primary_intent": "yoga", "perceived_effort": "moderate"}"#;
    assert!(serde_json::from_str::<Workout>(json).is_err());
  }

  #[test]
  fn test_empty_lived_experience_is_absent() {
    let attrs = WorkoutAttributes::new(PrimaryIntent::Mobility, PerceivedEffort::Moderate)
      .with_lived_experience("");
    assert_eq!(attrs.lived_experience(), None);
  }

  #[test]
  fn test_reclassify_after_edit() {
    let mut workout = Workout::new(
      "Couch stretch",
      WorkoutAttributes::new(PrimaryIntent::Mobility, PerceivedEffort::Moderate),
    );
    assert_eq!(workout.fatigue_type, Some(FatigueType::MuscularTissue));

    workout.attributes.primary_intent = PrimaryIntent::SkillCoordination;
    workout.reclassify();
    assert_eq!(workout.fatigue_type, Some(FatigueType::SystemCns));
  }

  #[test]
  fn test_ensure_fatigue_type_keeps_stored_value() {
    let mut missing = Workout {
      name: "Juggling".to_string(),
      attributes: WorkoutAttributes::new(PrimaryIntent::SkillCoordination, PerceivedEffort::Moderate),
      fatigue_type: None,
    };
    missing.ensure_fatigue_type();
    assert_eq!(missing.fatigue_type, Some(FatigueType::SystemCns));

    let mut stored = Workout {
      fatigue_type: Some(FatigueType::Mixed),
      ..missing
    };
    stored.ensure_fatigue_type();
    assert_eq!(stored.fatigue_type, Some(FatigueType::Mixed));
  }
}
