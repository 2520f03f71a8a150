pub mod guidance;
pub mod workout;

pub use guidance::{
  Compatibility, CompatibilityResult, Confidence, DayFatigueLoad, FatigueClassification,
  FatigueType, GuidanceNote, LoadTier, NoteVariant, PlacementPreference,
};
pub use workout::{
  IntendedFrequency, PerceivedEffort, PrimaryIntent, StressKind, StressProfile, Workout,
  WorkoutAttributes,
};
