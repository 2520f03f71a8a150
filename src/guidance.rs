//! Guidance narrator
//!
//! Turns classification output and raw attributes into coach-style notes.
//! Unlike placement, every trigger is checked independently: zero, one or
//! many notes can come out, always in table order.

use tracing::debug;

use crate::models::{
  Confidence, FatigueClassification, FatigueType, GuidanceNote, IntendedFrequency, NoteVariant, PerceivedEffort,
  PrimaryIntent, Workout, WorkoutAttributes,
};

/// A condition plus the note it produces
struct Trigger<P> {
  applies: P,
  title: &'static str,
  message: &'static str,
  variant: NoteVariant,
}

impl<P> Trigger<P> {
  fn note(&self) -> GuidanceNote {
    GuidanceNote::new(self.title, self.message, self.variant)
  }
}

/// ---------------------------------------------------------------------------
/// Single Workout
/// ---------------------------------------------------------------------------

type WorkoutPredicate = fn(&WorkoutAttributes, &FatigueClassification) -> bool;

fn is_sneaky_hard(a: &WorkoutAttributes, _: &FatigueClassification) -> bool {
  a.perceived_effort == PerceivedEffort::SneakyHard
}

fn is_daily_very_taxing(a: &WorkoutAttributes, _: &FatigueClassification) -> bool {
  a.perceived_effort == PerceivedEffort::VeryTaxing && a.intended_frequency == IntendedFrequency::Daily
}

fn is_cns_heavy(_: &WorkoutAttributes, c: &FatigueClassification) -> bool {
  c.fatigue_type == FatigueType::SystemCns
}

fn is_low_confidence(_: &WorkoutAttributes, c: &FatigueClassification) -> bool {
  c.confidence == Confidence::Low
}

fn is_multi_stress(a: &WorkoutAttributes, _: &FatigueClassification) -> bool {
  a.stress.count() >= 4
}

fn is_daily_very_light(a: &WorkoutAttributes, _: &FatigueClassification) -> bool {
  a.perceived_effort == PerceivedEffort::VeryLight && a.intended_frequency == IntendedFrequency::Daily
}

fn is_regulation(a: &WorkoutAttributes, _: &FatigueClassification) -> bool {
  a.primary_intent == PrimaryIntent::FeelGoodRegulation
}

const WORKOUT_TRIGGERS: [Trigger<WorkoutPredicate>; 7] = [
  Trigger {
    applies: is_sneaky_hard,
    title: "Watch the accumulation",
    message: "You've flagged this as \"sneaky hard\" — it might feel manageable in the moment but could add up over a week. Keep an eye on how you feel by day 3-4.",
    variant: NoteVariant::Caution,
  },
  Trigger {
    applies: is_daily_very_taxing,
    title: "That's a lot of volume",
    message: "Daily sessions of something genuinely taxing is ambitious. This might work short-term, but consider whether 3-4x/week would give you better quality sessions.",
    variant: NoteVariant::Caution,
  },
  Trigger {
    applies: is_cns_heavy,
    title: "Central nervous system demand",
    message: "This block likely draws on your CNS more than your muscles. You might not feel sore, but you could notice slower reactions or reduced motivation if you stack too many of these.",
    variant: NoteVariant::Info,
  },
  Trigger {
    applies: is_low_confidence,
    title: "Hard to classify",
    message: "The engine doesn't have strong signal on this one — the fatigue classification is a rough estimate. Your lived experience is especially important here.",
    variant: NoteVariant::Info,
  },
  Trigger {
    applies: is_multi_stress,
    title: "Multi-system demand",
    message: "This hits a lot of different stress channels. It's not necessarily bad, but it means recovery touches many systems. Give yourself credit for the total load.",
    variant: NoteVariant::Caution,
  },
  Trigger {
    applies: is_daily_very_light,
    title: "Low-friction habit",
    message: "Light, daily work like this can be really powerful over time. Consistency matters more than intensity for these types of blocks.",
    variant: NoteVariant::Positive,
  },
  Trigger {
    applies: is_regulation,
    title: "Not just fluff",
    message: "Regulation work is real training. It supports your nervous system and can actually improve performance on your harder days.",
    variant: NoteVariant::Positive,
  },
];

const LIVED_EXPERIENCE_TITLE: &str = "Your experience";

/// Notes for one workout. The classification must come from the same
/// attributes; the user's lived experience, if any, is always last.
pub fn workout_guidance(attrs: &WorkoutAttributes, classification: &FatigueClassification) -> Vec<GuidanceNote> {
  let mut notes: Vec<GuidanceNote> = WORKOUT_TRIGGERS
    .iter()
    .filter(|t| (t.applies)(attrs, classification))
    .map(Trigger::note)
    .collect();

  if let Some(text) = attrs.lived_experience() {
    notes.push(GuidanceNote::new(LIVED_EXPERIENCE_TITLE, text, NoteVariant::Info));
  }

  debug!(intent = %attrs.primary_intent, notes = notes.len(), "workout guidance");
  notes
}

/// ---------------------------------------------------------------------------
/// Whole Day
/// ---------------------------------------------------------------------------

/// What the day-level triggers look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTally {
  /// Sum of effort weights (1..5 per workout)
  pub total_load: u32,
  /// Workouts stored as system/CNS
  pub system_count: usize,
  pub workout_count: usize,
}

impl DayTally {
  pub fn from_workouts(workouts: &[Workout]) -> Self {
    Self {
      total_load: workouts
        .iter()
        .map(|w| w.attributes.perceived_effort.load_weight())
        .sum(),
      system_count: workouts
        .iter()
        .filter(|w| w.fatigue_type == Some(FatigueType::SystemCns))
        .count(),
      workout_count: workouts.len(),
    }
  }
}

type DayPredicate = fn(&DayTally) -> bool;

fn is_heavy_day(t: &DayTally) -> bool {
  t.total_load >= 12
}

fn has_stacked_cns(t: &DayTally) -> bool {
  t.system_count >= 2
}

fn is_light_day(t: &DayTally) -> bool {
  t.total_load <= 4 && t.workout_count <= 2
}

const DAY_TRIGGERS: [Trigger<DayPredicate>; 3] = [
  Trigger {
    applies: is_heavy_day,
    title: "Heavy supplemental day",
    message: "The combined effort of today's supplemental blocks is substantial. Consider whether you need all of them, or if some could move to a lighter day.",
    variant: NoteVariant::Caution,
  },
  Trigger {
    applies: has_stacked_cns,
    title: "Multiple CNS demands",
    message: "You have more than one system-heavy block today. This can sneak up on you — watch for signs like slower reaction time or reduced motivation.",
    variant: NoteVariant::Caution,
  },
  Trigger {
    applies: is_light_day,
    title: "Light day",
    message: "Today's supplemental load is pretty light — a good day to focus on quality and consistency.",
    variant: NoteVariant::Positive,
  },
];

/// Notes for the set of workouts scheduled on one day
pub fn day_guidance(workouts: &[Workout]) -> Vec<GuidanceNote> {
  if workouts.is_empty() {
    return Vec::new();
  }

  let tally = DayTally::from_workouts(workouts);
  let notes: Vec<GuidanceNote> = DAY_TRIGGERS
    .iter()
    .filter(|t| (t.applies)(&tally))
    .map(Trigger::note)
    .collect();

  debug!(
    total_load = tally.total_load,
    system_count = tally.system_count,
    notes = notes.len(),
    "day guidance"
  );
  notes
}
