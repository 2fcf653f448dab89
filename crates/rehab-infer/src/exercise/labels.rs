use std::fmt;
use std::str::FromStr;

/// Number of exercises the classifier distinguishes
pub const EXERCISE_COUNT: usize = 10;

/// Physical-therapy exercises, keyed by class index 1..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExerciseLabel {
    DeepSquat = 1,
    HurdleStep = 2,
    InlineLunge = 3,
    SideLunge = 4,
    SitToStand = 5,
    StandingActiveStraightLegRaise = 6,
    StandingShoulderAbduction = 7,
    StandingShoulderExtension = 8,
    StandingShoulderInternalExternalRotation = 9,
    StandingShoulderScaption = 10,
}

impl ExerciseLabel {
    pub const ALL: [ExerciseLabel; EXERCISE_COUNT] = [
        ExerciseLabel::DeepSquat,
        ExerciseLabel::HurdleStep,
        ExerciseLabel::InlineLunge,
        ExerciseLabel::SideLunge,
        ExerciseLabel::SitToStand,
        ExerciseLabel::StandingActiveStraightLegRaise,
        ExerciseLabel::StandingShoulderAbduction,
        ExerciseLabel::StandingShoulderExtension,
        ExerciseLabel::StandingShoulderInternalExternalRotation,
        ExerciseLabel::StandingShoulderScaption,
    ];

    /// Look up the label for a class index in `1..=10`
    pub fn from_class_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    pub fn class_index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExerciseLabel::DeepSquat => "deep squat",
            ExerciseLabel::HurdleStep => "hurdle step",
            ExerciseLabel::InlineLunge => "inline lunge",
            ExerciseLabel::SideLunge => "side lunge",
            ExerciseLabel::SitToStand => "sit to stand",
            ExerciseLabel::StandingActiveStraightLegRaise => "standing active straight leg raise",
            ExerciseLabel::StandingShoulderAbduction => "standing shoulder abduction",
            ExerciseLabel::StandingShoulderExtension => "standing shoulder extension",
            ExerciseLabel::StandingShoulderInternalExternalRotation => {
                "standing shoulder internal-external rotation"
            }
            ExerciseLabel::StandingShoulderScaption => "standing shoulder scaption",
        }
    }
}

impl fmt::Display for ExerciseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|label| label.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown exercise: {s}"))
    }
}
