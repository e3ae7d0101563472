use serde::{Deserialize, Serialize};

/// Coarse position of a session in the day's routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Intro,
    Morning,
    Evening,
    Done,
}

impl Phase {
    /// Whether the phase walks a step sequence.
    pub fn has_steps(self) -> bool {
        matches!(self, Phase::Morning | Phase::Evening)
    }

    /// Phase entered after the last step of this one.
    pub fn next(self) -> Phase {
        match self {
            Phase::Intro => Phase::Morning,
            Phase::Morning => Phase::Evening,
            Phase::Evening | Phase::Done => Phase::Done,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::Morning => "morning",
            Phase::Evening => "evening",
            Phase::Done => "done",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
