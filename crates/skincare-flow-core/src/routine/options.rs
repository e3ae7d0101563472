use serde::{Deserialize, Serialize};

/// Whether the user leaves the house today.
///
/// Starts out unknown and must be answered before the morning routine can
/// begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoingOut {
    #[default]
    Unknown,
    Yes,
    No,
}

impl GoingOut {
    pub fn as_bool(self) -> Option<bool> {
        match self {
            GoingOut::Unknown => None,
            GoingOut::Yes => Some(true),
            GoingOut::No => Some(false),
        }
    }

    pub fn is_known(self) -> bool {
        self != GoingOut::Unknown
    }
}

impl From<bool> for GoingOut {
    fn from(value: bool) -> Self {
        if value {
            GoingOut::Yes
        } else {
            GoingOut::No
        }
    }
}

/// User selections that decide which steps appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineOptions {
    pub going_out: GoingOut,
    /// Adds the hair-washing block to the morning.
    pub saturday: bool,
    /// Evening only. Replaces the regular serum with a BHA treatment.
    pub do_bha_tonight: bool,
    /// Adds a second minoxidil application in the evening.
    pub minoxidil_twice: bool,
    /// Captured from `going_out` when the morning routine starts.
    ///
    /// Decides between a single and a double evening cleanse.
    pub used_spf_today: bool,
}

impl Default for RoutineOptions {
    fn default() -> Self {
        Self {
            going_out: GoingOut::Unknown,
            saturday: false,
            do_bha_tonight: false,
            minoxidil_twice: true,
            used_spf_today: false,
        }
    }
}
