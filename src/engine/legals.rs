use crate::Chips;
use colored::Colorize;

/// The action verbs a seat may declare on its turn.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    Fold,
    Call,
    Check,
    Bet,
    Raise,
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Verb::Fold => write!(f, "{}", "fold".red()),
            Verb::Check => write!(f, "{}", "check".cyan()),
            Verb::Call => write!(f, "{}", "call".yellow()),
            Verb::Bet => write!(f, "{}", "bet".green()),
            Verb::Raise => write!(f, "{}", "raise".green()),
        }
    }
}

/// Whether the acting seat may raise, and between which chip amounts.
/// Tagged so callers never probe an optional range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum RaiseWindow {
    Shut,
    Open { min: Chips, max: Chips },
}

impl RaiseWindow {
    /// effective minimum raise, 0 when no raise is legal
    pub fn floor(&self) -> Chips {
        match self {
            Self::Shut => 0,
            Self::Open { min, .. } => *min,
        }
    }
    /// effective maximum raise, the acting stack when no raise is legal
    pub fn ceiling(&self, stack: Chips) -> Chips {
        match self {
            Self::Shut => stack,
            Self::Open { max, .. } => *max,
        }
    }
}

/// The engine-computed set of actions available to the seat to act.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LegalActions {
    pub min_bet: Chips,
    pub raise: RaiseWindow,
    pub verbs: Vec<Verb>,
}
