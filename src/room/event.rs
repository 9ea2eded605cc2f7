use crate::cards::{Card, Street};
use crate::engine::Verb;
use crate::{Chips, Position};

/// Lifecycle events published by the room as a hand advances.
///
/// Emission order within a hand is fixed: hole cards for every occupied seat,
/// small then big blind, one action per turn, one stage change per street
/// actually entered, and one showdown entry per settled seat.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    PostedSmallBlind {
        seat: Position,
        amount: Chips,
    },
    PostedBigBlind {
        seat: Position,
        amount: Chips,
    },
    DealtHoleCards {
        seat: Position,
        cards: Vec<Card>,
    },
    ChangedStage {
        street: Street,
        cards: Vec<Card>,
    },
    PlayerAction {
        seat: Position,
        action: Verb,
        bet: Option<Chips>,
    },
    /// per-seat profit for the hand, in big blinds
    Showdown {
        seat: Position,
        diff: f64,
    },
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::PostedSmallBlind { .. } => Topic::PostedSmallBlind,
            Event::PostedBigBlind { .. } => Topic::PostedBigBlind,
            Event::DealtHoleCards { .. } => Topic::DealtHoleCards,
            Event::ChangedStage { .. } => Topic::ChangedStage,
            Event::PlayerAction { .. } => Topic::PlayerAction,
            Event::Showdown { .. } => Topic::Showdown,
        }
    }
}

/// Names the kinds of [Event] for subscription.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Topic {
    PostedSmallBlind,
    PostedBigBlind,
    DealtHoleCards,
    ChangedStage,
    PlayerAction,
    Showdown,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Topic::PostedSmallBlind => "posted_small_blind",
                Topic::PostedBigBlind => "posted_big_blind",
                Topic::DealtHoleCards => "dealt_hole_cards",
                Topic::ChangedStage => "changed_stage",
                Topic::PlayerAction => "player_action",
                Topic::Showdown => "showdown",
            }
        )
    }
}
