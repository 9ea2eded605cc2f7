use crate::cards::Card;
use crate::{Chips, Position};

/// One occupied seat as the engine reports it:
/// remaining stack and chips committed to the current betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatView {
    pub stack: Chips,
    pub bet_size: Chips,
}

/// One pot (main or side) as the engine reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pot {
    pub size: Chips,
}

/// One settled claim on a pot: the winning seat and the cards it won with.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Winner {
    pub seat: Position,
    pub cards: Vec<Card>,
}
