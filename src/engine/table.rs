use super::legals::{LegalActions, Verb};
use super::seat::{Pot, SeatView, Winner};
use crate::cards::{Card, Street};
use crate::{Chips, Position};

/// The betting/table engine the room drives.
///
/// The engine owns seats, stacks, the button, pots (side pots included),
/// legal-action computation, and showdown resolution; the room never
/// reimplements any of that. Implementations are mutated exclusively through
/// the room that owns them, one call at a time.
///
/// A hand runs `start_hand` -> betting rounds -> `showdown`, with the room
/// calling `end_betting_round` each time `in_betting_round` turns false.
/// `in_hand` stays true from `start_hand` until `showdown` settles the pots,
/// so a hand decided by folds still terminates through `showdown`.
pub trait TableEngine {
    /// seat (or re-seat) a player with the given stack
    fn sit(&mut self, seat: Position, chips: Chips);
    /// deal hole cards and post blinds
    fn start_hand(&mut self);
    fn in_hand(&self) -> bool;
    fn in_betting_round(&self) -> bool;
    /// all betting rounds are over and showdown may be resolved
    fn rounds_completed(&self) -> bool;
    /// close the current round; reveal the next street or finish betting
    fn end_betting_round(&mut self);
    /// the seat with a pending decision; only meaningful while a round is in progress
    fn to_act(&self) -> Position;
    /// current betting round; only meaningful while the hand is in progress
    fn street(&self) -> Street;
    /// per-seat hole cards, None for vacant seats
    fn hole_cards(&self) -> Vec<Option<Vec<Card>>>;
    fn community_cards(&self) -> Vec<Card>;
    /// per-seat stack and current-round bet, None for vacant seats
    fn seats(&self) -> Vec<Option<SeatView>>;
    fn button(&self) -> Position;
    fn pots(&self) -> Vec<Pot>;
    /// the legal-action set for the seat to act
    fn legals(&self) -> LegalActions;
    /// apply the acting seat's declared action; Err on an illegal one
    fn act(&mut self, verb: Verb, bet: Option<Chips>) -> anyhow::Result<()>;
    /// settle the pots; exactly once per hand
    fn showdown(&mut self);
    /// winners of each pot, in pot order; populated once showdown has settled
    fn winners(&self) -> Vec<Vec<Winner>>;
}
