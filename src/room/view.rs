use crate::Chips;
use crate::cards::Street;
use crate::engine::LegalActions;

/// One occupied seat as shown to the acting player.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SeatInfo {
    /// 1-based table position
    pub id: usize,
    pub name: String,
    pub stack: Chips,
    pub has_button: bool,
    pub bet_size: Chips,
}

/// Point-in-time view of the table for the seat about to act.
///
/// Computed in full before the decision capability is awaited and never
/// mutated afterwards; a slow decider observes the table exactly as it stood
/// when its turn began. Cards are in display form per the configured suit
/// symbols. `min_raise`/`max_raise` fall back to 0 and the acting stack when
/// the engine reports no raise window.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableView {
    pub seats: Vec<SeatInfo>,
    pub street: Street,
    pub player: String,
    pub cards: Vec<String>,
    pub board: Vec<String>,
    pub pot: Chips,
    pub stack: Chips,
    pub legals: LegalActions,
    pub has_button: bool,
    pub min_raise: Chips,
    pub max_raise: Chips,
}
