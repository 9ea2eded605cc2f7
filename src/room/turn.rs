use super::errors::RoomError;
use super::event::Event;
use super::player::PlayerAction;
use super::room::Room;
use super::view::{SeatInfo, TableView};
use crate::Position;
use crate::cards::Street;
use crate::engine::{LegalActions, TableEngine, Verb};

/// Turn resolution: snapshot, solicit, validate, apply.
///
/// Exactly one engine action and one `player_action` event come out of every
/// turn. A declared bet under the engine minimum self-heals into a call with
/// a zero declared amount, logged at warn. Everything else that goes wrong
/// here is fatal for the hand.
impl<E: TableEngine> Room<E> {
    pub(super) async fn turn(&mut self, seat: Position, street: Street) -> Result<(), RoomError> {
        let view = self.view(seat, street);
        let legals = view.legals.clone();
        let decision = self.players[seat].act(&view).await;
        log::trace!("{} {:?}", view.player, decision);
        self.apply(seat, decision, &legals)
    }

    /// the immutable point-in-time snapshot handed to the decider,
    /// built in full before the decision is awaited
    fn view(&self, seat: Position, street: Street) -> TableView {
        let button = self.engine.button();
        let legals = self.engine.legals();
        let holes = self.engine.hole_cards();
        let board = self.engine.community_cards();
        let seats = self.engine.seats();
        let stack = seats
            .get(seat)
            .and_then(|s| s.as_ref())
            .map(|s| s.stack)
            .unwrap_or(0);
        TableView {
            seats: seats
                .iter()
                .enumerate()
                .filter_map(|(i, s)| {
                    s.as_ref().map(|s| SeatInfo {
                        id: i + 1,
                        name: self.players[i].name().to_string(),
                        stack: s.stack,
                        has_button: i == button,
                        bet_size: s.bet_size,
                    })
                })
                .collect(),
            street,
            player: self.players[seat].name().to_string(),
            cards: holes
                .get(seat)
                .and_then(|h| h.as_ref())
                .map(|cards| cards.iter().map(|c| self.config.styled(c)).collect())
                .unwrap_or_default(),
            board: board.iter().map(|c| self.config.styled(c)).collect(),
            pot: self.engine.pots().iter().map(|p| p.size).sum(),
            stack,
            min_raise: legals.raise.floor(),
            max_raise: legals.raise.ceiling(stack),
            has_button: seat == button,
            legals,
        }
    }

    fn apply(
        &mut self,
        seat: Position,
        decision: PlayerAction,
        legals: &LegalActions,
    ) -> Result<(), RoomError> {
        let Some(verb) = decision.action else {
            log::error!(
                "{} returned a decision with no action",
                self.players[seat].name()
            );
            return Err(RoomError::MissingAction);
        };
        let result = match decision.bet {
            Some(bet) if bet > 0 && bet < legals.min_bet => {
                log::warn!(
                    "bet {} below minimum {}, defaulting to call",
                    bet,
                    legals.min_bet
                );
                self.bus.emit(&Event::PlayerAction {
                    seat,
                    action: Verb::Call,
                    bet: Some(0),
                });
                self.engine.act(Verb::Call, decision.bet)
            }
            declared => {
                self.bus.emit(&Event::PlayerAction {
                    seat,
                    action: verb,
                    bet: declared,
                });
                self.engine.act(verb, declared)
            }
        };
        result.map_err(|e| {
            log::error!(
                "engine rejected {} by {}: {}",
                verb,
                self.players[seat].name(),
                e
            );
            RoomError::Engine(e)
        })
    }
}
