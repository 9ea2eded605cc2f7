use crate::engine::Verb;
use crate::room::{Player, PlayerAction, TableView};

/// Example player that pays to see every card:
/// calls any bet, checks when there is nothing to call, never raises.
pub struct Station(pub String);

#[async_trait::async_trait]
impl Player for Station {
    fn name(&self) -> &str {
        &self.0
    }

    async fn act(&mut self, view: &TableView) -> PlayerAction {
        match view.legals.verbs.contains(&Verb::Call) {
            true => PlayerAction::of(Verb::Call),
            false => PlayerAction::of(Verb::Check),
        }
    }
}
