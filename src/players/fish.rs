use crate::engine::Verb;
use crate::room::{Player, PlayerAction, TableView};
use rand::seq::IndexedRandom;

/// Example player that chooses uniformly from the legal verbs,
/// wagering the table minimum whenever it lands on an aggressive one.
pub struct Fish(pub String);

#[async_trait::async_trait]
impl Player for Fish {
    fn name(&self) -> &str {
        &self.0
    }

    async fn act(&mut self, view: &TableView) -> PlayerAction {
        let ref mut rng = rand::rng();
        let verb = view
            .legals
            .verbs
            .choose(rng)
            .copied()
            .expect("non empty legal actions conditional on being asked to move");
        match verb {
            Verb::Bet | Verb::Raise => PlayerAction::wager(verb, view.legals.min_bet),
            _ => PlayerAction::of(verb),
        }
    }
}
