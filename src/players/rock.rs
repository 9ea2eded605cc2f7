use crate::engine::Verb;
use crate::room::{Player, PlayerAction, TableView};

/// Example player that never volunteers chips:
/// checks when checking is free, folds otherwise.
pub struct Rock(pub String);

#[async_trait::async_trait]
impl Player for Rock {
    fn name(&self) -> &str {
        &self.0
    }

    async fn act(&mut self, view: &TableView) -> PlayerAction {
        match view.legals.verbs.contains(&Verb::Check) {
            true => PlayerAction::of(Verb::Check),
            false => PlayerAction::of(Verb::Fold),
        }
    }
}
