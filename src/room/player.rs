use super::view::TableView;
use crate::Chips;
use crate::engine::Verb;

/// A declared decision for one turn.
///
/// Decisions often arrive from external agents as loose JSON, so `action`
/// stays optional: a blob with no action value still deserializes and is
/// rejected by the room as a contract violation rather than lost in a parse
/// error. `bet` carries the declared chip amount for bets and raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerAction {
    #[serde(default)]
    pub action: Option<Verb>,
    #[serde(default)]
    pub bet: Option<Chips>,
}

impl PlayerAction {
    pub fn of(verb: Verb) -> Self {
        Self {
            action: Some(verb),
            bet: None,
        }
    }
    pub fn wager(verb: Verb, bet: Chips) -> Self {
        Self {
            action: Some(verb),
            bet: Some(bet),
        }
    }
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

/// Trait for entities that make poker decisions.
/// Implementations can be scripted bots, humans via CLI, LLM agents over
/// HTTP, etc.
///
/// The async design allows slow or IO-bound deciders to suspend the room at
/// exactly one point: the room performs no work while a decision is pending
/// and resumes deterministically when it resolves. Timeouts are the caller's
/// business; wrap the decider if a stalled turn must be bounded.
#[async_trait::async_trait]
pub trait Player: Send {
    /// identity; unique within a game, names ledger files
    fn name(&self) -> &str;

    /// Make a decision for the turn described by `view`.
    /// The view is a point-in-time copy; holding it after returning is fine
    /// but it never updates.
    async fn act(&mut self, view: &TableView) -> PlayerAction;
}
