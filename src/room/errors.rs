/// Failure taxonomy for the orchestration core.
///
/// Everything here is fatal for the hand in progress; nothing is retried.
/// The one self-healing condition (a declared bet below the engine minimum)
/// is not an error at all: it is downgraded to a call inside the turn
/// resolution and only logged.
#[derive(Debug, thiserror::Error)]
pub enum RoomError {
    /// the decision capability returned no action value at all
    #[error("invalid action: no value specified")]
    MissingAction,
    /// initial and final stack lists must pair up one to one
    #[error("initial and final stacks must have the same length ({initial} vs {finals})")]
    StackMismatch { initial: usize, finals: usize },
    /// the engine refused the action; its reason is logged before this is raised
    #[error("engine rejected action: {0}")]
    Engine(anyhow::Error),
    /// the hand loop exited without settling a showdown
    #[error("hand ended unexpectedly")]
    Unresolved,
    /// a ledger append failed
    #[error("ledger write failed: {0}")]
    Ledger(#[from] std::io::Error),
}
