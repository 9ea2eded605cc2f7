use super::errors::RoomError;
use super::room::{HandResult, Room, RunOptions};
use crate::Chips;
use crate::engine::TableEngine;

/// Aggregate outcome of a multi-hand run: every hand's settlement in order,
/// plus the stacks left standing at the end.
#[derive(Debug, Clone)]
pub struct SeriesResult {
    pub hand_results: Vec<HandResult>,
    pub final_stacks: Vec<Chips>,
}

impl<E: TableEngine> Room<E> {
    /// Drive `hands` sequential hands, carrying stacks forward between them.
    ///
    /// Hands never overlap: the engine and the deciders are not reentrant, so
    /// each settlement is fully recorded before the next deal. Whenever any
    /// seat busts, the whole table re-seats at the configured starting stack
    /// before the next hand; the busted seat is not removed. Any hand failure
    /// aborts the remainder of the run.
    pub async fn run(
        &mut self,
        hands: usize,
        options: &RunOptions,
    ) -> Result<SeriesResult, RoomError> {
        let mut hand_results = Vec::with_capacity(hands);
        for hand in 0..hands {
            log::debug!("hand {} of {}", hand + 1, hands);
            hand_results.push(self.play_hand(options).await?);
            if self.stacks().iter().any(|&stack| stack == 0) {
                log::info!("seat busted, re-seating table at {}", self.config.stack());
                self.reseat();
            }
        }
        Ok(SeriesResult {
            hand_results,
            final_stacks: self.live_stacks(),
        })
    }

    fn reseat(&mut self) {
        for seat in 0..self.players.len() {
            self.engine.sit(seat, self.config.stack());
        }
    }
}
