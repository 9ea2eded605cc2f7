use super::errors::RoomError;
use crate::cards::Card;
use crate::{Chips, Position};
use std::io::Write;
use std::path::Path;

/// Standard position labels for N seated players.
///
/// Base sequence BTN/SB/BB, extended from UTG/MP/LJ/HJ/CO while more than
/// three seats remain unlabeled, padded with EP after that, then rotated so
/// the label at each index matches the seat's offset from the button.
pub fn positions(seats: usize, button: Position) -> Vec<&'static str> {
    let mut labels = vec!["BTN", "SB", "BB"];
    let mut extras = std::collections::VecDeque::from(["UTG", "MP", "LJ", "HJ", "CO"]);
    while labels.len() < seats {
        if seats - labels.len() > 3 {
            labels.push(extras.pop_front().unwrap_or("MP"));
        } else {
            labels.push("EP");
        }
    }
    let shift = button % labels.len();
    labels.rotate_right(shift);
    labels
}

/// Append-only per-player profit ledger.
///
/// One CSV file per player, named by identity, created with a header row on
/// first write and only ever appended to after that. One data row per settled
/// hand the player had chips in, with profit normalized to big blinds.
pub struct Ledger<'a> {
    dir: &'a Path,
    bblind: Chips,
}

impl<'a> Ledger<'a> {
    const HEADER: &'static str = "position,hole_cards,community_cards,bb_profit";

    pub fn new(dir: &'a Path, bblind: Chips) -> Self {
        Self { dir, bblind }
    }

    pub fn record(
        &self,
        names: &[String],
        initial: &[Chips],
        finals: &[Chips],
        holes: &[Option<Vec<Card>>],
        board: &[Card],
        button: Position,
    ) -> Result<(), RoomError> {
        if initial.len() != finals.len() {
            return Err(RoomError::StackMismatch {
                initial: initial.len(),
                finals: finals.len(),
            });
        }
        let labels = positions(names.len(), button);
        let board = texts(board);
        for (index, (&before, &after)) in initial.iter().zip(finals.iter()).enumerate() {
            if before == 0 && after == 0 {
                continue;
            }
            let diff = f64::from(after - before) / f64::from(self.bblind);
            let hole = holes
                .get(index)
                .and_then(|h| h.as_deref())
                .map(texts)
                .unwrap_or_default();
            self.append(&names[index], labels[index], &hole, &board, diff)?;
        }
        Ok(())
    }

    fn append(
        &self,
        name: &str,
        label: &str,
        hole: &str,
        board: &str,
        diff: f64,
    ) -> Result<(), RoomError> {
        let path = self.dir.join(format!("{}.csv", name));
        let fresh = !path.exists();
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        if fresh {
            writeln!(file, "{}", Self::HEADER)?;
        }
        writeln!(file, "{},{},{},{}", label, hole, board, diff)?;
        log::trace!("ledgered {} {} {:+}", name, label, diff);
        Ok(())
    }
}

/// space-separated text forms, "Ah Tc"
fn texts(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
