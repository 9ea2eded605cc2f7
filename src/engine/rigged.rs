use super::legals::{LegalActions, RaiseWindow, Verb};
use super::seat::{Pot, SeatView, Winner};
use super::table::TableEngine;
use crate::cards::{Card, Rank, Street, Suit};
use crate::{Chips, Position};
use anyhow::bail;

/// Deterministic scripted engine for orchestration tests.
///
/// Honors the [TableEngine] contract for fold/check/call/bet lines with a
/// fixed unshuffled deck: blinds post at button+1/button+2, the button moves
/// one seat per hand, rounds end once every live seat with chips behind has
/// acted and matched the high bet, and settlement pays the last live seat or
/// splits the pot evenly. No hand ranking; test lines never reach a contested
/// showdown whose winner matters.
pub struct Rigged {
    seats: Vec<Option<Chair>>,
    sblind: Chips,
    bblind: Chips,
    button: Position,
    actor: Position,
    street: Street,
    pot: Chips,
    board: Vec<Card>,
    settled: Vec<Vec<Winner>>,
    hand: bool,
    done: bool,
    hands: usize,
    favorite: Option<Position>,
}

#[derive(Debug, Clone, Default)]
struct Chair {
    stack: Chips,
    bet: Chips,
    hole: Vec<Card>,
    folded: bool,
    acted: bool,
}

impl Rigged {
    pub fn new(sblind: Chips, bblind: Chips) -> Self {
        Self {
            seats: Vec::new(),
            sblind,
            bblind,
            button: 0,
            actor: 0,
            street: Street::Preflop,
            pot: 0,
            board: Vec::new(),
            settled: Vec::new(),
            hand: false,
            done: false,
            hands: 0,
            favorite: None,
        }
    }

    /// rig every contested showdown for one seat; folded favorites still lose
    pub fn favor(&mut self, seat: Position) {
        self.favorite = Some(seat);
    }

    /// fixed sorted deck, 2c 2d 2h 2s 3c ..
    fn deck() -> Vec<Card> {
        (0u8..52)
            .map(|n| Card::from((Rank::from(n / 4), Suit::from(n % 4))))
            .collect()
    }

    fn n(&self) -> usize {
        self.seats.len()
    }
    fn chair(&self, seat: Position) -> &Chair {
        self.seats[seat].as_ref().expect("occupied seat")
    }
    fn chair_mut(&mut self, seat: Position) -> &mut Chair {
        self.seats[seat].as_mut().expect("occupied seat")
    }
    fn high_bet(&self) -> Chips {
        self.seats
            .iter()
            .flatten()
            .filter(|c| !c.folded)
            .map(|c| c.bet)
            .max()
            .unwrap_or(0)
    }
    /// minimum legal bet-to amount for the acting seat
    fn min_to(&self) -> Chips {
        match self.high_bet() {
            0 => self.bblind,
            high => high + self.bblind,
        }
    }
    fn live(&self) -> Vec<Position> {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.as_ref().map(|c| (i, c)))
            .filter(|(_, c)| !c.folded)
            .map(|(i, _)| i)
            .collect()
    }
    fn eligible(&self, seat: Position) -> bool {
        self.seats[seat]
            .as_ref()
            .map(|c| !c.folded && c.stack > 0)
            .unwrap_or(false)
    }
    fn next_eligible(&self, from: Position) -> Position {
        (1..=self.n())
            .map(|i| (from + i) % self.n())
            .find(|&i| self.eligible(i))
            .unwrap_or(from)
    }
    fn post(&mut self, seat: Position, amount: Chips) {
        let chair = self.chair_mut(seat);
        let paid = amount.min(chair.stack);
        chair.stack -= paid;
        chair.bet += paid;
    }
}

impl TableEngine for Rigged {
    fn sit(&mut self, seat: Position, chips: Chips) {
        if seat >= self.seats.len() {
            self.seats.resize(seat + 1, None);
        }
        let chair = self.seats[seat].get_or_insert_with(Chair::default);
        chair.stack = chips;
    }

    fn start_hand(&mut self) {
        assert!(!self.hand, "previous hand not settled");
        let n = self.n();
        self.button = match self.hands {
            0 => 0,
            _ => (self.button + 1) % n,
        };
        self.hands += 1;
        let deck = Self::deck();
        for (i, chair) in self.seats.iter_mut().flatten().enumerate() {
            chair.bet = 0;
            chair.folded = false;
            chair.acted = false;
            chair.hole = deck[2 * i..2 * i + 2].to_vec();
        }
        self.board = deck[2 * n..2 * n + 5].to_vec();
        self.street = Street::Preflop;
        self.pot = 0;
        self.settled.clear();
        self.hand = true;
        self.done = false;
        self.post((self.button + 1) % n, self.sblind);
        self.post((self.button + 2) % n, self.bblind);
        self.actor = self.next_eligible((self.button + 2) % n);
    }

    fn in_hand(&self) -> bool {
        self.hand
    }

    fn in_betting_round(&self) -> bool {
        if !self.hand || self.done {
            return false;
        }
        if self.live().len() <= 1 {
            return false;
        }
        let high = self.high_bet();
        self.seats
            .iter()
            .flatten()
            .filter(|c| !c.folded && c.stack > 0)
            .any(|c| !c.acted || c.bet < high)
    }

    fn rounds_completed(&self) -> bool {
        self.done
    }

    fn end_betting_round(&mut self) {
        let bets = self.seats.iter().flatten().map(|c| c.bet).sum::<Chips>();
        self.pot += bets;
        for chair in self.seats.iter_mut().flatten() {
            chair.bet = 0;
            chair.acted = false;
        }
        if self.live().len() <= 1 || self.street == Street::River {
            self.done = true;
        } else {
            self.street = self.street.next();
            self.actor = self.next_eligible(self.button);
        }
    }

    fn to_act(&self) -> Position {
        self.actor
    }

    fn street(&self) -> Street {
        self.street
    }

    fn hole_cards(&self) -> Vec<Option<Vec<Card>>> {
        self.seats
            .iter()
            .map(|c| c.as_ref().map(|c| c.hole.clone()))
            .collect()
    }

    fn community_cards(&self) -> Vec<Card> {
        self.board[..self.street.revealed()].to_vec()
    }

    fn seats(&self) -> Vec<Option<SeatView>> {
        self.seats
            .iter()
            .map(|c| {
                c.as_ref().map(|c| SeatView {
                    stack: c.stack,
                    bet_size: c.bet,
                })
            })
            .collect()
    }

    fn button(&self) -> Position {
        self.button
    }

    fn pots(&self) -> Vec<Pot> {
        let bets = self.seats.iter().flatten().map(|c| c.bet).sum::<Chips>();
        vec![Pot {
            size: self.pot + bets,
        }]
    }

    fn legals(&self) -> LegalActions {
        let chair = self.chair(self.actor);
        let to_call = self.high_bet() - chair.bet;
        let min_bet = self.min_to();
        let mut verbs = vec![Verb::Fold];
        if to_call == 0 {
            verbs.push(Verb::Check);
        } else {
            verbs.push(Verb::Call);
        }
        let raise = match chair.bet + chair.stack {
            all if all > min_bet => RaiseWindow::Open {
                min: min_bet,
                max: all,
            },
            _ => RaiseWindow::Shut,
        };
        if let RaiseWindow::Open { .. } = raise {
            verbs.push(match self.high_bet() {
                0 => Verb::Bet,
                _ => Verb::Raise,
            });
        }
        LegalActions {
            min_bet,
            raise,
            verbs,
        }
    }

    fn act(&mut self, verb: Verb, bet: Option<Chips>) -> anyhow::Result<()> {
        let seat = self.actor;
        let high = self.high_bet();
        let to_call = high - self.chair(seat).bet;
        match verb {
            Verb::Fold => {
                self.chair_mut(seat).folded = true;
            }
            Verb::Check => {
                if to_call != 0 {
                    bail!("cannot check facing a bet of {}", to_call);
                }
            }
            Verb::Call => {
                let chair = self.chair_mut(seat);
                let paid = to_call.min(chair.stack);
                chair.stack -= paid;
                chair.bet += paid;
            }
            Verb::Bet | Verb::Raise => {
                let target = bet.unwrap_or(0);
                if target < self.min_to() {
                    bail!("raise to {} below minimum {}", target, self.min_to());
                }
                let chair = self.chair_mut(seat);
                if target - chair.bet > chair.stack {
                    bail!("raise to {} exceeds stack", target);
                }
                let paid = target - chair.bet;
                chair.stack -= paid;
                chair.bet = target;
                for other in self.seats.iter_mut().flatten() {
                    if !other.folded && other.stack > 0 {
                        other.acted = false;
                    }
                }
            }
        }
        self.chair_mut(seat).acted = true;
        self.actor = self.next_eligible(seat);
        Ok(())
    }

    fn showdown(&mut self) {
        assert!(self.done, "betting rounds not complete");
        let live = self.live();
        let takers = match self.favorite.filter(|f| live.contains(f)) {
            Some(favorite) if live.len() > 1 => vec![favorite],
            _ => live,
        };
        let share = self.pot / takers.len() as Chips;
        let spare = self.pot % takers.len() as Chips;
        for (i, &seat) in takers.iter().enumerate() {
            self.chair_mut(seat).stack += share + if (i as Chips) < spare { 1 } else { 0 };
        }
        self.settled = vec![
            takers
                .iter()
                .map(|&seat| Winner {
                    seat,
                    cards: self.chair(seat).hole.clone(),
                })
                .collect(),
        ];
        self.pot = 0;
        self.hand = false;
    }

    fn winners(&self) -> Vec<Vec<Winner>> {
        self.settled.clone()
    }
}
