use super::bus::{Bus, Token};
use super::config::Config;
use super::errors::RoomError;
use super::event::{Event, Topic};
use super::player::Player;
use super::stats::Ledger;
use crate::Chips;
use crate::engine::{TableEngine, Winner};
use std::path::PathBuf;

/// Central coordinator for one table.
///
/// Owns the engine, the seated players, and the event bus, and drives hands
/// from blinds to showdown strictly one turn at a time: rounds never overlap,
/// no two deciders are ever awaited concurrently, and every engine mutation is
/// applied before the next turn begins. The engine is owned exclusively here;
/// nothing else mutates it for the life of the room.
pub struct Room<E: TableEngine> {
    pub(super) engine: E,
    pub(super) players: Vec<Box<dyn Player>>,
    pub(super) config: Config,
    pub(super) bus: Bus,
}

/// Per-hand settlement: stacks going in, stacks coming out, and the winners
/// of each pot. Stack lists hold seats that were in the hand (nonzero stack),
/// in seat order.
#[derive(Debug, Clone)]
pub struct HandResult {
    pub initial_stacks: Vec<Chips>,
    pub final_stacks: Vec<Chips>,
    pub winners: Vec<Vec<Winner>>,
}

/// Options recognized by [Room::play_hand] and [Room::run]:
/// an output directory enables the per-player profit ledger.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub output: Option<PathBuf>,
}

impl<E: TableEngine> Room<E> {
    /// Seat every player at the configured starting stack.
    pub fn new(engine: E, players: Vec<Box<dyn Player>>, config: Config) -> Self {
        let mut room = Self {
            engine,
            players,
            config,
            bus: Bus::default(),
        };
        for seat in 0..room.players.len() {
            room.engine.sit(seat, room.config.stack());
        }
        room
    }

    pub fn on<F>(&mut self, topic: Topic, handler: F) -> Token
    where
        F: FnMut(&Event) + Send + 'static,
    {
        self.bus.on(topic, handler)
    }
    pub fn off(&mut self, token: Token) {
        self.bus.off(token)
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// per-seat stacks, 0 for vacant seats
    pub fn stacks(&self) -> Vec<Chips> {
        self.engine
            .seats()
            .iter()
            .map(|seat| seat.map(|s| s.stack).unwrap_or(0))
            .collect()
    }

    /// Drive one hand from blinds to showdown.
    ///
    /// Fails with [RoomError::Unresolved] if the engine reports the hand over
    /// without winners to settle; that is an invariant violation, never a
    /// silent no-op.
    pub async fn play_hand(&mut self, options: &RunOptions) -> Result<HandResult, RoomError> {
        let initial_stacks = self.live_stacks();
        self.engine.start_hand();
        self.deal_events();
        self.blind_events();

        while self.engine.in_hand() {
            let holes = self.engine.hole_cards();
            let button = self.engine.button();

            while self.engine.in_betting_round() {
                let seat = self.engine.to_act();
                let street = self.engine.street();
                self.turn(seat, street).await?;
            }

            if !self.engine.rounds_completed() {
                // the round is over even if nobody could act (all-in runout)
                self.engine.end_betting_round();
                self.stage_event();
                continue;
            }

            let board = self.engine.community_cards();
            self.engine.showdown();
            let final_stacks = self.live_stacks();
            let winners = self.engine.winners();

            if let Some(dir) = options.output.as_deref() {
                let names = self
                    .players
                    .iter()
                    .map(|p| p.name().to_string())
                    .collect::<Vec<_>>();
                Ledger::new(dir, self.config.bblind()).record(
                    &names,
                    &initial_stacks,
                    &final_stacks,
                    &holes,
                    &board,
                    button,
                )?;
            }

            self.showdown_events(&initial_stacks, &final_stacks);

            return Ok(HandResult {
                initial_stacks,
                final_stacks,
                winners,
            });
        }

        log::error!("hand ended with no settlement");
        Err(RoomError::Unresolved)
    }

    /// stacks of seats in the hand, in seat order
    pub(super) fn live_stacks(&self) -> Vec<Chips> {
        self.stacks().into_iter().filter(|&s| s != 0).collect()
    }

    fn deal_events(&mut self) {
        for (seat, cards) in self.engine.hole_cards().into_iter().enumerate() {
            if let Some(cards) = cards {
                self.bus.emit(&Event::DealtHoleCards { seat, cards });
            }
        }
    }

    /// always small then big, exactly once per hand, whatever the stacks
    fn blind_events(&mut self) {
        let n = self.players.len();
        let button = self.engine.button();
        self.bus.emit(&Event::PostedSmallBlind {
            seat: (button + 1) % n,
            amount: self.config.sblind(),
        });
        self.bus.emit(&Event::PostedBigBlind {
            seat: (button + 2) % n,
            amount: self.config.bblind(),
        });
    }

    /// announce the street just entered; quiet once betting is over, so a
    /// hand decided by folds emits nothing for streets never reached
    fn stage_event(&mut self) {
        if self.engine.rounds_completed() {
            return;
        }
        self.bus.emit(&Event::ChangedStage {
            street: self.engine.street(),
            cards: self.engine.community_cards(),
        });
    }

    fn showdown_events(&mut self, initial: &[Chips], finals: &[Chips]) {
        for (seat, (&before, &after)) in initial.iter().zip(finals.iter()).enumerate() {
            self.bus.emit(&Event::Showdown {
                seat,
                diff: f64::from(after - before) / f64::from(self.config.bblind()),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Street;
    use crate::engine::rigged::Rigged;
    use crate::engine::{LegalActions, Pot, SeatView, Verb};
    use crate::players::{Rock, Station};
    use crate::room::{PlayerAction, TableView};
    use crate::{Chips, Position};
    use crate::cards::Card;
    use std::sync::{Arc, Mutex};

    /// decider that returns the same declaration every turn
    struct Always(String, PlayerAction);

    #[async_trait::async_trait]
    impl Player for Always {
        fn name(&self) -> &str {
            &self.0
        }
        async fn act(&mut self, _: &TableView) -> PlayerAction {
            self.1
        }
    }

    /// decider that records the snapshot it was shown, then folds
    struct Peek(String, Arc<Mutex<Option<TableView>>>);

    #[async_trait::async_trait]
    impl Player for Peek {
        fn name(&self) -> &str {
            &self.0
        }
        async fn act(&mut self, view: &TableView) -> PlayerAction {
            *self.1.lock().unwrap() = Some(view.clone());
            PlayerAction::of(Verb::Fold)
        }
    }

    fn folder(name: &str) -> Box<dyn Player> {
        Box::new(Always(name.to_string(), PlayerAction::of(Verb::Fold)))
    }

    fn three_handed(hero: Box<dyn Player>) -> Room<Rigged> {
        Room::new(
            Rigged::new(5, 10),
            vec![hero, folder("small"), folder("big")],
            Config::new(1000, 5, 10),
        )
    }

    fn tape(room: &mut Room<Rigged>, topics: &[Topic]) -> Arc<Mutex<Vec<Event>>> {
        let tape = Arc::new(Mutex::new(Vec::new()));
        for &topic in topics {
            let seen = tape.clone();
            room.on(topic, move |event| seen.lock().unwrap().push(event.clone()));
        }
        tape
    }

    #[tokio::test]
    async fn fold_out_preflop_settles_the_pot() {
        let mut room = three_handed(Box::new(Station("hero".into())));
        let stages = tape(&mut room, &[Topic::ChangedStage]);
        let result = room.play_hand(&RunOptions::default()).await.unwrap();
        assert!(result.initial_stacks == vec![1000, 1000, 1000]);
        assert!(result.final_stacks == vec![1015, 995, 990]);
        assert!(result.winners == vec![vec![crate::engine::Winner {
            seat: 0,
            cards: vec![Card::from("2c"), Card::from("2d")],
        }]]);
        assert!(stages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn chips_are_conserved() {
        let mut room = three_handed(Box::new(Station("hero".into())));
        let result = room.play_hand(&RunOptions::default()).await.unwrap();
        assert!(
            result.initial_stacks.iter().sum::<Chips>() == result.final_stacks.iter().sum::<Chips>()
        );
    }

    #[tokio::test]
    async fn blinds_fire_once_in_order() {
        let mut room = three_handed(Box::new(Station("hero".into())));
        let blinds = tape(&mut room, &[Topic::PostedSmallBlind, Topic::PostedBigBlind]);
        room.play_hand(&RunOptions::default()).await.unwrap();
        let blinds = blinds.lock().unwrap();
        assert!(
            *blinds
                == vec![
                    Event::PostedSmallBlind { seat: 1, amount: 5 },
                    Event::PostedBigBlind { seat: 2, amount: 10 },
                ]
        );
    }

    #[tokio::test]
    async fn hole_cards_dealt_to_every_seat() {
        let mut room = three_handed(Box::new(Station("hero".into())));
        let deals = tape(&mut room, &[Topic::DealtHoleCards]);
        room.play_hand(&RunOptions::default()).await.unwrap();
        let deals = deals.lock().unwrap();
        let seats = deals
            .iter()
            .map(|event| match event {
                Event::DealtHoleCards { seat, cards } => {
                    assert!(cards.len() == 2);
                    *seat
                }
                _ => unreachable!(),
            })
            .collect::<Vec<Position>>();
        assert!(seats == vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn checked_down_hand_announces_each_street() {
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(Rock("nit".into())),
            Box::new(Station("caller".into())),
        ];
        let mut room = Room::new(Rigged::new(5, 10), players, Config::new(1000, 5, 10));
        let stages = tape(&mut room, &[Topic::ChangedStage]);
        let result = room.play_hand(&RunOptions::default()).await.unwrap();
        let stages = stages.lock().unwrap();
        let seen = stages
            .iter()
            .map(|event| match event {
                Event::ChangedStage { street, cards } => (*street, cards.len()),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();
        assert!(seen == vec![(Street::Flop, 3), (Street::Turn, 4), (Street::River, 5)]);
        assert!(result.final_stacks == vec![1000, 1000]);
    }

    #[tokio::test]
    async fn small_bet_downgrades_to_call() {
        let limper = Box::new(Always(
            "limper".into(),
            PlayerAction::wager(Verb::Raise, 3),
        ));
        let mut room = three_handed(limper);
        let actions = tape(&mut room, &[Topic::PlayerAction]);
        let result = room.play_hand(&RunOptions::default()).await.unwrap();
        let actions = actions.lock().unwrap();
        assert!(
            actions[0]
                == Event::PlayerAction {
                    seat: 0,
                    action: Verb::Call,
                    bet: Some(0),
                }
        );
        assert!(result.final_stacks == vec![1015, 995, 990]);
    }

    #[tokio::test]
    async fn showdown_events_carry_blind_profit() {
        let mut room = three_handed(Box::new(Station("hero".into())));
        let settlements = tape(&mut room, &[Topic::Showdown]);
        room.play_hand(&RunOptions::default()).await.unwrap();
        let settlements = settlements.lock().unwrap();
        assert!(
            *settlements
                == vec![
                    Event::Showdown { seat: 0, diff: 1.5 },
                    Event::Showdown { seat: 1, diff: -0.5 },
                    Event::Showdown { seat: 2, diff: -1.0 },
                ]
        );
    }

    #[tokio::test]
    async fn snapshot_is_complete_before_the_decision() {
        let seen = Arc::new(Mutex::new(None));
        let mut room = three_handed(Box::new(Peek("peeker".into(), seen.clone())));
        room.play_hand(&RunOptions::default()).await.unwrap();
        let view = seen.lock().unwrap().clone().unwrap();
        assert!(view.player == "peeker");
        assert!(view.street == Street::Preflop);
        assert!(view.pot == 15);
        assert!(view.stack == 1000);
        assert!(view.has_button);
        assert!(view.min_raise == 20);
        assert!(view.max_raise == 1000);
        assert!(view.cards == vec!["2♣️", "2♦️"]);
        assert!(view.board.is_empty());
        let bets = view.seats.iter().map(|s| s.bet_size).collect::<Vec<_>>();
        assert!(bets == vec![0, 5, 10]);
        assert!(view.seats[0].id == 1 && view.seats[0].has_button);
        assert!(view.legals.verbs.contains(&Verb::Call));
    }

    #[tokio::test]
    async fn missing_action_is_fatal() {
        let broken = Box::new(Always(
            "broken".into(),
            PlayerAction {
                action: None,
                bet: Some(40),
            },
        ));
        let mut room = three_handed(broken);
        let result = room.play_hand(&RunOptions::default()).await;
        assert!(matches!(result, Err(RoomError::MissingAction)));
    }

    #[tokio::test]
    async fn engine_rejection_is_fatal() {
        let checker = Box::new(Always("checker".into(), PlayerAction::of(Verb::Check)));
        let mut room = three_handed(checker);
        let result = room.play_hand(&RunOptions::default()).await;
        assert!(matches!(result, Err(RoomError::Engine(_))));
    }

    #[tokio::test]
    async fn ledger_rows_written_when_output_requested() {
        let dir = tempfile::tempdir().unwrap();
        let mut room = three_handed(Box::new(Station("hero".into())));
        let options = RunOptions {
            output: Some(dir.path().to_path_buf()),
        };
        room.play_hand(&options).await.unwrap();
        let hero = std::fs::read_to_string(dir.path().join("hero.csv")).unwrap();
        assert!(hero.lines().nth(0) == Some("position,hole_cards,community_cards,bb_profit"));
        assert!(hero.lines().nth(1) == Some("BTN,2c 2d,,1.5"));
        let small = std::fs::read_to_string(dir.path().join("small.csv")).unwrap();
        assert!(small.lines().nth(1) == Some("SB,2h 2s,,-0.5"));
        let big = std::fs::read_to_string(dir.path().join("big.csv")).unwrap();
        assert!(big.lines().nth(1) == Some("BB,3c 3d,,-1"));
    }

    /// engine double that reports a hand over before it begins
    struct Stalled;

    impl TableEngine for Stalled {
        fn sit(&mut self, _: Position, _: Chips) {}
        fn start_hand(&mut self) {}
        fn in_hand(&self) -> bool {
            false
        }
        fn in_betting_round(&self) -> bool {
            unreachable!()
        }
        fn rounds_completed(&self) -> bool {
            unreachable!()
        }
        fn end_betting_round(&mut self) {
            unreachable!()
        }
        fn to_act(&self) -> Position {
            unreachable!()
        }
        fn street(&self) -> Street {
            unreachable!()
        }
        fn hole_cards(&self) -> Vec<Option<Vec<Card>>> {
            vec![None, None]
        }
        fn community_cards(&self) -> Vec<Card> {
            unreachable!()
        }
        fn seats(&self) -> Vec<Option<SeatView>> {
            vec![
                Some(SeatView {
                    stack: 1000,
                    bet_size: 0,
                }),
                Some(SeatView {
                    stack: 1000,
                    bet_size: 0,
                }),
            ]
        }
        fn button(&self) -> Position {
            0
        }
        fn pots(&self) -> Vec<Pot> {
            unreachable!()
        }
        fn legals(&self) -> LegalActions {
            unreachable!()
        }
        fn act(&mut self, _: Verb, _: Option<Chips>) -> anyhow::Result<()> {
            unreachable!()
        }
        fn showdown(&mut self) {
            unreachable!()
        }
        fn winners(&self) -> Vec<Vec<crate::engine::Winner>> {
            unreachable!()
        }
    }

    #[tokio::test]
    async fn unresolved_hand_is_an_explicit_error() {
        let mut room = Room::new(
            Stalled,
            vec![folder("one"), folder("two")],
            Config::new(1000, 5, 10),
        );
        let result = room.play_hand(&RunOptions::default()).await;
        assert!(matches!(result, Err(RoomError::Unresolved)));
    }
}
