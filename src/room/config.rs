use crate::cards::{Card, Suit};
use crate::{Chips, Position};
use std::collections::HashMap;

/// Immutable game configuration, supplied once at construction.
#[derive(Debug, Clone)]
pub struct Config {
    stack: Chips,
    sblind: Chips,
    bblind: Chips,
    suits: HashMap<Suit, String>,
    hero: Option<Position>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(300, 1, 2)
    }
}

impl Config {
    pub fn new(stack: Chips, sblind: Chips, bblind: Chips) -> Self {
        Self {
            stack,
            sblind,
            bblind,
            suits: Self::emojis(),
            hero: None,
        }
    }
    pub fn with_suits(mut self, suits: HashMap<Suit, String>) -> Self {
        self.suits = suits;
        self
    }
    pub fn with_hero(mut self, hero: Position) -> Self {
        self.hero = Some(hero);
        self
    }

    /// starting (and re-seat) stack size
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn sblind(&self) -> Chips {
        self.sblind
    }
    pub fn bblind(&self) -> Chips {
        self.bblind
    }
    /// the designated point-of-view seat, when one is configured
    pub fn hero(&self) -> Option<Position> {
        self.hero
    }

    /// rank character plus the configured suit symbol, nothing for unmapped suits
    pub fn styled(&self, card: &Card) -> String {
        format!(
            "{}{}",
            card.rank(),
            self.suits
                .get(&card.suit())
                .map(String::as_str)
                .unwrap_or("")
        )
    }

    fn emojis() -> HashMap<Suit, String> {
        HashMap::from([
            (Suit::Club, "♣️".to_string()),
            (Suit::Diamond, "♦️".to_string()),
            (Suit::Heart, "♥️".to_string()),
            (Suit::Spade, "♠️".to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_uses_suit_symbols() {
        let config = Config::default();
        assert!(config.styled(&Card::from("Ah")) == "A♥️");
    }

    #[test]
    fn styled_skips_unmapped_suits() {
        let config = Config::default().with_suits(HashMap::new());
        assert!(config.styled(&Card::from("Ah")) == "A");
    }

    #[test]
    fn hero_seat_is_carried() {
        assert!(Config::default().hero().is_none());
        assert!(Config::new(1000, 5, 10).with_hero(2).hero() == Some(2));
    }
}
