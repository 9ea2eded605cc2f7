/// The four betting rounds of a hand, labeled the way the engine
/// and the event stream name them.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    River = 3isize,
}

impl Street {
    pub const fn next(&self) -> Self {
        match self {
            Self::Preflop => Self::Flop,
            Self::Flop => Self::Turn,
            Self::Turn => Self::River,
            Self::River => panic!("terminal"),
        }
    }
    /// community cards on the board once this street is reached
    pub const fn revealed(&self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Street::Preflop => "preflop",
                Street::Flop => "flop",
                Street::Turn => "turn",
                Street::River => "river",
            }
        )
    }
}
