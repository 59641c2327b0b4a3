//! Fisher–Yates shuffle of a standard 52-card deck.

use std::fmt;

use rand::Rng;

use crate::constants::DECK_SIZE;
use crate::input::RawInput;
use crate::options::Options;
use crate::strategy::{Algorithm, Description, ExecutionContext, WorkshopError};

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    fn symbol(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Card rank, two through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }
}

/// A playing card, displayed as `<rank> <suit>` (e.g. `Queen S`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank.name(), self.suit.symbol())
    }
}

/// A fresh deck, suit by suit, ranks ascending.
#[must_use]
pub fn new_deck() -> Vec<Card> {
    let deck: Vec<Card> = Suit::ALL
        .into_iter()
        .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card { rank, suit }))
        .collect();
    debug_assert_eq!(deck.len(), DECK_SIZE);
    deck
}

/// In-place Fisher–Yates shuffle.
///
/// Walks `i` from the last index down to 1 and swaps with a uniform index
/// in `0..=i`, giving every permutation equal probability.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Deck shuffle strategy. Takes no input.
pub struct DeckShuffle;

impl DeckShuffle {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// A new deck shuffled with `rng`.
    pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
        let mut deck = new_deck();
        fisher_yates(&mut deck, rng);
        deck
    }
}

impl Default for DeckShuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl Algorithm for DeckShuffle {
    type Input = ();
    type Output = Vec<Card>;

    fn validate(&self, _raw: &RawInput, _opts: &Options) -> Result<Option<()>, WorkshopError> {
        Ok(Some(()))
    }

    fn compute(&self, (): (), _ctx: &ExecutionContext<'_>) -> Result<Vec<Card>, WorkshopError> {
        Ok(Self::shuffled_deck(&mut rand::thread_rng()))
    }

    fn describe(&self, output: &Vec<Card>) -> Description {
        let cards: Vec<String> = output.iter().map(ToString::to_string).collect();
        Description::new("Shuffled a deck of cards", format!("[{}]", cards.join(", ")))
    }

    fn render(&self, output: &Vec<Card>) -> String {
        output
            .iter()
            .enumerate()
            .map(|(i, card)| format!("{}. {card}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
