use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate, HandScore};
use crate::hand::{Hand, HandError, HAND_SIZE};
use crate::showdown::{decide, Outcome};
use log::debug;
use rand::Rng;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("card index {0} selected more than once")]
    RepeatedIndex(usize),
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    pub const fn index(self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
        }
    }
}

/// Settings for a single round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Shuffle seed; a random one is drawn when absent.
    pub seed: Option<u64>,
    pub names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: None, names: ["player0".to_string(), "player1".to_string()] }
    }
}

/// A seated player. The score always reflects the current hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
    score: HandScore,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self { name: name.into(), score: evaluate(&hand), hand }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn score(&self) -> HandScore {
        self.score
    }

    fn set_hand(&mut self, hand: Hand) {
        self.score = evaluate(&hand);
        self.hand = hand;
    }
}

/// Result of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    pub outcome: Outcome,
    /// Name of the winning player, `None` on a draw.
    pub winner: Option<String>,
}

/// A two-player five-card draw round.
///
/// ```
/// use draw_poker::game::{Game, GameConfig, Seat};
///
/// let config = GameConfig { seed: Some(7), ..GameConfig::default() };
/// let mut game = Game::deal(&config).unwrap();
/// game.exchange(Seat::A, &[0, 3]).unwrap();
/// assert_eq!(game.deck().len(), 52 - 10 - 2);
/// let _ = game.showdown();
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    players: [Player; 2],
}

impl Game {
    /// Shuffle a fresh deck and deal five cards to each seat.
    pub fn deal(config: &GameConfig) -> Result<Self, GameError> {
        let seed: u64 = config.seed.unwrap_or_else(|| rand::rng().random());
        debug!("shuffling with seed {seed}");
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        Self::deal_from(deck, config.names.clone())
    }

    /// Deal from an already arranged deck.
    pub fn deal_from(mut deck: Deck, names: [String; 2]) -> Result<Self, GameError> {
        let [name_a, name_b] = names;
        let a = Player::new(name_a, deck.deal_hand()?);
        let b = Player::new(name_b, deck.deal_hand()?);
        for p in [&a, &b] {
            debug!("dealt {} to {}", p.hand(), p.name());
        }
        Ok(Self { deck, players: [a, b] })
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Replace the cards at `indices` with fresh cards from the deck.
    ///
    /// All indices are checked before any card is drawn.
    pub fn exchange(&mut self, seat: Seat, indices: &[usize]) -> Result<(), GameError> {
        if indices.is_empty() {
            return Ok(());
        }
        let mut seen = [false; HAND_SIZE];
        for &i in indices {
            let slot = seen.get_mut(i).ok_or(HandError::IndexOutOfRange(i))?;
            if *slot {
                return Err(GameError::RepeatedIndex(i));
            }
            *slot = true;
        }

        let fresh = self.deck.draw_n(indices.len())?;
        let player = &mut self.players[seat.index()];
        let mut hand = *player.hand();
        for (&i, card) in indices.iter().zip(fresh) {
            hand = hand.replace(i, card)?;
        }
        debug!("{} exchanged {:?}, now holds {}", player.name(), indices, hand);
        player.set_hand(hand);
        Ok(())
    }

    pub fn showdown(&self) -> Showdown {
        let [a, b] = &self.players;
        let outcome = decide(&a.score(), &b.score());
        let winner = match outcome {
            Outcome::PlayerAWins => Some(a.name().to_string()),
            Outcome::PlayerBWins => Some(b.name().to_string()),
            Outcome::Draw => None,
        };
        debug!("showdown: {} ({}) vs {} ({}): {outcome}", a.name(), a.score(), b.name(), b.score());
        Showdown { outcome, winner }
    }
}
