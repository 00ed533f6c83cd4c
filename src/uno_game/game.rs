use super::card::{Card, CardFace};
use super::deck::{Deck, DECK_SIZE};
use super::pile::{draw_from_pickup_pile, DiscardPile, Hand, PickupPile};
use super::player::Player;
use super::turn::{self, TurnPhase};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Complete { winner_id: usize },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("cannot move {requested} card(s), only {available} available")]
    InvalidTransferCount { requested: usize, available: usize },
    #[error("card sequence is empty")]
    EmptySequence,
    #[error("index {index} is out of range (must be between 0 and {len} exclusive)")]
    OutOfRangeSelection { index: usize, len: usize },
    #[error("card at index {index} cannot be placed")]
    IllegalCardSelection { index: usize },
    #[error("deck has already been generated")]
    DeckAlreadyGenerated,
    #[error("game is already over")]
    GameAlreadyOver,
    #[error("a game needs at least one player")]
    NoPlayers,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    CardPlayed {
        player_id: usize,
        player_name: String,
        card: String,
    },
    TurnSkipped {
        player_id: usize,
        player_name: String,
    },
    CardsDrawn {
        player_id: usize,
        count: usize,
    },
    PlayerWins {
        player_id: usize,
        player_name: String,
    },
}

/// How a turn ended: the terminal phase and the event to report.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub phase: TurnPhase,
    pub event: GameEvent,
}

/// One table: the players, the two shared piles and whose turn it is.
#[derive(Debug)]
pub struct UnoGame {
    players: Vec<Player>,
    discard_pile: DiscardPile,
    pickup_pile: PickupPile,
    current_turn: usize,
    status: GameStatus,
}

impl UnoGame {
    /// Generates a deck with `rng`, deals a hand to each name in order,
    /// seeds the discard pile and leaves the rest as the pickup pile.
    pub fn new<R: Rng + ?Sized>(player_names: Vec<String>, rng: &mut R) -> Result<Self, GameError> {
        if player_names.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut deck = Deck::new();
        deck.generate(rng)?;

        let mut players = Vec::with_capacity(player_names.len());
        for name in player_names {
            let hand = Hand::deal(&mut deck)?;
            players.push(Player::new(name, hand));
        }

        let discard_pile = DiscardPile::seed(&mut deck)?;
        let pickup_pile = PickupPile::from_deck(&mut deck);

        let game = Self {
            players,
            discard_pile,
            pickup_pile,
            current_turn: 0,
            status: GameStatus::InProgress,
        };
        debug_assert_eq!(game.card_count(), DECK_SIZE, "cards lost while dealing");

        log::info!(
            "Started a game with {} players, top card {}",
            game.players.len(),
            game.discard_pile.top()?.details()
        );
        Ok(game)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    pub fn pickup_pile(&self) -> &PickupPile {
        &self.pickup_pile
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn top_card(&self) -> Result<&Card, GameError> {
        self.discard_pile.top()
    }

    /// Every card on the table, across all hands and piles.
    pub fn card_count(&self) -> usize {
        self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.discard_pile.len()
            + self.pickup_pile.len()
    }

    /// Works out whether the current player can play at all.
    pub fn begin_turn(&self) -> Result<TurnPhase, GameError> {
        if matches!(self.status, GameStatus::Complete { .. }) {
            return Err(GameError::GameAlreadyOver);
        }
        Ok(TurnPhase::begin(
            self.discard_pile.top()?,
            self.current_player().hand().cards(),
        ))
    }

    /// Plays the current player's card at `card_index` and passes the turn.
    ///
    /// A rejected selection changes nothing and keeps the turn with the
    /// same player.
    pub fn play_card(&mut self, card_index: usize) -> Result<TurnReport, GameError> {
        if matches!(self.status, GameStatus::Complete { .. }) {
            return Err(GameError::GameAlreadyOver);
        }

        let player_id = self.current_turn;
        let player = &mut self.players[player_id];
        let phase = turn::play_from_hand(player.hand_mut(), card_index, &mut self.discard_pile)?;

        let player_name = player.name().to_string();
        let card = self.discard_pile.top()?.details();
        log::info!("{} played {}", player_name, card);

        if player.has_won() {
            self.status = GameStatus::Complete {
                winner_id: player_id,
            };
            log::info!("{} has won the game", player_name);
            return Ok(TurnReport {
                phase,
                event: GameEvent::PlayerWins {
                    player_id,
                    player_name,
                },
            });
        }

        self.next_turn();
        Ok(TurnReport {
            phase,
            event: GameEvent::CardPlayed {
                player_id,
                player_name,
                card,
            },
        })
    }

    /// Passes the turn of a player who has nothing to play.
    pub fn skip_turn(&mut self) -> TurnReport {
        let player_id = self.current_turn;
        let player_name = self.players[player_id].name().to_string();
        log::info!("{} has no placeable card and passes", player_name);
        self.next_turn();
        TurnReport {
            phase: TurnPhase::TurnSkipped,
            event: GameEvent::TurnSkipped {
                player_id,
                player_name,
            },
        }
    }

    /// Moves `count` cards from the pickup pile into the current player's hand.
    pub fn draw_cards(&mut self, count: usize) -> Result<GameEvent, GameError> {
        let player_id = self.current_turn;
        let hand = self.players[player_id].hand_mut();
        let count = draw_from_pickup_pile(hand, &mut self.pickup_pile, count)?;
        log::debug!("Player {} drew {} card(s)", player_id, count);
        Ok(GameEvent::CardsDrawn { player_id, count })
    }

    /// Hands the turn to the next player, wrapping back to the first.
    pub fn next_turn(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.players.len();
    }
}

#[cfg(test)]
impl UnoGame {
    /// Replaces a player's hand and the whole discard pile with fixed cards.
    pub(crate) fn rig(&mut self, player_id: usize, hand: Vec<Card>, top: Card) {
        let _ = self.players[player_id].hand_mut().replace_cards(hand.into());
        let _ = self
            .discard_pile
            .replace_cards(super::sequence::CardSequence::singleton(top));
    }

    /// Replaces the pickup pile with fixed cards.
    pub(crate) fn rig_pickup(&mut self, cards: Vec<Card>) {
        let _ = self.pickup_pile.replace_cards(cards.into());
    }
}
