use super::card::Card;
use super::deck::Deck;
use super::game::GameError;
use super::sequence::{CardSequence, Take};

/// Cards dealt into every hand.
pub const HAND_SIZE: usize = 7;

/// A player's cards.
#[derive(Debug, Default)]
pub struct Hand {
    cards: CardSequence,
}

impl Hand {
    /// Deals a fresh hand of [`HAND_SIZE`] cards off the front of the deck.
    pub fn deal(deck: &mut Deck) -> Result<Self, GameError> {
        let mut cards = CardSequence::new();
        CardSequence::transfer(Take::Exactly(HAND_SIZE), deck.cards_mut(), &mut cards)?;
        log::debug!("Dealt a hand, {} cards left in the deck", deck.len());
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &CardSequence {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardSequence {
        &mut self.cards
    }

    /// Swaps in a new set of cards and hands back the old ones.
    #[must_use = "the previous cards are returned, dropping them loses cards"]
    pub fn replace_cards(&mut self, cards: CardSequence) -> CardSequence {
        std::mem::replace(&mut self.cards, cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Where played cards land. Only the top card matters for legality.
#[derive(Debug, Default)]
pub struct DiscardPile {
    cards: CardSequence,
}

impl DiscardPile {
    /// Starts the pile with one card from the deck.
    pub fn seed(deck: &mut Deck) -> Result<Self, GameError> {
        let mut cards = CardSequence::new();
        CardSequence::transfer(Take::Exactly(1), deck.cards_mut(), &mut cards)?;
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &CardSequence {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut CardSequence {
        &mut self.cards
    }

    #[must_use = "the previous cards are returned, dropping them loses cards"]
    pub fn replace_cards(&mut self, cards: CardSequence) -> CardSequence {
        std::mem::replace(&mut self.cards, cards)
    }

    pub fn top(&self) -> Result<&Card, GameError> {
        self.cards.top().ok_or(GameError::EmptySequence)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Everything left in the deck once hands and the discard seed are out.
#[derive(Debug, Default)]
pub struct PickupPile {
    cards: CardSequence,
}

impl PickupPile {
    /// Takes every remaining card. An exhausted deck gives an empty pile.
    pub fn from_deck(deck: &mut Deck) -> Self {
        let mut cards = CardSequence::new();
        match CardSequence::transfer(Take::All, deck.cards_mut(), &mut cards) {
            Ok(moved) => log::debug!("Pickup pile starts with {} cards", moved),
            Err(e) => log::debug!("Pickup pile starts empty: {}", e),
        }
        Self { cards }
    }

    pub fn cards(&self) -> &CardSequence {
        &self.cards
    }

    #[must_use = "the previous cards are returned, dropping them loses cards"]
    pub fn replace_cards(&mut self, cards: CardSequence) -> CardSequence {
        std::mem::replace(&mut self.cards, cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Moves `count` cards off the pickup pile into `hand`.
///
/// The engine never decides how many cards a player picks up; callers
/// pass their own count.
pub fn draw_from_pickup_pile(
    hand: &mut Hand,
    pickup: &mut PickupPile,
    count: usize,
) -> Result<usize, GameError> {
    if count == 0 {
        return Ok(0);
    }
    CardSequence::transfer(Take::Exactly(count), &mut pickup.cards, &mut hand.cards)
}
