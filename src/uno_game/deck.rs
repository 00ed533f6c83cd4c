use super::card::{Card, CardType, Color, WildType};
use super::game::GameError;
use super::sequence::CardSequence;
use rand::Rng;

/// Number of cards a generated deck holds.
pub const DECK_SIZE: usize = 108;

/// Catalog order used by [`Deck::generate`].
#[derive(Debug, Clone, Copy)]
enum Entry {
    Colored(CardType),
    Colorless(WildType),
}

const CATALOG: [Entry; 15] = [
    Entry::Colored(CardType::Number(0)),
    Entry::Colored(CardType::Number(1)),
    Entry::Colored(CardType::Number(2)),
    Entry::Colored(CardType::Number(3)),
    Entry::Colored(CardType::Number(4)),
    Entry::Colored(CardType::Number(5)),
    Entry::Colored(CardType::Number(6)),
    Entry::Colored(CardType::Number(7)),
    Entry::Colored(CardType::Number(8)),
    Entry::Colored(CardType::Number(9)),
    Entry::Colored(CardType::DrawTwo),
    Entry::Colored(CardType::Reverse),
    Entry::Colored(CardType::Skip),
    Entry::Colorless(WildType::Wild),
    Entry::Colorless(WildType::WildDrawFour),
];

/// The shared pool every hand and pile is drawn from.
#[derive(Debug, Default)]
pub struct Deck {
    cards: CardSequence,
    generated: bool,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the deck with the full catalog and shuffles it once.
    ///
    /// A deck can only be generated once; a second call fails and leaves
    /// the current contents alone.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        if self.generated {
            return Err(GameError::DeckAlreadyGenerated);
        }

        for entry in CATALOG {
            for color in Color::ALL {
                match entry {
                    Entry::Colored(card_type) => {
                        self.cards.push(Card::color(card_type, color));
                        // One zero per color, two of everything else
                        if card_type != CardType::Number(0) {
                            self.cards.push(Card::color(card_type, color));
                        }
                    }
                    Entry::Colorless(wild_type) => {
                        self.cards.push(Card::wild(wild_type));
                    }
                }
            }
        }
        debug_assert_eq!(self.cards.len(), DECK_SIZE);

        self.cards.shuffle(rng);
        self.generated = true;
        log::debug!("Generated and shuffled a {} card deck", self.cards.len());
        Ok(())
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn cards(&self) -> &CardSequence {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut CardSequence {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
