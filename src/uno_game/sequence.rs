use super::card::{Card, CardFace};
use super::game::GameError;
use rand::Rng;
use serde::Serialize;

/// How many cards a [`CardSequence::transfer`] should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Take {
    /// Everything in the source.
    All,
    /// The first `n` cards of the source. `Exactly(0)` means everything.
    Exactly(usize),
}

impl From<usize> for Take {
    fn from(count: usize) -> Self {
        if count == 0 {
            Take::All
        } else {
            Take::Exactly(count)
        }
    }
}

/// An ordered run of cards. The last card is the top.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct CardSequence {
    cards: Vec<Card>,
}

impl CardSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a single card so it can be handed to [`CardSequence::transfer`].
    pub fn singleton(card: Card) -> Self {
        Self { cards: vec![card] }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// The most recently added card.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Appends a freshly minted card. Only deck generation creates cards.
    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes the card at `index` and returns it as a one-card sequence.
    pub fn take(&mut self, index: usize) -> Result<CardSequence, GameError> {
        if index >= self.cards.len() {
            return Err(GameError::OutOfRangeSelection {
                index,
                len: self.cards.len(),
            });
        }
        Ok(Self::singleton(self.cards.remove(index)))
    }

    /// Moves cards from the front of `from` onto the back of `into`,
    /// keeping their order. Returns how many cards moved.
    ///
    /// Asking for more cards than `from` holds, or transferring out of an
    /// empty sequence, is rejected and leaves both sequences untouched.
    pub fn transfer(
        count: Take,
        from: &mut CardSequence,
        into: &mut CardSequence,
    ) -> Result<usize, GameError> {
        if from.is_empty() {
            return Err(GameError::EmptySequence);
        }

        let available = from.len();
        let count = match count {
            Take::All | Take::Exactly(0) => available,
            Take::Exactly(n) if n > available => {
                return Err(GameError::InvalidTransferCount {
                    requested: n,
                    available,
                });
            }
            Take::Exactly(n) => n,
        };

        let before = from.len() + into.len();
        into.cards.extend(from.cards.drain(..count));
        debug_assert_eq!(before, from.len() + into.len(), "transfer lost cards");

        log::debug!(
            "Transferred {} card(s), {} left in source",
            count,
            from.len()
        );
        Ok(count)
    }

    /// Renders every card as `[[name, type], [name, type], ...]`.
    pub fn describe(&self) -> String {
        let entries: Vec<String> = self.cards.iter().map(|card| card.details()).collect();
        format!("[{}]", entries.join(", "))
    }

    /// Renders the cards above `from_index_exclusive`, top first.
    ///
    /// Walks backward from the last card down to, but not including,
    /// `from_index_exclusive`. Passing `0` renders `"[]"`.
    pub fn describe_window(&self, from_index_exclusive: usize) -> String {
        if from_index_exclusive == 0 {
            return "[]".to_string();
        }

        let entries: Vec<String> = self
            .cards
            .iter()
            .enumerate()
            .rev()
            .take_while(|(i, _)| *i > from_index_exclusive)
            .map(|(_, card)| card.details())
            .collect();
        format!("[{}]", entries.join(", "))
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.cards.len();
        for i in 0..n.saturating_sub(1) {
            let j = rng.random_range(i..n);
            self.cards.swap(i, j);
        }
    }
}

impl<'a> IntoIterator for &'a CardSequence {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for CardSequence {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}
