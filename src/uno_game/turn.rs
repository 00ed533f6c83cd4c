//! Legality rules and the play transfer.
//!
//! A hand card may go on the discard pile when it shares its name with the
//! top card, or when both cards carry the same type (color). Wild cards have
//! no type, so they only ever match by name.

use super::card::{Card, CardFace};
use super::game::GameError;
use super::pile::{DiscardPile, Hand};
use super::sequence::{CardSequence, Take};
use serde::Serialize;

/// Where a player's turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnPhase {
    /// At least one card in hand can be played; waiting for a selection.
    AwaitingChoice,
    /// Nothing in hand matches the top card.
    NoLegalMove,
    /// A card went onto the discard pile. Terminal.
    PlayedCard,
    /// The player passed without playing. Terminal.
    TurnSkipped,
}

impl TurnPhase {
    /// Decides up front whether the player gets to choose a card.
    pub fn begin(top_card: &Card, hand: &CardSequence) -> Self {
        if has_legal_move(top_card, hand) {
            TurnPhase::AwaitingChoice
        } else {
            TurnPhase::NoLegalMove
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::PlayedCard | TurnPhase::TurnSkipped)
    }
}

/// True when the names match, or both cards have the same type.
pub fn cards_match(hand_card: &Card, top_card: &Card) -> bool {
    if hand_card.name() == top_card.name() {
        return true;
    }
    match (hand_card.card_type(), top_card.card_type()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

pub fn has_legal_move(top_card: &Card, hand: &CardSequence) -> bool {
    hand.iter().any(|card| cards_match(card, top_card))
}

/// Indices of every hand card that could go on `top_card`.
pub fn legal_indices(top_card: &Card, hand: &CardSequence) -> Vec<usize> {
    hand.iter()
        .enumerate()
        .filter(|(_, card)| cards_match(card, top_card))
        .map(|(i, _)| i)
        .collect()
}

/// Moves the card at `index` from `hand` onto `discard`.
///
/// An out-of-range index or a card that does not match the top card is
/// rejected before anything moves, so the caller can simply ask again.
pub fn play_from_hand(
    hand: &mut Hand,
    index: usize,
    discard: &mut DiscardPile,
) -> Result<TurnPhase, GameError> {
    let card = hand
        .cards()
        .get(index)
        .ok_or(GameError::OutOfRangeSelection {
            index,
            len: hand.len(),
        })?;
    if !cards_match(card, discard.top()?) {
        return Err(GameError::IllegalCardSelection { index });
    }

    let mut chosen = hand.cards_mut().take(index)?;
    CardSequence::transfer(Take::All, &mut chosen, discard.cards_mut())?;
    Ok(TurnPhase::PlayedCard)
}
