use super::pile::Hand;

#[derive(Debug)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    pub fn new(name: String, hand: Hand) -> Self {
        Self { name, hand }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Checks if the player has won (i.e., their hand is empty).
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::deck::Deck;
    use crate::uno_game::pile::HAND_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_player_owns_dealt_hand() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut deck = Deck::new();
        deck.generate(&mut rng).unwrap();

        let player = Player::new("Alice".to_string(), Hand::deal(&mut deck).unwrap());

        assert_eq!(player.name(), "Alice");
        assert_eq!(player.hand().len(), HAND_SIZE);
        assert!(!player.has_won());
    }

    #[test]
    fn test_empty_hand_has_won() {
        let player = Player::new("Bob".to_string(), Hand::default());
        assert!(player.has_won());
    }
}
