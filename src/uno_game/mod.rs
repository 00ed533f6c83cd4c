pub mod card;
pub mod controller;
pub mod deck;
pub mod game;
pub mod pile;
pub mod player;
pub mod sequence;
pub mod settings;
pub mod turn;
pub mod ui;

pub use card::{Card, CardFace, CardType, Color, ColorCard, WildCard, WildType};
pub use controller::{GameController, GameOutcome};
pub use deck::Deck;
pub use game::{GameError, GameEvent, GameStatus, TurnReport, UnoGame};
pub use pile::{draw_from_pickup_pile, DiscardPile, Hand, PickupPile};
pub use player::Player;
pub use sequence::{CardSequence, Take};
pub use settings::Settings;
pub use turn::{cards_match, has_legal_move, TurnPhase};
