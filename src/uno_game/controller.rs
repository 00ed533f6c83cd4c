use super::game::{GameError, GameEvent, UnoGame};
use super::settings::Settings;
use super::turn::TurnPhase;
use super::ui::{CardInput, ConsoleUI, MenuChoice, TurnChoice};
use rand::rngs::StdRng;
use std::error::Error;

/// How a single table ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Won { player_name: String },
    Quit,
    Blocked,
}

/// Where a card prompt leaves the turn.
enum TurnStep {
    Next(TurnPhase),
    Finished(GameOutcome),
}

pub struct GameController {
    ui: ConsoleUI,
    rng: StdRng,
    settings: Settings,
}

impl GameController {
    pub fn new(settings: Settings) -> Self {
        let ui = ConsoleUI::new(settings.json_events);
        Self::with_ui(ui, settings)
    }

    pub fn with_ui(ui: ConsoleUI, settings: Settings) -> Self {
        let rng = settings.rng();
        Self { ui, rng, settings }
    }

    /// Main menu loop. Returns when the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            match self.ui.main_menu()? {
                MenuChoice::NewGame => {
                    let Some(count) = self.ui.read_player_count()? else {
                        return Ok(());
                    };
                    let Some(names) = self.ui.read_player_names(count)? else {
                        return Ok(());
                    };
                    let mut game = UnoGame::new(names, &mut self.rng)?;
                    let outcome = self.play(&mut game)?;
                    log::info!("Game finished: {:?}", outcome);
                }
                MenuChoice::Exit => return Ok(()),
                MenuChoice::Invalid => self.ui.report("Invalid Choice")?,
            }
        }
    }

    /// Runs turns on `game` until someone wins, quits, or nobody can move.
    ///
    /// Each turn walks its [`TurnPhase`] from `begin_turn` to a terminal
    /// phase. A full round of passes with no cards drawn blocks the table.
    pub fn play(&mut self, game: &mut UnoGame) -> Result<GameOutcome, Box<dyn Error>> {
        let mut passes_in_a_row = 0;

        loop {
            self.ui.display_turn(game)?;

            let mut drew = false;
            let mut phase = game.begin_turn()?;
            loop {
                phase = match phase {
                    TurnPhase::AwaitingChoice => match self.ui.turn_options()? {
                        TurnChoice::PlaceCard => match self.place_card(game)? {
                            TurnStep::Next(next) => next,
                            TurnStep::Finished(outcome) => return Ok(outcome),
                        },
                        TurnChoice::QuitGame => return Ok(GameOutcome::Quit),
                        TurnChoice::Invalid => {
                            self.ui.report("Invalid Choice")?;
                            TurnPhase::AwaitingChoice
                        }
                    },
                    TurnPhase::NoLegalMove => {
                        drew = self.pick_up(game)?;
                        let report = game.skip_turn();
                        self.ui.handle_game_event(&report.event)?;
                        report.phase
                    }
                    TurnPhase::PlayedCard => {
                        passes_in_a_row = 0;
                        break;
                    }
                    TurnPhase::TurnSkipped => {
                        // A drawn card may be playable next round.
                        passes_in_a_row = if drew { 0 } else { passes_in_a_row + 1 };
                        break;
                    }
                };
            }

            if passes_in_a_row >= game.players().len() {
                self.ui
                    .report("Nobody can place a card, the game is blocked")?;
                return Ok(GameOutcome::Blocked);
            }
        }
    }

    /// Prompts for a card until a legal one is placed.
    fn place_card(&mut self, game: &mut UnoGame) -> Result<TurnStep, Box<dyn Error>> {
        loop {
            let index = match self.ui.read_card_index(game)? {
                CardInput::Index(index) => index,
                CardInput::NotANumber => {
                    self.ui.report("Invalid input. Please enter a number.")?;
                    continue;
                }
                CardInput::EndOfInput => return Ok(TurnStep::Finished(GameOutcome::Quit)),
            };

            match game.play_card(index) {
                Ok(report) => {
                    self.ui.handle_game_event(&report.event)?;
                    if let GameEvent::PlayerWins { player_name, .. } = report.event {
                        return Ok(TurnStep::Finished(GameOutcome::Won { player_name }));
                    }
                    return Ok(TurnStep::Next(report.phase));
                }
                Err(GameError::OutOfRangeSelection { len, .. }) => {
                    self.ui.report(&format!(
                        "Out of Range (must be between 0 and {} inclusive)",
                        len.saturating_sub(1)
                    ))?;
                }
                Err(GameError::IllegalCardSelection { .. }) => {
                    self.ui.report("This card cannot be placed")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Applies the configured pickup for a player with nothing to place.
    /// Returns whether any card was actually drawn.
    fn pick_up(&mut self, game: &mut UnoGame) -> Result<bool, Box<dyn Error>> {
        let count = self.settings.draw_on_no_move;
        if count == 0 {
            return Ok(false);
        }

        let available = game.pickup_pile().len();
        if available == 0 {
            return Ok(false);
        }

        let event = game.draw_cards(count.min(available))?;
        self.ui.handle_game_event(&event)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uno_game::card::{Card, CardFace, CardType, Color, WildType};
    use crate::uno_game::ui::tests::SharedBuffer;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn controller(input: &str, settings: Settings) -> (GameController, SharedBuffer) {
        let output = SharedBuffer::default();
        let ui = ConsoleUI::with_streams(
            Box::new(Cursor::new(input.to_string())),
            Box::new(output.clone()),
            settings.json_events,
        );
        (GameController::with_ui(ui, settings), output)
    }

    fn seeded() -> Settings {
        Settings {
            seed: Some(17),
            ..Settings::default()
        }
    }

    fn two_player_game() -> UnoGame {
        let mut rng = StdRng::seed_from_u64(17);
        UnoGame::new(vec!["Alice".to_string(), "Bob".to_string()], &mut rng).unwrap()
    }

    fn number(n: u8, color: Color) -> Card {
        Card::color(CardType::Number(n), color)
    }

    #[test]
    fn test_exit_from_menu() {
        let (mut controller, output) = controller("2\n", seeded());
        controller.run().unwrap();
        assert!(output.contents().contains("1. New Game"));
    }

    #[test]
    fn test_invalid_menu_choice_reprompts() {
        let (mut controller, output) = controller("7\n2\n", seeded());
        controller.run().unwrap();
        assert!(output.contents().contains("Invalid Choice"));
    }

    #[test]
    fn test_new_game_then_quit() {
        // Whoever can move first quits, then the menu exits.
        let (mut controller, output) = controller("1\n2\nAlice\nBob\n2\n2\n", seeded());
        controller.run().unwrap();
        assert!(output.contents().contains("Current Player: Alice"));
    }

    #[test]
    fn test_end_of_input_during_setup() {
        let (mut controller, _) = controller("1\n3\nAlice\n", seeded());
        controller.run().unwrap();
    }

    #[test]
    fn test_blocked_table_ends_the_game() {
        let mut game = two_player_game();
        let top = || Card::wild(WildType::Wild);
        game.rig(1, vec![number(1, Color::Red)], top());
        game.rig(0, vec![number(1, Color::Red)], top());
        let (mut controller, output) = controller("", seeded());

        let outcome = controller.play(&mut game).unwrap();

        assert_eq!(outcome, GameOutcome::Blocked);
        assert!(output.contents().contains("the game is blocked"));
        assert_eq!(game.current_turn(), 0);
    }

    #[test]
    fn test_reprompts_until_a_legal_card() {
        let mut game = two_player_game();
        game.rig(1, vec![number(5, Color::Yellow)], number(5, Color::Red));
        game.rig(
            0,
            vec![number(3, Color::Blue), number(5, Color::Green)],
            number(5, Color::Red),
        );
        // Alice: bad number, out of range, illegal card, then the match.
        // Bob quits.
        let (mut controller, output) = controller("1\nx\n9\n0\n1\n2\n", seeded());

        let outcome = controller.play(&mut game).unwrap();

        let text = output.contents();
        assert!(text.contains("Invalid input. Please enter a number."));
        assert!(text.contains("Out of Range (must be between 0 and 1 inclusive)"));
        assert!(text.contains("This card cannot be placed"));
        assert!(text.contains("Alice placed [5, green]"));
        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!(game.top_card().unwrap().details(), "[5, green]");
    }

    #[test]
    fn test_playing_the_last_card_wins() {
        let mut game = two_player_game();
        game.rig(
            0,
            vec![Card::color(CardType::Skip, Color::Blue)],
            Card::color(CardType::Skip, Color::Red),
        );
        let (mut controller, _) = controller("1\n0\n", seeded());

        let outcome = controller.play(&mut game).unwrap();

        assert_eq!(
            outcome,
            GameOutcome::Won {
                player_name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_pickup_on_no_move() {
        let mut game = two_player_game();
        game.rig(1, vec![number(8, Color::Blue)], number(8, Color::Red));
        game.rig(0, vec![number(3, Color::Blue)], number(8, Color::Red));
        let pickup_before = game.pickup_pile().len();
        let settings = Settings {
            draw_on_no_move: 2,
            ..seeded()
        };
        // Alice draws and passes, Bob quits.
        let (mut controller, output) = controller("2\n", settings);

        let outcome = controller.play(&mut game).unwrap();

        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!(game.players()[0].hand().len(), 3);
        assert_eq!(game.pickup_pile().len(), pickup_before - 2);
        assert!(output.contents().contains("picked up 2 Card(s)"));
    }

    #[test]
    fn test_drawn_match_keeps_table_open() {
        let mut game = two_player_game();
        let top = || Card::wild(WildType::Wild);
        game.rig(1, vec![number(2, Color::Blue)], top());
        game.rig(0, vec![number(1, Color::Red)], top());
        game.rig_pickup(vec![top()]);
        let settings = Settings {
            draw_on_no_move: 1,
            ..seeded()
        };
        // Alice draws the wild and passes, Bob has nothing left to draw,
        // then Alice gets to choose and quits.
        let (mut controller, _) = controller("2\n", settings);

        let outcome = controller.play(&mut game).unwrap();

        assert_eq!(outcome, GameOutcome::Quit);
        assert_eq!(game.current_turn(), 0);
        assert!(game.pickup_pile().is_empty());
        assert_eq!(game.players()[0].hand().len(), 2);
    }
}
