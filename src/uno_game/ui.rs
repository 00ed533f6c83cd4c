use super::card::CardFace;
use super::game::{GameEvent, UnoGame};
use std::io::{self, BufRead, BufReader, Write};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NewGame,
    Exit,
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnChoice {
    PlaceCard,
    QuitGame,
    Invalid,
}

/// What came back from a card index prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardInput {
    Index(usize),
    NotANumber,
    EndOfInput,
}

pub struct ConsoleUI {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
    json_events: bool,
}

impl ConsoleUI {
    pub fn new(json_events: bool) -> Self {
        Self {
            input: Box::new(BufReader::new(io::stdin())),
            output: Box::new(io::stdout()),
            json_events,
        }
    }

    pub fn with_streams(input: Box<dyn BufRead>, output: Box<dyn Write>, json_events: bool) -> Self {
        Self {
            input,
            output,
            json_events,
        }
    }

    /// Prompts for `label` and returns the trimmed line, or `None` at end of input.
    pub fn read(&mut self, label: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "\nProvide your {}:", label)?;
        write!(self.output, ">")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "\n{}", message)
    }

    pub fn main_menu(&mut self) -> io::Result<MenuChoice> {
        writeln!(self.output, "\nWelcome to Uno v4")?;
        writeln!(self.output, "\t1. New Game")?;
        writeln!(self.output, "\t2. Exit")?;

        Ok(match self.read("choice")?.as_deref() {
            Some("1") => MenuChoice::NewGame,
            Some("2") | None => MenuChoice::Exit,
            Some(_) => MenuChoice::Invalid,
        })
    }

    /// Asks until a player count in the supported range is given.
    pub fn read_player_count(&mut self) -> io::Result<Option<usize>> {
        loop {
            let Some(line) = self.read("number of players")? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(count) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&count) => {
                    return Ok(Some(count))
                }
                Ok(_) => self.report(&format!(
                    "Uno only supports {}-{} players",
                    MIN_PLAYERS, MAX_PLAYERS
                ))?,
                Err(_) => self.report("Invalid input. Please enter a number.")?,
            }
        }
    }

    pub fn read_player_names(&mut self, count: usize) -> io::Result<Option<Vec<String>>> {
        let mut names = Vec::with_capacity(count);
        for number in 1..=count {
            writeln!(self.output, "\nPlayer NO. {}", number)?;
            match self.read("name")? {
                Some(name) => names.push(name),
                None => return Ok(None),
            }
        }
        Ok(Some(names))
    }

    pub fn display_turn(&mut self, game: &UnoGame) -> io::Result<()> {
        let player = game.current_player();
        writeln!(self.output, "\nCurrent Player: {}", player.name())?;
        writeln!(self.output, "Your Current Hand:")?;
        writeln!(self.output, "{}", player.hand().cards().describe())?;
        writeln!(self.output, "The top card on the Discard Pile:")?;
        match game.top_card() {
            Ok(card) => writeln!(self.output, "{}", card.details())?,
            Err(_) => writeln!(self.output, "[]")?,
        }
        writeln!(
            self.output,
            "Pickup Pile Cards Remaining: {}",
            game.pickup_pile().len()
        )
    }

    pub fn turn_options(&mut self) -> io::Result<TurnChoice> {
        writeln!(self.output, "\nGame Options")?;
        writeln!(self.output, "\t1. Place a Card onto Discard Pile")?;
        writeln!(self.output, "\t2. Quit Current Game")?;

        Ok(match self.read("choice")?.as_deref() {
            Some("1") => TurnChoice::PlaceCard,
            Some("2") | None => TurnChoice::QuitGame,
            Some(_) => TurnChoice::Invalid,
        })
    }

    pub fn read_card_index(&mut self, game: &UnoGame) -> io::Result<CardInput> {
        let hand = game.current_player().hand();
        writeln!(self.output, "{}", hand.cards().describe())?;
        let label = format!(
            "choice (index from 0-{})",
            hand.len().saturating_sub(1)
        );

        Ok(match self.read(&label)? {
            None => CardInput::EndOfInput,
            Some(line) => match line.parse::<usize>() {
                Ok(index) => CardInput::Index(index),
                Err(_) => CardInput::NotANumber,
            },
        })
    }

    pub fn handle_game_event(&mut self, event: &GameEvent) -> io::Result<()> {
        if self.json_events {
            let json = serde_json::to_string(event).map_err(io::Error::other)?;
            return writeln!(self.output, "{}", json);
        }

        match event {
            GameEvent::CardPlayed {
                player_name, card, ..
            } => writeln!(self.output, "{} placed {}", player_name, card),
            GameEvent::TurnSkipped { player_name, .. } => writeln!(
                self.output,
                "{} does not have any placeable Cards and finished their turn",
                player_name
            ),
            GameEvent::CardsDrawn { count, .. } => writeln!(
                self.output,
                "You picked up {} Card(s) from the Pickup Pile",
                count
            ),
            GameEvent::PlayerWins { player_name, .. } => {
                writeln!(self.output, "{} has won the game!", player_name)
            }
        }
    }
}
