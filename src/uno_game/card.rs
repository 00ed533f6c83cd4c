use serde::Serialize;
use std::fmt;

/// Printed in place of a missing name by [`CardFace::details`].
pub const DEFAULT_NAME: &str = "default_name";
/// Printed in place of a missing type by [`CardFace::details`].
pub const DEFAULT_TYPE: &str = "default_type";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

impl Color {
    /// Deck generation walks the colors in this order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

/// Face of a colored card: a number or one of the colored action cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardType {
    Number(u8),
    DrawTwo,
    Reverse,
    Skip,
}

impl CardType {
    pub fn label(&self) -> String {
        match self {
            CardType::Number(n) => n.to_string(),
            CardType::DrawTwo => "draw_2".to_string(),
            CardType::Reverse => "reverse".to_string(),
            CardType::Skip => "skip".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WildType {
    Wild,
    WildDrawFour,
}

impl WildType {
    pub fn label(&self) -> String {
        match self {
            WildType::Wild => "wild".to_string(),
            WildType::WildDrawFour => "wild_draw_4".to_string(),
        }
    }
}

/// What every card can tell about itself.
pub trait CardFace {
    /// Rank or action label, e.g. `"5"`, `"skip"`, `"wild"`.
    fn name(&self) -> String;

    /// The card's color. Wild cards have none.
    fn card_type(&self) -> Option<&str>;

    /// Reserved for action effects; no card carries one yet.
    fn ability(&self) -> Option<&str> {
        None
    }

    /// Renders the card as `[name, type]`, falling back to [`DEFAULT_NAME`]
    /// and [`DEFAULT_TYPE`] for a blank name or a missing type.
    fn details(&self) -> String {
        let label = self.name();
        let name = if label.is_empty() {
            DEFAULT_NAME
        } else {
            label.as_str()
        };
        let card_type = self.card_type().unwrap_or(DEFAULT_TYPE);
        format!("[{}, {}]", name, card_type)
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColorCard {
    face: CardType,
    color: Color,
}

impl ColorCard {
    pub fn new(face: CardType, color: Color) -> Self {
        Self { face, color }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> CardType {
        self.face
    }
}

impl CardFace for ColorCard {
    fn name(&self) -> String {
        self.face.label()
    }

    fn card_type(&self) -> Option<&str> {
        Some(self.color.as_str())
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WildCard {
    face: WildType,
}

impl WildCard {
    pub fn new(face: WildType) -> Self {
        Self { face }
    }

    pub fn kind(&self) -> WildType {
        self.face
    }
}

impl CardFace for WildCard {
    fn name(&self) -> String {
        self.face.label()
    }

    fn card_type(&self) -> Option<&str> {
        None
    }
}

/// One physical card.
///
/// `Card` is not `Clone`. A card only ever moves between sequences and is
/// never copied into a second one.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Card {
    Color(ColorCard),
    Wild(WildCard),
}

impl Card {
    pub fn color(card_type: CardType, color: Color) -> Self {
        Card::Color(ColorCard::new(card_type, color))
    }

    pub fn wild(wild_type: WildType) -> Self {
        Card::Wild(WildCard::new(wild_type))
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild(_))
    }
}

impl CardFace for Card {
    fn name(&self) -> String {
        match self {
            Card::Color(card) => card.name(),
            Card::Wild(card) => card.name(),
        }
    }

    fn card_type(&self) -> Option<&str> {
        match self {
            Card::Color(card) => card.card_type(),
            Card::Wild(card) => card.card_type(),
        }
    }

    fn ability(&self) -> Option<&str> {
        match self {
            Card::Color(card) => card.ability(),
            Card::Wild(card) => card.ability(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
