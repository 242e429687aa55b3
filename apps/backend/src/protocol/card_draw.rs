//! Card-draw payload shown by the client's card modal.
//!
//! The server only guarantees the shape; presentation (one close callback
//! per dismissal, scroll lock) belongs to the client.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardDeck {
    Chance,
    Community,
}

/// One drawn card: which deck and what it says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraw {
    #[serde(rename = "type")]
    pub deck: CardDeck,
    pub text: String,
}

impl CardDraw {
    pub fn new(deck: CardDeck, text: impl Into<String>) -> Self {
        Self {
            deck,
            text: text.into(),
        }
    }

    /// Modal heading.
    pub fn title(&self) -> &'static str {
        match self.deck {
            CardDeck::Chance => "Chance",
            CardDeck::Community => "Community Chest",
        }
    }

    /// Small label above the card text.
    pub fn badge(&self) -> &'static str {
        match self.deck {
            CardDeck::Chance => "Chance Card",
            CardDeck::Community => "Community Chest Card",
        }
    }
}
