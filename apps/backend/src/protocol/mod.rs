//! Wire contracts shared with the web client.

pub mod card_draw;
