//! DTOs for games_sea adapter.

/// DTO for creating a new game.
#[derive(Debug, Clone, Default)]
pub struct GameCreate {
    /// Explicit id; `None` lets the database assign one.
    pub id: Option<i64>,
    pub name: Option<String>,
}

impl GameCreate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
