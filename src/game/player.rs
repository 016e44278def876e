use crate::error::GameError;

/// A participant in the rotation, identified by name and drawn on the board
/// with its token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    token: char,
}

impl Player {
    /// Create a player whose token is the first character of the (trimmed)
    /// name. Returns `None` for a blank name.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        let token = name.chars().next()?;
        Some(Player { name, token })
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character this player's pieces occupy on the board.
    pub fn token(&self) -> char {
        self.token
    }
}

/// Build the player rotation from a list of names.
///
/// Every player must have a non-blank name, and no two players may share a
/// token; otherwise pieces on the board could not be traced back to a single
/// owner.
pub fn roster<I, S>(names: I) -> Result<Vec<Player>, GameError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut players: Vec<Player> = Vec::new();
    for (index, name) in names.into_iter().enumerate() {
        let player = Player::new(name).ok_or(GameError::EmptyName { index: index + 1 })?;
        if let Some(existing) = players.iter().find(|p| p.token == player.token) {
            return Err(GameError::DuplicateToken {
                token: player.token,
                first: existing.name.clone(),
                second: player.name,
            });
        }
        players.push(player);
    }

    if players.is_empty() {
        return Err(GameError::NoPlayers);
    }
    Ok(players)
}
