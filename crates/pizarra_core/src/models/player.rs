use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// Stable player identifier supplied by the roster source.
pub type PlayerId = String;

/// Roster entry for the tactical board.
///
/// The board references players by id only; it never owns or mutates
/// roster data. The full club record (phone, stats, dues) lives with
/// the surrounding site and is not part of this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    /// Shirt number, unique within the roster.
    #[serde(rename = "jerseyNumber")]
    pub jersey_number: u8,

    pub position: Position,

    /// Photo reference used on the token face; the host falls back to a
    /// default silhouette when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Player {
    pub fn new(
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        jersey_number: u8,
        position: Position,
    ) -> Self {
        Self { id: id.into(), name: name.into(), jersey_number, position, photo: None }
    }
}

/// Position category on the club roster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    DEF,
    MID,
    FWD,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GK" => Ok(Position::GK),
            "DEF" => Ok(Position::DEF),
            "MID" => Ok(Position::MID),
            "FWD" => Ok(Position::FWD),
            other => Err(BoardError::InvalidPosition(other.to_string())),
        }
    }
}

/// Ordered list of players supplied wholesale by the roster source.
///
/// Order is authoritative: auto-fill and the bench listing both follow
/// it. The board does not try to remember any other ordering between
/// sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        let roster = Self { players };
        roster.validate()?;
        Ok(roster)
    }

    /// Basic integrity checks: ids and jersey numbers must be unique,
    /// jersey numbers must be positive.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut jerseys = HashSet::new();
        for player in &self.players {
            if !ids.insert(player.id.as_str()) {
                return Err(BoardError::InvalidRoster(format!(
                    "duplicate player id: {}",
                    player.id
                )));
            }
            if player.jersey_number == 0 {
                return Err(BoardError::InvalidRoster(format!(
                    "jersey number must be positive for player {}",
                    player.id
                )));
            }
            if !jerseys.insert(player.jersey_number) {
                return Err(BoardError::InvalidRoster(format!(
                    "duplicate jersey number: {}",
                    player.jersey_number
                )));
            }
        }
        Ok(())
    }

    pub fn get(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn contains(&self, player_id: &str) -> bool {
        self.get(player_id).is_some()
    }

    /// Players in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: &str, jersey: u8) -> Player {
        Player::new(id, format!("Player {}", id), jersey, Position::MID)
    }

    #[test]
    fn test_roster_rejects_duplicate_ids() {
        let result = Roster::new(vec![player("p1", 1), player("p1", 2)]);
        assert!(matches!(result, Err(BoardError::InvalidRoster(_))));
    }

    #[test]
    fn test_roster_rejects_duplicate_jerseys() {
        let result = Roster::new(vec![player("p1", 7), player("p2", 7)]);
        assert!(matches!(result, Err(BoardError::InvalidRoster(_))));
    }

    #[test]
    fn test_roster_rejects_zero_jersey() {
        let result = Roster::new(vec![player("p1", 0)]);
        assert!(matches!(result, Err(BoardError::InvalidRoster(_))));
    }

    #[test]
    fn test_roster_preserves_order() {
        let roster = Roster::new(vec![player("b", 2), player("a", 1), player("c", 3)]).unwrap();
        let ids: Vec<&str> = roster.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_position_round_trip() {
        for pos in [Position::GK, Position::DEF, Position::MID, Position::FWD] {
            assert_eq!(pos.as_str().parse::<Position>().unwrap(), pos);
        }
        assert!("CB".parse::<Position>().is_err());
    }
}
