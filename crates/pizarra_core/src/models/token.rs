use super::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Stable slot identifier (`t0`..`t7`), unchanged across formation
/// switches so persisted layouts stay addressable.
pub type SlotId = String;

/// A fixed position-holder on the tactical field.
///
/// The token records which player currently stands at its spot; it is a
/// back-reference, never ownership. Coordinates are percentages of the
/// field container in [0,100]: x grows toward the right touchline and
/// y grows toward the own goal, so the keeper sits near y = 88.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldToken {
    pub id: SlotId,

    #[serde(rename = "playerId")]
    pub occupant: Option<PlayerId>,

    pub x: f32,
    pub y: f32,
}

impl FieldToken {
    pub fn empty(id: impl Into<SlotId>, x: f32, y: f32) -> Self {
        Self { id: id.into(), occupant: None, x, y }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// True when this token currently holds the given player.
    pub fn holds(&self, player_id: &str) -> bool {
        self.occupant.as_deref() == Some(player_id)
    }
}
