// Data model for the tactical board
// Players come from the club roster; tokens are the fixed field slots.

pub mod player;
pub mod token;

pub use player::{Player, PlayerId, Position, Roster};
pub use token::{FieldToken, SlotId};
