//! Two-mode selection protocol
//!
//! Bench-to-field substitution and field-to-field swap are mutually
//! exclusive interpretations of a click sequence. The whole interaction
//! state is one tagged union so a simultaneous bench-and-field
//! selection cannot be represented at all.
//!
//! The protocol is pure: clicks return the [`BoardCommand`] to apply
//! (if the transition completes an action) and the controller applies
//! it to the board. The machine always returns to `Idle` after a
//! completed two-step action.

use crate::models::{PlayerId, SlotId};

/// Transient interaction state. Never persisted; reset on every
/// completed action or explicit deselect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    BenchSelected(PlayerId),
    FieldSelected(SlotId),
}

/// Mutation requested by a completed selection sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Put the player on the token (vacating any prior placement).
    Assign { token_id: SlotId, player_id: PlayerId },
    /// Exchange two tokens' occupants.
    Swap { token_a: SlotId, token_b: SlotId },
}

#[derive(Debug, Clone, Default)]
pub struct SelectionProtocol {
    selection: Selection,
}

impl SelectionProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_idle(&self) -> bool {
        self.selection == Selection::Idle
    }

    /// A field token was clicked (tap, not drag; the caller already
    /// checked the drag engine's moved flag).
    pub fn click_token(&mut self, token_id: &str) -> Option<BoardCommand> {
        match std::mem::take(&mut self.selection) {
            // Substitution: the pending bench player lands here.
            Selection::BenchSelected(player_id) => Some(BoardCommand::Assign {
                token_id: token_id.to_string(),
                player_id,
            }),
            Selection::FieldSelected(selected) if selected == token_id => {
                // Clicking the selected token again deselects it.
                None
            }
            Selection::FieldSelected(selected) => Some(BoardCommand::Swap {
                token_a: selected,
                token_b: token_id.to_string(),
            }),
            Selection::Idle => {
                // Empty tokens are selectable too: a player can be
                // swapped into an empty spot.
                self.selection = Selection::FieldSelected(token_id.to_string());
                None
            }
        }
    }

    /// A bench entry was clicked.
    pub fn click_bench(&mut self, player_id: &str) -> Option<BoardCommand> {
        match std::mem::take(&mut self.selection) {
            // Reverse substitution: the selected field slot is filled
            // from the bench.
            Selection::FieldSelected(token_id) => Some(BoardCommand::Assign {
                token_id,
                player_id: player_id.to_string(),
            }),
            Selection::BenchSelected(selected) if selected == player_id => {
                // Toggle off.
                None
            }
            Selection::BenchSelected(_) | Selection::Idle => {
                self.selection = Selection::BenchSelected(player_id.to_string());
                None
            }
        }
    }

    /// A token was cleared through its explicit per-token control. This
    /// bypasses the click transitions, but a cleared token must not
    /// stay selected.
    pub fn token_removed(&mut self, token_id: &str) {
        if self.selection == Selection::FieldSelected(token_id.to_string()) {
            self.selection = Selection::Idle;
        }
    }

    pub fn reset(&mut self) {
        self.selection = Selection::Idle;
    }
}
