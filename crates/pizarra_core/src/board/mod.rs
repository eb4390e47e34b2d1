//! Board state and its mutating operations
//!
//! `BoardState` is the core data model: eight field tokens plus the
//! active formation key. Every mutation goes through the methods here,
//! each of which is atomic with respect to the host's single-threaded
//! event loop.
//!
//! The one invariant actively maintained by every operation: no player
//! id appears as occupant of more than one token at the same time.
//! `assign_occupant` vacates any prior placement before assigning, so
//! a duplicate can never be constructed.

pub mod controller;
pub mod drag;
mod invariants_test;
pub mod selection;

pub use controller::{BoardController, InputEvent};
pub use drag::{FieldRect, PointerDragEngine};
pub use selection::{BoardCommand, Selection, SelectionProtocol};

use crate::models::{FieldToken, Player, PlayerId, Roster};
use crate::tactics::{FormationKey, FormationTemplate, TOKEN_COUNT};

/// The tactical board: fixed set of tokens plus the active formation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    tokens: Vec<FieldToken>,
    formation: FormationKey,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::from_formation(FormationKey::default())
    }
}

impl BoardState {
    /// Fresh board on the given formation with every token unoccupied.
    pub fn from_formation(formation: FormationKey) -> Self {
        let template = FormationTemplate::for_key(formation);
        let tokens = template
            .slots
            .iter()
            .enumerate()
            .map(|(i, slot)| FieldToken::empty(format!("t{}", i), slot.x, slot.y))
            .collect();
        Self { tokens, formation }
    }

    /// Rebuild the board from persisted state.
    ///
    /// Absence of storage is the normal first-visit case, not an error:
    /// missing tokens fall back to the formation default, and when
    /// nothing at all was stored the first [`TOKEN_COUNT`] roster
    /// members are placed in roster order. A stored token list of the
    /// wrong cardinality is treated as corrupt and discarded.
    pub fn hydrate(
        stored_tokens: Option<Vec<FieldToken>>,
        stored_formation: Option<FormationKey>,
        roster: &Roster,
    ) -> Self {
        let formation = stored_formation.unwrap_or_default();

        let tokens = match stored_tokens {
            Some(tokens) if tokens.len() == TOKEN_COUNT => tokens,
            Some(tokens) => {
                log::warn!(
                    "Discarding persisted layout with {} tokens (expected {})",
                    tokens.len(),
                    TOKEN_COUNT
                );
                return Self::fresh_with_auto_fill(formation, roster);
            }
            None => return Self::fresh_with_auto_fill(formation, roster),
        };

        let mut board = Self { tokens, formation };
        // Persisted occupants may reference players no longer on the
        // roster; drop those so the bench math stays consistent.
        for i in 0..board.tokens.len() {
            if let Some(id) = board.tokens[i].occupant.clone() {
                if !roster.contains(&id) {
                    log::debug!("Dropping stale occupant {} from {}", id, board.tokens[i].id);
                    board.tokens[i].occupant = None;
                }
            }
        }
        board
    }

    fn fresh_with_auto_fill(formation: FormationKey, roster: &Roster) -> Self {
        let mut board = Self::from_formation(formation);
        if !roster.is_empty() {
            board.auto_fill(roster);
        }
        board
    }

    pub fn formation(&self) -> FormationKey {
        self.formation
    }

    pub fn tokens(&self) -> &[FieldToken] {
        &self.tokens
    }

    pub fn token(&self, token_id: &str) -> Option<&FieldToken> {
        self.tokens.iter().find(|t| t.id == token_id)
    }

    fn token_index(&self, token_id: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.id == token_id)
    }

    /// Switch formation, remapping coordinates by slot index while
    /// preserving every occupant. A template shorter than the token
    /// list (cannot happen with the shipped catalog) leaves the extra
    /// tokens where they were.
    pub fn change_formation(&mut self, new_key: FormationKey) {
        let template = FormationTemplate::for_key(new_key);
        self.formation = new_key;
        for (i, token) in self.tokens.iter_mut().enumerate() {
            if let Some(slot) = template.slot(i) {
                token.x = slot.x;
                token.y = slot.y;
            }
        }
    }

    /// Move a token, clamping both axes to the field independently.
    /// Unknown token ids are a defensive no-op.
    pub fn move_token(&mut self, token_id: &str, x: f32, y: f32) {
        if let Some(i) = self.token_index(token_id) {
            self.tokens[i].x = x.clamp(0.0, 100.0);
            self.tokens[i].y = y.clamp(0.0, 100.0);
        }
    }

    /// Put `player_id` on `token_id`, vacating any other token that
    /// currently holds the player. Idempotent when the player already
    /// stands exclusively there.
    pub fn assign_occupant(&mut self, token_id: &str, player_id: &str) {
        let Some(target) = self.token_index(token_id) else {
            return;
        };
        for (i, token) in self.tokens.iter_mut().enumerate() {
            if i != target && token.holds(player_id) {
                token.occupant = None;
            }
        }
        self.tokens[target].occupant = Some(player_id.to_string());
    }

    pub fn clear_occupant(&mut self, token_id: &str) {
        if let Some(i) = self.token_index(token_id) {
            self.tokens[i].occupant = None;
        }
    }

    /// Exchange the occupants of two tokens atomically. A null on one
    /// side degrades to a move; swapping a token with itself is a
    /// no-op.
    pub fn swap_occupants(&mut self, token_a: &str, token_b: &str) {
        if token_a == token_b {
            return;
        }
        let (Some(a), Some(b)) = (self.token_index(token_a), self.token_index(token_b)) else {
            return;
        };
        // Only the occupants trade places; ids and coordinates stay.
        let moved = self.tokens[a].occupant.take();
        self.tokens[a].occupant = self.tokens[b].occupant.take();
        self.tokens[b].occupant = moved;
    }

    /// Empty every token. The destructive-action confirmation is the
    /// host's concern; callers arrive here already confirmed.
    pub fn clear_all(&mut self) {
        for token in &mut self.tokens {
            token.occupant = None;
        }
    }

    /// Fill empty tokens in ascending slot order from roster members
    /// not already placed, in roster order, until either side runs out.
    pub fn auto_fill(&mut self, roster: &Roster) {
        let mut bench = self.bench_players(roster).into_iter();
        for token in &mut self.tokens {
            if token.occupant.is_none() {
                match bench.next() {
                    Some(player) => token.occupant = Some(player.id.clone()),
                    None => break,
                }
            }
        }
    }

    /// Roster members not currently occupying any token, in roster
    /// order.
    pub fn bench_players<'r>(&self, roster: &'r Roster) -> Vec<&'r Player> {
        roster
            .iter()
            .filter(|p| !self.tokens.iter().any(|t| t.holds(&p.id)))
            .collect()
    }

    pub fn occupant_of(&self, token_id: &str) -> Option<&PlayerId> {
        self.token(token_id).and_then(|t| t.occupant.as_ref())
    }

    /// Ids of every placed player, for invariant checks and the host's
    /// highlight logic.
    pub fn placed_player_ids(&self) -> Vec<&PlayerId> {
        self.tokens.iter().filter_map(|t| t.occupant.as_ref()).collect()
    }

    /// Clone of the token list for persistence.
    pub fn tokens_for_save(&self) -> Vec<FieldToken> {
        self.tokens.clone()
    }
}
