//! Board controller
//!
//! Owns the board state, the selection protocol, the drag engine and
//! the persistence port, and turns host input events into operations
//! on [`BoardState`]. The host UI dispatches one
//! [`InputEvent`] per discrete input (pointer down/move/up, click,
//! frame tick, toolbar action); every event is handled synchronously
//! on the host's single event loop.
//!
//! Persistence is fire-and-forget: each mutation writes the token
//! layout and formation key back through the store, and a write
//! failure is logged but never rolls back the in-memory state; the
//! session's authoritative board lives here, not in storage.

use super::drag::{FieldRect, PointerDragEngine};
use super::selection::{BoardCommand, Selection, SelectionProtocol};
use super::BoardState;
use crate::models::{Player, PlayerId, Roster};
use crate::save::{
    decode_formation, decode_layout, encode_formation, encode_layout, LayoutStore,
    STORAGE_KEY_FORMATION, STORAGE_KEY_TOKENS,
};
use crate::tactics::FormationKey;

/// Discrete host input, one per UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer went down over a field token.
    PointerDown { token_id: String },
    /// Pointer moved, in host pixel coordinates.
    PointerMove { px: f32, py: f32 },
    /// Pointer released or left the field.
    PointerUp,
    /// Frame tick from the host's frame/tick mechanism; drains at most
    /// one coalesced drag update.
    Frame,
    /// Click on a field token (fired after pointer up; suppressed
    /// internally if the gesture was a drag).
    TokenClicked { token_id: String },
    /// Click on a bench entry.
    BenchClicked { player_id: PlayerId },
    /// Formation selector button.
    FormationSelected { key: FormationKey },
    /// Fill empty slots from the bench.
    AutoFill,
    /// Empty the whole board. The host shows the confirmation prompt;
    /// an unconfirmed event is ignored.
    ClearAll { confirmed: bool },
    /// Per-token remove control (the small X on an occupied token).
    RemoveOccupant { token_id: String },
}

pub struct BoardController<S: LayoutStore> {
    board: BoardState,
    protocol: SelectionProtocol,
    drag: PointerDragEngine,
    store: S,
    roster: Roster,
    field_rect: FieldRect,
}

impl<S: LayoutStore> BoardController<S> {
    /// Hydrate a controller from the store. Corrupt or unreadable
    /// blobs fall back to the default formation (auto-filled from the
    /// roster) and are never surfaced as errors.
    pub fn hydrate(store: S, roster: Roster) -> Self {
        let stored_tokens = match store.load(STORAGE_KEY_TOKENS) {
            Ok(Some(blob)) => match decode_layout(&blob) {
                Ok(tokens) => Some(tokens),
                Err(err) => {
                    log::warn!("Failed to parse saved tactics, using defaults: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to read saved tactics, using defaults: {}", err);
                None
            }
        };

        let stored_formation = match store.load(STORAGE_KEY_FORMATION) {
            Ok(Some(blob)) => match decode_formation(&blob) {
                Ok(key) => Some(key),
                Err(err) => {
                    log::warn!("Failed to parse saved formation, using default: {}", err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("Failed to read saved formation, using default: {}", err);
                None
            }
        };

        let board = BoardState::hydrate(stored_tokens, stored_formation, &roster);
        let mut controller = Self {
            board,
            protocol: SelectionProtocol::new(),
            drag: PointerDragEngine::new(),
            store,
            roster,
            // Identity mapping until the host reports its layout.
            field_rect: FieldRect::new(0.0, 0.0, 100.0, 100.0),
        };
        // First hydration may have auto-filled; write it back so the
        // next mount sees the same board.
        controller.persist();
        controller
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn selection(&self) -> &Selection {
        self.protocol.selection()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bench_players(&self) -> Vec<&Player> {
        self.board.bench_players(&self.roster)
    }

    /// The host re-supplies the roster wholesale on each render cycle.
    pub fn set_roster(&mut self, roster: Roster) {
        self.roster = roster;
    }

    /// Field container bounding box in host pixels, for the pixel to
    /// percentage conversion during drags.
    pub fn set_field_rect(&mut self, rect: FieldRect) {
        self.field_rect = rect;
    }

    /// True while a drag frame callback is owed; the host keeps
    /// ticking `Frame` events while this holds.
    pub fn needs_frame(&self) -> bool {
        self.drag.frame_scheduled()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { token_id } => {
                self.drag.pointer_down(&token_id);
            }
            InputEvent::PointerMove { px, py } => {
                self.drag.pointer_move(px, py, self.field_rect);
            }
            InputEvent::PointerUp => {
                self.drag.pointer_up();
            }
            InputEvent::Frame => {
                if let Some(pending) = self.drag.on_frame() {
                    self.board.move_token(&pending.token_id, pending.x, pending.y);
                    self.persist();
                }
            }
            InputEvent::TokenClicked { token_id } => {
                // A gesture that moved the pointer was a drag, not a
                // click; it must not also drive a selection transition.
                if self.drag.take_drag() {
                    return;
                }
                if let Some(command) = self.protocol.click_token(&token_id) {
                    self.apply(command);
                }
            }
            InputEvent::BenchClicked { player_id } => {
                if let Some(command) = self.protocol.click_bench(&player_id) {
                    self.apply(command);
                }
            }
            InputEvent::FormationSelected { key } => {
                self.board.change_formation(key);
                self.persist();
            }
            InputEvent::AutoFill => {
                self.board.auto_fill(&self.roster);
                self.persist();
            }
            InputEvent::ClearAll { confirmed } => {
                if confirmed {
                    self.board.clear_all();
                    self.protocol.reset();
                    self.persist();
                }
            }
            InputEvent::RemoveOccupant { token_id } => {
                self.board.clear_occupant(&token_id);
                self.protocol.token_removed(&token_id);
                self.persist();
            }
        }
    }

    /// Flush any drag update still waiting for a frame, so exports and
    /// teardown see settled coordinates.
    pub fn flush_pending_drag(&mut self) {
        if let Some(pending) = self.drag.on_frame() {
            self.board.move_token(&pending.token_id, pending.x, pending.y);
            self.persist();
        }
    }

    fn apply(&mut self, command: BoardCommand) {
        match command {
            BoardCommand::Assign { token_id, player_id } => {
                self.board.assign_occupant(&token_id, &player_id);
            }
            BoardCommand::Swap { token_a, token_b } => {
                self.board.swap_occupants(&token_a, &token_b);
            }
        }
        self.persist();
    }

    fn persist(&mut self) {
        match encode_layout(&self.board.tokens_for_save()) {
            Ok(blob) => {
                if let Err(err) = self.store.save(STORAGE_KEY_TOKENS, &blob) {
                    log::warn!("Failed to persist token layout: {}", err);
                }
            }
            Err(err) => log::warn!("Failed to encode token layout: {}", err),
        }
        let formation_blob = encode_formation(self.board.formation());
        if let Err(err) = self.store.save(STORAGE_KEY_FORMATION, &formation_blob) {
            log::warn!("Failed to persist formation key: {}", err);
        }
    }
}
