//! # pizarra_core - Tactical Board Engine
//!
//! Formation model, token placement and drag engine, and the
//! bench-swap/substitution state machine behind the Clan Team F.C.
//! tactical board, extracted from the club site's UI layer.
//!
//! ## Features
//! - Eight-token board with a closed formation catalog (3-3-1, 2-3-2,
//!   2-4-1, 3-2-2); switching formations remaps coordinates and keeps
//!   every occupant
//! - Occupancy uniqueness enforced by construction: assigning a player
//!   always vacates their previous token first
//! - Frame-coalesced pointer dragging with drag/click disambiguation
//! - Versioned layout persistence through a narrow storage port,
//!   compatible with legacy un-enveloped blobs
//! - Snapshot export boundary with an in-flight guard and dated file
//!   names
//! - JSON API for hosts that keep board state on their side of the
//!   boundary

pub mod api;
pub mod board;
pub mod error;
pub mod export;
pub mod models;
pub mod save;
pub mod tactics;

// Re-export the core surface
pub use board::{
    BoardCommand, BoardController, BoardState, FieldRect, InputEvent, PointerDragEngine,
    Selection, SelectionProtocol,
};
pub use error::{BoardError, Result};
pub use models::{FieldToken, Player, PlayerId, Position, Roster, SlotId};
pub use tactics::{FormationKey, FormationTemplate, SlotCoord, TOKEN_COUNT};

// Re-export the persistence and export boundaries
pub use export::{
    BoardSnapshot, ExportController, ExportError, ExportedDocument, SnapshotExporter,
};
pub use save::{
    FileStore, LayoutStore, MemoryStore, SaveError, STORAGE_KEY_FORMATION, STORAGE_KEY_TOKENS,
};

// Re-export the host-facing JSON surface
pub use api::{apply_board_op_json, formations_json, hydrate_board_json};
