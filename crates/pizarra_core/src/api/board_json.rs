//! JSON boundary for the embedding host
//!
//! String-in/string-out functions the site's UI layer calls: hydrate a
//! board view from stored blobs, apply one board operation, list the
//! formation catalog for the selector. Requests carry a schema version
//! so the host and core can move independently; errors come back as
//! plain strings, never a panic.
//!
//! Pointer tracking and selection stay on the host side of this
//! boundary: by the time an interaction reaches the API it has been
//! resolved into a [`BoardOp`].

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::models::{FieldToken, PlayerId, Roster};
use crate::save::{decode_formation, decode_layout, encode_formation, encode_layout};
use crate::tactics::{FormationKey, FormationTemplate, TOKEN_COUNT};

pub const BOARD_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Deserialize)]
pub struct HydrateRequest {
    pub schema_version: u8,
    pub roster: Roster,
    /// Raw blob previously read from the tokens storage key, if any.
    #[serde(default)]
    pub stored_tokens: Option<String>,
    /// Raw blob previously read from the formation storage key, if any.
    #[serde(default)]
    pub stored_formation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    pub schema_version: u8,
    pub roster: Roster,
    pub formation: FormationKey,
    pub tokens: Vec<FieldToken>,
    pub op: BoardOp,
}

/// One resolved board operation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BoardOp {
    ChangeFormation { key: FormationKey },
    MoveToken { token_id: String, x: f32, y: f32 },
    Assign { token_id: String, player_id: PlayerId },
    Swap { token_a: String, token_b: String },
    RemoveOccupant { token_id: String },
    ClearAll,
    AutoFill,
}

/// Full board view plus the blobs the host should write back to
/// storage.
#[derive(Debug, Serialize, Deserialize)]
pub struct BoardResponse {
    pub formation: FormationKey,
    pub tokens: Vec<FieldToken>,
    /// Bench player ids, roster order.
    pub bench: Vec<PlayerId>,
    pub tokens_blob: String,
    pub formation_blob: String,
}

fn board_response(board: &BoardState, roster: &Roster) -> Result<BoardResponse, String> {
    let tokens = board.tokens_for_save();
    let tokens_blob =
        encode_layout(&tokens).map_err(|e| format!("Failed to encode layout: {}", e))?;
    Ok(BoardResponse {
        formation: board.formation(),
        tokens,
        bench: board.bench_players(roster).iter().map(|p| p.id.clone()).collect(),
        tokens_blob,
        formation_blob: encode_formation(board.formation()),
    })
}

fn validate_schema_version(version: u8) -> Result<(), String> {
    if version != BOARD_SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", version));
    }
    Ok(())
}

/// Build the initial board view from whatever the host found in
/// storage. Unreadable blobs fall back to defaults, mirroring the
/// in-process hydration path, so a corrupt save never errors here.
pub fn hydrate_board_json(request_json: &str) -> Result<String, String> {
    let request: HydrateRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    validate_schema_version(request.schema_version)?;
    request.roster.validate().map_err(|e| e.to_string())?;

    let stored_tokens = request.stored_tokens.as_deref().and_then(|blob| {
        decode_layout(blob)
            .map_err(|e| log::warn!("Failed to parse saved tactics, using defaults: {}", e))
            .ok()
    });
    let stored_formation = request.stored_formation.as_deref().and_then(|blob| {
        decode_formation(blob)
            .map_err(|e| log::warn!("Failed to parse saved formation, using default: {}", e))
            .ok()
    });

    let board = BoardState::hydrate(stored_tokens, stored_formation, &request.roster);
    let response = board_response(&board, &request.roster)?;
    serde_json::to_string(&response).map_err(|e| format!("Failed to encode response: {}", e))
}

/// Apply one operation to the given board view and return the updated
/// view plus blobs to persist.
pub fn apply_board_op_json(request_json: &str) -> Result<String, String> {
    let request: ApplyRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;
    validate_schema_version(request.schema_version)?;
    request.roster.validate().map_err(|e| e.to_string())?;
    if request.tokens.len() != TOKEN_COUNT {
        return Err(format!(
            "Invalid board: expected {} tokens, found {}",
            TOKEN_COUNT,
            request.tokens.len()
        ));
    }

    let mut board =
        BoardState::hydrate(Some(request.tokens), Some(request.formation), &request.roster);
    match request.op {
        BoardOp::ChangeFormation { key } => board.change_formation(key),
        BoardOp::MoveToken { token_id, x, y } => board.move_token(&token_id, x, y),
        BoardOp::Assign { token_id, player_id } => board.assign_occupant(&token_id, &player_id),
        BoardOp::Swap { token_a, token_b } => board.swap_occupants(&token_a, &token_b),
        BoardOp::RemoveOccupant { token_id } => board.clear_occupant(&token_id),
        BoardOp::ClearAll => board.clear_all(),
        BoardOp::AutoFill => board.auto_fill(&request.roster),
    }

    let response = board_response(&board, &request.roster)?;
    serde_json::to_string(&response).map_err(|e| format!("Failed to encode response: {}", e))
}

/// The formation catalog for the host's selector buttons.
pub fn formations_json() -> String {
    #[derive(Serialize)]
    struct FormationInfo {
        key: FormationKey,
        slots: Vec<SlotInfo>,
    }
    #[derive(Serialize)]
    struct SlotInfo {
        x: f32,
        y: f32,
    }

    let formations: Vec<FormationInfo> = FormationTemplate::all()
        .iter()
        .map(|t| FormationInfo {
            key: t.key,
            slots: t.slots.iter().map(|s| SlotInfo { x: s.x, y: s.y }).collect(),
        })
        .collect();

    serde_json::to_string(&formations).expect("formation catalog is always serializable")
}
