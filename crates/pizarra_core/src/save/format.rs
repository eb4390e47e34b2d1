//! Serialized layout format
//!
//! Tokens persist as a versioned JSON envelope; the formation key
//! persists as its bare display string under a second key, matching
//! the blobs already sitting in browser storage.
//!
//! Earlier builds stored the token array without any envelope, so
//! [`decode_layout`] accepts both shapes: a board written before the
//! version tag existed still hydrates.

use super::error::SaveError;
use super::LAYOUT_VERSION;
use crate::models::FieldToken;
use crate::tactics::FormationKey;
use serde::{Deserialize, Serialize};

/// Versioned persistence envelope for the token layout.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TokenLayout {
    /// Format version for migration.
    pub version: u32,

    /// Save timestamp (unix milliseconds).
    pub saved_at: i64,

    pub tokens: Vec<FieldToken>,
}

impl TokenLayout {
    pub fn new(tokens: Vec<FieldToken>) -> Self {
        Self { version: LAYOUT_VERSION, saved_at: current_timestamp(), tokens }
    }
}

/// Either shape a stored blob may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLayout {
    Versioned(TokenLayout),
    /// Pre-envelope blob: a bare token array.
    Legacy(Vec<FieldToken>),
}

pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

pub fn encode_layout(tokens: &[FieldToken]) -> Result<String, SaveError> {
    let layout = TokenLayout::new(tokens.to_vec());
    Ok(serde_json::to_string(&layout)?)
}

pub fn decode_layout(blob: &str) -> Result<Vec<FieldToken>, SaveError> {
    match serde_json::from_str::<StoredLayout>(blob)? {
        StoredLayout::Versioned(layout) => {
            if layout.version > LAYOUT_VERSION {
                return Err(SaveError::VersionMismatch {
                    found: layout.version,
                    expected: LAYOUT_VERSION,
                });
            }
            Ok(layout.tokens)
        }
        StoredLayout::Legacy(tokens) => {
            log::debug!("Decoded legacy un-versioned token layout");
            Ok(tokens)
        }
    }
}

pub fn encode_formation(key: FormationKey) -> String {
    key.as_str().to_string()
}

pub fn decode_formation(blob: &str) -> Result<FormationKey, SaveError> {
    blob.trim().parse::<FormationKey>().map_err(|_| SaveError::Corrupted)
}
