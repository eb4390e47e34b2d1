//! Snapshot export boundary
//!
//! Rasterization and document assembly live with the host (the web
//! build hands the rendered subtree to an html2canvas + PDF pipeline);
//! this module owns everything on the near side of that boundary: the
//! stable snapshot handed across, the in-flight guard that coalesces
//! re-entrant export requests, the dated file name, and the guarantee
//! that a failed export leaves no partial output behind.

use crate::board::BoardState;
use crate::models::Roster;
use crate::tactics::FormationKey;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title band rendered above the captured board.
pub const EXPORT_TITLE: &str = "CLAN TEAM F.C. - FORMACION TACTICA";

const FILE_NAME_PREFIX: &str = "clan-team-formacion";

#[derive(Error, Debug)]
pub enum ExportError {
    /// An export is already in flight; the trigger should have been
    /// disabled. The request is dropped, not queued.
    #[error("Export already in progress")]
    AlreadyRunning,

    /// Rasterization failed (typically an unreadable cross-origin
    /// image). Surfaced to the user; nothing was written.
    #[error("Capture failed: {0}")]
    CaptureFailed(String),

    #[error("Document assembly failed: {0}")]
    CompositionFailed(String),
}

/// One token as it appears in the capture: settled coordinates plus
/// the resolved player, so the capture pipeline never needs the roster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotToken {
    pub slot_id: String,
    pub x: f32,
    pub y: f32,
    pub player_name: Option<String>,
    pub jersey_number: Option<u8>,
}

/// The stable visual input handed to the exporter: no mid-drag
/// coordinates, no transient selection highlighting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoardSnapshot {
    pub title: String,
    pub formation: FormationKey,
    pub tokens: Vec<SnapshotToken>,
    pub bench: Vec<String>,
}

impl BoardSnapshot {
    /// Resolve the board against the roster. Occupants missing from
    /// the roster render as empty slots rather than broken references.
    pub fn capture(board: &BoardState, roster: &Roster) -> Self {
        let tokens = board
            .tokens()
            .iter()
            .map(|token| {
                let player = token.occupant.as_deref().and_then(|id| roster.get(id));
                SnapshotToken {
                    slot_id: token.id.clone(),
                    x: token.x,
                    y: token.y,
                    player_name: player.map(|p| p.name.clone()),
                    jersey_number: player.map(|p| p.jersey_number),
                }
            })
            .collect();
        let bench = board.bench_players(roster).iter().map(|p| p.name.clone()).collect();
        Self { title: EXPORT_TITLE.to_string(), formation: board.formation(), tokens, bench }
    }
}

/// Host-side rasterization + document assembly, opaque to the core.
/// Returns the finished document bytes or fails without partial
/// output.
pub trait SnapshotExporter {
    fn export(&mut self, snapshot: &BoardSnapshot) -> Result<Vec<u8>, ExportError>;
}

/// A finished export, ready for the host to hand to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Guards the export pipeline with a boolean in-flight flag. Concurrent
/// requests are coalesced by refusing while busy (the host disables the
/// trigger off `is_exporting`), never queued.
#[derive(Debug, Default)]
pub struct ExportController {
    in_flight: bool,
}

impl ExportController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_exporting(&self) -> bool {
        self.in_flight
    }

    /// File name for an export dated `date`:
    /// `clan-team-formacion-YYYY-MM-DD.pdf`.
    pub fn file_name_for(date: NaiveDate) -> String {
        format!("{}-{}.pdf", FILE_NAME_PREFIX, date.format("%Y-%m-%d"))
    }

    /// Claim the pipeline before an asynchronous export. Fails while
    /// one is already in flight.
    pub fn begin(&mut self) -> Result<(), ExportError> {
        if self.in_flight {
            return Err(ExportError::AlreadyRunning);
        }
        self.in_flight = true;
        Ok(())
    }

    /// Release the pipeline once the host's export settled, success or
    /// failure, so the user can always retry.
    pub fn complete(&mut self) {
        self.in_flight = false;
    }

    /// Run one export through the boundary. The in-flight flag is
    /// cleared on success and on failure.
    pub fn export<E: SnapshotExporter>(
        &mut self,
        exporter: &mut E,
        snapshot: &BoardSnapshot,
    ) -> Result<ExportedDocument, ExportError> {
        self.begin()?;
        let result = exporter.export(snapshot);
        self.complete();

        match result {
            Ok(bytes) => {
                let file_name = Self::file_name_for(chrono::Local::now().date_naive());
                log::info!("Exported {} ({} bytes)", file_name, bytes.len());
                Ok(ExportedDocument { file_name, bytes })
            }
            Err(err) => {
                log::warn!("Export failed: {}", err);
                Err(err)
            }
        }
    }
}
