//! Pointer drag engine
//!
//! Translates continuous pointer movement into token coordinate
//! updates, coalesced to one update per host frame. Rapid move events
//! between frames overwrite the pending sample (last write wins); the
//! host drives [`PointerDragEngine::on_frame`] from its frame/tick
//! mechanism and applies the drained move to the board.
//!
//! Drag and click are mutually exclusive interpretations of one
//! pointer-down/up cycle: any intervening move marks the gesture as a
//! drag, and the click handler consumes that flag to skip its selection
//! transition. A down immediately followed by up is a plain click.

use crate::models::SlotId;

/// Bounding box of the field container in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl FieldRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    /// Pointer position as clamped field percentages. A degenerate
    /// rect (zero size) pins the result to the origin rather than
    /// dividing by zero.
    pub fn to_percent(&self, px: f32, py: f32) -> (f32, f32) {
        let x = if self.width > 0.0 { (px - self.left) / self.width * 100.0 } else { 0.0 };
        let y = if self.height > 0.0 { (py - self.top) / self.height * 100.0 } else { 0.0 };
        (x.clamp(0.0, 100.0), y.clamp(0.0, 100.0))
    }
}

/// A coordinate update waiting for the next frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingMove {
    pub token_id: SlotId,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Default)]
pub struct PointerDragEngine {
    dragging: Option<SlotId>,
    moved: bool,
    pending: Option<PendingMove>,
    frame_scheduled: bool,
}

impl PointerDragEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token currently under the pointer, if a drag is active.
    pub fn dragging(&self) -> Option<&SlotId> {
        self.dragging.as_ref()
    }

    /// True while a frame callback is owed to the host.
    pub fn frame_scheduled(&self) -> bool {
        self.frame_scheduled
    }

    /// Pointer went down over a token: capture it and reset the moved
    /// flag so a motionless tap still counts as a click.
    pub fn pointer_down(&mut self, token_id: &str) {
        self.dragging = Some(token_id.to_string());
        self.moved = false;
    }

    /// Pointer moved while captured. Records the latest clamped sample
    /// and asks the host for a frame callback if one is not already
    /// scheduled.
    pub fn pointer_move(&mut self, px: f32, py: f32, field: FieldRect) {
        let Some(token_id) = self.dragging.clone() else {
            return;
        };
        self.moved = true;
        let (x, y) = field.to_percent(px, py);
        self.pending = Some(PendingMove { token_id, x, y });
        self.frame_scheduled = true;
    }

    /// Host frame tick: drain the pending sample, at most one per
    /// frame regardless of how many moves arrived.
    pub fn on_frame(&mut self) -> Option<PendingMove> {
        self.frame_scheduled = false;
        self.pending.take()
    }

    /// Pointer released (or left the field). Ends the drag and drops
    /// any sample that never reached a frame; the moved flag survives
    /// until the click handler consumes it.
    pub fn pointer_up(&mut self) {
        self.dragging = None;
        self.pending = None;
        self.frame_scheduled = false;
    }

    /// Whether the just-finished gesture was a drag. Consuming resets
    /// the flag, so the answer applies to exactly one click.
    pub fn take_drag(&mut self) -> bool {
        std::mem::take(&mut self.moved)
    }
}
