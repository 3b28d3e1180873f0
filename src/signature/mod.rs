//! Signature capture state machine.
//!
//! This module provides the capture half of the toolkit: a pad that records
//! freehand strokes from pointer/touch input, renders them immediately onto a
//! backing raster, and on confirmation yields a PNG snapshot of everything
//! drawn since the last clear.
//!
//! The pad is an explicit state machine driven by [`PadEvent`] values (one
//! per platform input event) and answering with [`PadOutcome`] values at the
//! session boundary; there are no callbacks. States:
//!
//! - `Idle` - no ink since the last clear; confirmation disabled
//! - `Drawing` - a pointer is down and a stroke is being recorded
//! - `Inked` - pointer released with at least one stroke on the surface
//!
//! Confirmation is guarded by the has-ink invariant rather than by an error:
//! confirming an empty surface is simply a no-op. Malformed input (non-finite
//! coordinates, moves without a preceding down) is ignored the same way.

mod canvas;

#[cfg(test)]
mod tests;

use anyhow::Result;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

pub use canvas::{BACKING_SCALE, Canvas};

/// A 2-D point in viewport coordinates (as delivered by the platform input
/// system) or in surface-local coordinates after mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

/// Capture session states. See the module docs for the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadState {
    Idle,
    Drawing,
    Inked,
}

/// One platform input event, translated for the pad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Clear,
    Confirm,
    Cancel,
}

/// Session outcome handed back to the caller in place of confirm/cancel
/// callbacks.
#[derive(Debug)]
pub enum PadOutcome {
    Confirmed(CaptureResult),
    Cancelled,
}

/// The finalized output of a signature session.
///
/// # Fields
/// * `png` - Lossless PNG encoding of the surface at confirmation time
/// * `width` / `height` - Snapshot dimensions in device pixels
/// * `has_ink` - Whether any stroke was drawn since the last clear (always
///   true for a result produced by `confirm`)
#[derive(Debug, Clone)]
pub struct CaptureResult {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub has_ink: bool,
}

impl CaptureResult {
    /// Renders the snapshot as a `data:` URI, embeddable wherever an image
    /// reference is accepted.
    pub fn data_uri(&self) -> String {
        format!("data:image/png;base64,{}", BASE64.encode(&self.png))
    }
}

/// Freehand signature pad over a fixed-size drawing surface.
///
/// Input points arrive in viewport space; the pad maps them to surface-local
/// space by subtracting the surface origin, then hands them to the backing
/// [`Canvas`], which applies the 2x backing scale uniformly to coordinates
/// and stroke width.
pub struct SignaturePad {
    origin: Point,
    canvas: Canvas,
    state: PadState,
    has_ink: bool,
    last_point: Option<Point>,
    strokes: Vec<Vec<Point>>,
}

/// Default ink thickness in logical units.
const DEFAULT_STROKE_WIDTH: f32 = 2.0;

impl SignaturePad {
    /// Creates a pad for a surface of `width` x `height` logical pixels whose
    /// top-left corner sits at `origin` in viewport coordinates.
    pub fn new(origin: Point, width: u32, height: u32) -> Self {
        SignaturePad {
            origin,
            canvas: Canvas::new(width, height, DEFAULT_STROKE_WIDTH),
            state: PadState::Idle,
            has_ink: false,
            last_point: None,
            strokes: Vec::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> PadState {
        self.state
    }

    /// True once any stroke has been recorded since the last clear.
    pub fn has_ink(&self) -> bool {
        self.has_ink
    }

    /// Whether `confirm` would currently produce a capture.
    pub fn can_confirm(&self) -> bool {
        self.has_ink
    }

    /// Number of strokes recorded since the last clear.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Read access to the backing canvas (used by tests and previews).
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Maps a viewport-space point to surface-local space. Non-finite
    /// coordinates are malformed input and map to None.
    fn to_local(&self, point: Point) -> Option<Point> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        Some(Point::new(point.x - self.origin.x, point.y - self.origin.y))
    }

    /// Starts a new stroke at `point` and enters the Drawing state.
    ///
    /// The has-ink flag is set immediately, before any movement, so a plain
    /// tap counts as a signature dot.
    pub fn begin(&mut self, point: Point) {
        let Some(local) = self.to_local(point) else {
            return;
        };
        self.state = PadState::Drawing;
        self.has_ink = true;
        self.strokes.push(vec![local]);
        // Zero-length segment leaves the cap dot for a tap
        self.canvas.draw_segment((local.x, local.y), (local.x, local.y));
        self.last_point = Some(local);
    }

    /// Extends the current stroke to `point`, rendering the new segment
    /// immediately. No-op unless the pad is in the Drawing state.
    pub fn extend(&mut self, point: Point) {
        if self.state != PadState::Drawing {
            return;
        }
        let Some(local) = self.to_local(point) else {
            return;
        };
        if let Some(last) = self.last_point {
            self.canvas.draw_segment((last.x, last.y), (local.x, local.y));
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(local);
        }
        self.last_point = Some(local);
    }

    /// Ends the current stroke. Transitions Drawing -> Inked; a pad that was
    /// never drawn on stays Idle.
    pub fn end(&mut self) {
        if self.state == PadState::Drawing {
            self.state = PadState::Inked;
            self.last_point = None;
        }
    }

    /// Erases all ink and recorded strokes and returns to Idle.
    pub fn clear(&mut self) {
        self.canvas.clear();
        self.strokes.clear();
        self.has_ink = false;
        self.last_point = None;
        self.state = PadState::Idle;
    }

    /// Produces a snapshot of the surface, if the has-ink invariant allows.
    ///
    /// # Returns
    /// * `Result<Option<CaptureResult>>` - `Some` capture when ink has been
    ///   drawn since the last clear, `None` otherwise; `Err` only if PNG
    ///   encoding fails
    pub fn confirm(&self) -> Result<Option<CaptureResult>> {
        if !self.has_ink {
            return Ok(None);
        }
        let png = self.canvas.encode_png()?;
        Ok(Some(CaptureResult {
            png,
            width: self.canvas.backing_width(),
            height: self.canvas.backing_height(),
            has_ink: true,
        }))
    }

    /// Discards the session: all ink is erased and no output is produced.
    pub fn cancel(&mut self) {
        self.clear();
    }

    /// Event-driven entry point: feeds one input event through the state
    /// machine and returns a session outcome when one is produced.
    ///
    /// # Arguments
    /// * `event` - The translated platform input event
    ///
    /// # Returns
    /// * `Result<Option<PadOutcome>>` - `Confirmed` with the capture on a
    ///   valid confirm, `Cancelled` on cancel, `None` for every other event
    pub fn handle(&mut self, event: PadEvent) -> Result<Option<PadOutcome>> {
        match event {
            PadEvent::PointerDown(point) => {
                self.begin(point);
                Ok(None)
            }
            PadEvent::PointerMove(point) => {
                self.extend(point);
                Ok(None)
            }
            PadEvent::PointerUp => {
                self.end();
                Ok(None)
            }
            PadEvent::Clear => {
                self.clear();
                Ok(None)
            }
            PadEvent::Confirm => Ok(self.confirm()?.map(PadOutcome::Confirmed)),
            PadEvent::Cancel => {
                self.cancel();
                Ok(Some(PadOutcome::Cancelled))
            }
        }
    }
}
