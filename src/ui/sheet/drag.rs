// SPDX-License-Identifier: MPL-2.0
//! Drag session bookkeeping for the bottom sheet.
//!
//! A [`DragSession`] exists exactly while a finger is down on the handle
//! band; the [`GestureTracker`] turns finger positions into clamped
//! height proposals and guarantees that out-of-order events (a move
//! after the drag ended, a duplicate end) are silent no-ops.

use crate::ui::design_tokens::sizing;

use super::position::PEEK_HEIGHT;

/// Height of the band at the top of the sheet that qualifies a drag.
pub const HANDLE_HIT_HEIGHT: f32 = sizing::SHEET_HANDLE_HIT_HEIGHT;

/// Reference points captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Finger y-coordinate at drag start, in window space.
    pub start_pointer_y: f32,
    /// Sheet height at drag start.
    pub start_height: f32,
}

impl DragSession {
    /// Sheet height implied by a finger position, clamped to
    /// `[0, window_height]`. Finger moving up (smaller y) grows the
    /// sheet.
    #[must_use]
    pub fn height_at(&self, pointer_y: f32, window_height: f32) -> f32 {
        let delta = self.start_pointer_y - pointer_y;
        (self.start_height + delta).clamp(0.0, window_height)
    }
}

/// Converts raw finger positions into live sheet heights.
#[derive(Debug, Default)]
pub struct GestureTracker {
    session: Option<DragSession>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, if a finger is down.
    #[must_use]
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Attempts to start a drag. Qualifies only when the finger landed
    /// inside the handle band at the top of the sheet; a touch further
    /// down (on sheet content) or above the sheet is not a drag. A
    /// collapsed sheet has no on-screen band, so its grab band is the
    /// strip just above the window's bottom edge instead.
    ///
    /// `current_height` seeds the session reference; a collapsed sheet
    /// falls back to the peek height so the very first upward drag has a
    /// sane anchor.
    ///
    /// Returns whether a session was opened.
    pub fn begin(&mut self, pointer_y: f32, sheet_top_y: f32, current_height: f32) -> bool {
        let offset = pointer_y - sheet_top_y;
        let in_band = if current_height > 0.0 {
            (0.0..HANDLE_HIT_HEIGHT).contains(&offset)
        } else {
            (-HANDLE_HIT_HEIGHT..=0.0).contains(&offset)
        };
        if !in_band {
            return false;
        }

        let start_height = if current_height > 0.0 {
            current_height
        } else {
            PEEK_HEIGHT
        };

        self.session = Some(DragSession {
            start_pointer_y: pointer_y,
            start_height,
        });
        true
    }

    /// Computes the sheet height for the current finger position,
    /// clamped to `[0, window_height]`. Returns `None` when no drag is
    /// active, so stray move events cannot disturb the sheet.
    #[must_use]
    pub fn drag_to(&self, pointer_y: f32, window_height: f32) -> Option<f32> {
        let session = self.session?;
        Some(session.height_at(pointer_y, window_height))
    }

    /// Ends the drag and returns its session, if one was active.
    /// Idempotent: a second call returns `None`.
    pub fn finish(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const WINDOW: f32 = 800.0;

    fn tracker_with_session() -> GestureTracker {
        let mut tracker = GestureTracker::new();
        // Sheet peeking at the bottom: top edge at 760, finger on it.
        assert!(tracker.begin(770.0, 760.0, PEEK_HEIGHT));
        tracker
    }

    #[test]
    fn begin_requires_handle_band() {
        let mut tracker = GestureTracker::new();

        // Below the band (inside sheet content)
        assert!(!tracker.begin(400.0 + HANDLE_HIT_HEIGHT, 400.0, 400.0));
        assert!(!tracker.is_active());

        // Above the sheet entirely
        assert!(!tracker.begin(399.0, 400.0, 400.0));
        assert!(!tracker.is_active());

        // Inside the band
        assert!(tracker.begin(400.0 + HANDLE_HIT_HEIGHT - 1.0, 400.0, 400.0));
        assert!(tracker.is_active());
    }

    #[test]
    fn begin_from_collapsed_sheet_anchors_at_peek_height() {
        let mut tracker = GestureTracker::new();
        assert!(tracker.begin(800.0, 800.0, 0.0));
        let session = tracker.finish().expect("session");
        assert_eq!(session.start_height, PEEK_HEIGHT);
    }

    #[test]
    fn collapsed_sheet_grabs_from_the_bottom_edge_strip() {
        let mut tracker = GestureTracker::new();

        // Just above the bottom edge: qualifies
        assert!(tracker.begin(800.0 - HANDLE_HIT_HEIGHT + 1.0, 800.0, 0.0));
        tracker.finish();

        // Middle of the window: does not
        assert!(!tracker.begin(400.0, 800.0, 0.0));
        assert!(!tracker.is_active());
    }

    #[test]
    fn drag_up_grows_height() {
        let tracker = tracker_with_session();
        let height = tracker.drag_to(570.0, WINDOW).expect("active drag");
        assert_abs_diff_eq!(height, PEEK_HEIGHT + 200.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn drag_is_clamped_to_window() {
        let tracker = tracker_with_session();

        // Way past the top of the window
        assert_eq!(tracker.drag_to(-5000.0, WINDOW), Some(WINDOW));
        // Way below the bottom
        assert_eq!(tracker.drag_to(5000.0, WINDOW), Some(0.0));
    }

    #[test]
    fn rapid_direction_reversal_stays_in_bounds() {
        let tracker = tracker_with_session();
        for (i, y) in [100.0, 900.0, -50.0, 780.0, 10.0].into_iter().enumerate() {
            let height = tracker.drag_to(y, WINDOW).expect("active drag");
            assert!(
                (0.0..=WINDOW).contains(&height),
                "step {i} escaped the window bounds: {height}"
            );
        }
    }

    #[test]
    fn move_without_session_is_noop() {
        let tracker = GestureTracker::new();
        assert_eq!(tracker.drag_to(100.0, WINDOW), None);
    }

    #[test]
    fn finish_is_idempotent() {
        let mut tracker = tracker_with_session();
        assert!(tracker.finish().is_some());
        assert!(tracker.finish().is_none());
        assert!(!tracker.is_active());
    }

    #[test]
    fn move_after_finish_is_noop() {
        let mut tracker = tracker_with_session();
        tracker.finish();
        assert_eq!(tracker.drag_to(100.0, WINDOW), None);
    }
}
