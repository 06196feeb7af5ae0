// SPDX-License-Identifier: MPL-2.0
//! Snap points and the snap decision for the bottom sheet.

use crate::ui::design_tokens::sizing;

/// Resting height of the peek strip, in logical pixels.
pub const PEEK_HEIGHT: f32 = sizing::SHEET_PEEK_HEIGHT;

/// Fraction of the window height a drag must travel, relative to its
/// start, to commit to open/closed regardless of where it ends.
pub const COMMIT_RATIO: f32 = 0.3;

/// Above this fraction of the window height the sheet settles open.
pub const OPEN_RATIO: f32 = 0.7;

/// Above this fraction of the window height the sheet settles at peek;
/// below it, closed.
pub const PEEK_RATIO: f32 = 0.1;

/// One of the three resting positions of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPosition {
    #[default]
    Closed,
    Peek,
    Open,
}

impl SheetPosition {
    /// Whether the sheet occupies any screen space (and the dimming
    /// overlay is shown).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, SheetPosition::Closed)
    }
}

/// Resting height for a position given the current window height.
#[must_use]
pub fn target_height(position: SheetPosition, window_height: f32) -> f32 {
    match position {
        SheetPosition::Closed => 0.0,
        SheetPosition::Peek => PEEK_HEIGHT,
        SheetPosition::Open => window_height,
    }
}

/// Decides where the sheet settles when a drag ends.
///
/// Two-tier policy: a drag that traveled more than `COMMIT_RATIO` of the
/// window height commits in its direction regardless of where it ended
/// (rewards decisive flicks); otherwise the absolute height decides.
/// The ratios are product design constants, not tuning parameters.
#[must_use]
pub fn decide(current_height: f32, start_height: f32, window_height: f32) -> SheetPosition {
    let travel = current_height - start_height;

    if travel > window_height * COMMIT_RATIO {
        SheetPosition::Open
    } else if travel < -(window_height * COMMIT_RATIO) {
        SheetPosition::Closed
    } else if current_height > window_height * OPEN_RATIO {
        SheetPosition::Open
    } else if current_height > window_height * PEEK_RATIO {
        SheetPosition::Peek
    } else {
        SheetPosition::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f32 = 800.0;

    #[test]
    fn long_upward_drag_opens() {
        // delta = 560 > 240 (0.3 * 800)
        assert_eq!(decide(600.0, 40.0, WINDOW), SheetPosition::Open);
    }

    #[test]
    fn short_downward_drag_from_high_position_peeks() {
        // delta = -100, not past -240; 500 is below 560 (0.7 * 800) but
        // above 80 (0.1 * 800)
        assert_eq!(decide(500.0, 600.0, WINDOW), SheetPosition::Peek);
    }

    #[test]
    fn tiny_drag_near_bottom_closes() {
        // delta = -10; 30 < 80
        assert_eq!(decide(30.0, 40.0, WINDOW), SheetPosition::Closed);
    }

    #[test]
    fn long_downward_drag_closes_even_when_still_high() {
        // delta = -300 < -240, so the flick wins over the absolute rules
        assert_eq!(decide(400.0, 700.0, WINDOW), SheetPosition::Closed);
    }

    #[test]
    fn slow_drag_above_open_threshold_opens() {
        assert_eq!(decide(580.0, 500.0, WINDOW), SheetPosition::Open);
    }

    #[test]
    fn thresholds_are_strict() {
        // Exactly at the commit threshold the flick rule does not fire,
        // and 280 falls in the peek band.
        assert_eq!(decide(280.0, 40.0, WINDOW), SheetPosition::Peek);
        // Exactly at the peek threshold the sheet closes.
        assert_eq!(decide(80.0, 80.0, WINDOW), SheetPosition::Closed);
    }

    #[test]
    fn decide_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(decide(413.0, 256.0, WINDOW), decide(413.0, 256.0, WINDOW));
        }
    }

    #[test]
    fn target_heights_match_positions() {
        assert_eq!(target_height(SheetPosition::Closed, WINDOW), 0.0);
        assert_eq!(target_height(SheetPosition::Peek, WINDOW), PEEK_HEIGHT);
        assert_eq!(target_height(SheetPosition::Open, WINDOW), WINDOW);
    }

    #[test]
    fn only_closed_is_invisible() {
        assert!(!SheetPosition::Closed.is_visible());
        assert!(SheetPosition::Peek.is_visible());
        assert!(SheetPosition::Open.is_visible());
    }
}
