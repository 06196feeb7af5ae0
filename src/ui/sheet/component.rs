// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine for the bottom sheet.
//!
//! `State` is the exclusive owner of the sheet position and the live
//! height. Rendering is a pure projection of those two values; nothing
//! reads geometry back from the widget tree. Drag gestures temporarily
//! override the height, and every exit path (finger lift, finger loss,
//! a stale session displaced by a new press) resolves back to one of
//! the three snap points, so the sheet can never stay stuck mid-way.

use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Space, Stack};
use iced::{Element, Length};

use super::drag::GestureTracker;
use super::position::{self, SheetPosition, PEEK_HEIGHT};

/// Finger travel below which a press-and-lift on the handle strip
/// counts as a tap rather than a drag.
const TAP_SLOP: f32 = 8.0;

/// Whether the app runs on a touch-capable device. Drag gestures and
/// auto-peek are touch-only; desktop interacts through click targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFactor {
    #[default]
    Desktop,
    Touch,
}

/// Messages consumed by [`State::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Click/tap on the handle strip (desktop path; the touch path
    /// derives taps from finger events).
    HandleTapped,
    /// Press on the dimming overlay.
    OverlayPressed,
    /// Raw finger events, routed in window coordinates.
    FingerPressed { y: f32 },
    FingerMoved { y: f32 },
    FingerLifted { y: f32 },
    /// The input system lost the finger; treated exactly like a lift.
    FingerLost { y: f32 },
    /// One-shot auto-reveal timer fired.
    AutoPeek,
}

/// State-changing outcomes reported to the parent. The parent cannot
/// tell gesture-driven transitions from programmatic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Opened,
    Closed,
    PeekToggled,
}

/// The bottom sheet state machine.
#[derive(Debug)]
pub struct State {
    position: SheetPosition,
    current_height: f32,
    tracker: GestureTracker,
    window_height: f32,
    form_factor: FormFactor,
    /// Set once the sheet has ever been visible; gates auto-peek.
    revealed: bool,
    /// Whether the live drag started on the visual handle strip.
    drag_on_handle: bool,
    /// Whether the live drag traveled beyond the tap slop.
    drag_moved: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(FormFactor::Desktop, crate::app::WINDOW_DEFAULT_HEIGHT as f32)
    }
}

impl State {
    #[must_use]
    pub fn new(form_factor: FormFactor, window_height: f32) -> Self {
        Self {
            position: SheetPosition::Closed,
            current_height: 0.0,
            tracker: GestureTracker::new(),
            window_height,
            form_factor,
            revealed: false,
            drag_on_handle: false,
            drag_moved: false,
        }
    }

    #[must_use]
    pub fn position(&self) -> SheetPosition {
        self.position
    }

    /// Live sheet height in logical pixels. Equals the snap target of
    /// the current position whenever no drag is active.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_active()
    }

    #[must_use]
    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// Whether the one-shot auto-peek timer should be armed: touch form
    /// factor, never revealed, still closed, and nobody mid-drag.
    #[must_use]
    pub fn wants_auto_peek(&self) -> bool {
        self.form_factor == FormFactor::Touch
            && !self.revealed
            && self.position == SheetPosition::Closed
            && !self.tracker.is_active()
    }

    /// Updates the tracked window height, e.g. after a resize. Outside
    /// of a drag the height is re-projected so an open sheet keeps
    /// covering the full window.
    pub fn set_window_height(&mut self, window_height: f32) {
        self.window_height = window_height.max(1.0);
        if !self.tracker.is_active() {
            self.current_height = position::target_height(self.position, self.window_height);
        }
    }

    /// y-coordinate of the sheet's top edge (anchored at the window
    /// bottom).
    fn sheet_top_y(&self) -> f32 {
        self.window_height - self.current_height
    }

    /// Moves to a snap point and reports the matching event. This is
    /// the single transition function: taps, drags, timers, and
    /// programmatic requests all end here, so side effects are
    /// identical across paths.
    fn snap(&mut self, target: SheetPosition) -> Event {
        self.position = target;
        self.current_height = position::target_height(target, self.window_height);
        if target.is_visible() {
            self.revealed = true;
        }
        match target {
            SheetPosition::Open => Event::Opened,
            SheetPosition::Peek => Event::PeekToggled,
            SheetPosition::Closed => Event::Closed,
        }
    }

    /// Opens the sheet to full height.
    pub fn open(&mut self) -> Event {
        self.snap(SheetPosition::Open)
    }

    /// Collapses the sheet completely.
    pub fn close(&mut self) -> Event {
        self.snap(SheetPosition::Closed)
    }

    /// Switches between peek and open without passing through closed.
    pub fn toggle_peek(&mut self) -> Event {
        match self.position {
            SheetPosition::Peek => self.snap(SheetPosition::Open),
            SheetPosition::Open | SheetPosition::Closed => self.snap(SheetPosition::Peek),
        }
    }

    /// Tap cycle for the handle: Open closes, Peek opens, Closed peeks.
    fn handle_tap(&mut self) -> Event {
        match self.position {
            SheetPosition::Open => self.snap(SheetPosition::Closed),
            SheetPosition::Peek => self.snap(SheetPosition::Open),
            SheetPosition::Closed => self.snap(SheetPosition::Peek),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HandleTapped => {
                if self.tracker.is_active() {
                    return Event::None;
                }
                self.handle_tap()
            }
            Message::OverlayPressed => self.close(),
            Message::FingerPressed { y } => self.finger_pressed(y),
            Message::FingerMoved { y } => {
                if let Some(height) = self.tracker.drag_to(y, self.window_height) {
                    self.track_travel(height);
                    // Applied synchronously; the view projects this value
                    // on the very next frame.
                    self.current_height = height;
                }
                Event::None
            }
            Message::FingerLifted { y } | Message::FingerLost { y } => self.finger_released(y),
            Message::AutoPeek => {
                if self.wants_auto_peek() {
                    self.snap(SheetPosition::Peek)
                } else {
                    Event::None
                }
            }
        }
    }

    fn finger_pressed(&mut self, y: f32) -> Event {
        if self.form_factor != FormFactor::Touch {
            return Event::None;
        }

        // A press while a session is still live means the matching lift
        // was lost (e.g. focus change). Resolve the stale drag first so
        // the sheet is at a snap point before the new gesture starts.
        let mut event = Event::None;
        if self.tracker.is_active() {
            event = self.finger_released(y);
        }

        let offset = y - self.sheet_top_y();
        if self.tracker.begin(y, self.sheet_top_y(), self.current_height) {
            self.drag_on_handle = (0.0..PEEK_HEIGHT).contains(&offset);
            self.drag_moved = false;
        }
        event
    }

    /// Flags the drag as moved once its total travel from the session
    /// start exceeds the tap slop. Travel is cumulative, so many small
    /// moves add up the same as one big one.
    fn track_travel(&mut self, height: f32) {
        if let Some(session) = self.tracker.session() {
            if (height - session.start_height).abs() > TAP_SLOP {
                self.drag_moved = true;
            }
        }
    }

    fn finger_released(&mut self, y: f32) -> Event {
        let Some(session) = self.tracker.finish() else {
            return Event::None;
        };

        // Apply the final position before deciding, in case the lift
        // carries the last movement.
        let height = session.height_at(y, self.window_height);
        if (height - session.start_height).abs() > TAP_SLOP {
            self.drag_moved = true;
        }
        self.current_height = height;

        // A motionless press-and-lift on the handle strip is a tap, not
        // a zero-length drag.
        if !self.drag_moved && self.drag_on_handle {
            return self.handle_tap();
        }

        let target = position::decide(self.current_height, session.start_height, self.window_height);
        self.snap(target)
    }

    /// Renders the overlay and the sheet, anchored to the bottom of the
    /// window. `content` is opaque to the sheet and rendered as-is.
    pub fn view<'a, M, F>(&'a self, content: Element<'a, M>, map: F) -> Element<'a, M>
    where
        M: Clone + 'a,
        F: Fn(Message) -> M + 'a,
    {
        // Nothing on screen: no overlay, no body, no input targets.
        if !self.position.is_visible() && self.current_height <= 0.0 {
            return Space::new()
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        if self.position.is_visible() {
            let dimmer = mouse_area(
                Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::sheet::overlay),
            )
            .on_press(map(Message::OverlayPressed));
            layers = layers.push(dimmer);
        }

        let indicator = Container::new(
            Space::new()
                .width(sizing::SHEET_HANDLE_WIDTH)
                .height(sizing::SHEET_HANDLE_HEIGHT),
        )
        .style(styles::sheet::handle_indicator);

        let mut handle = button(
            Container::new(indicator)
                .width(Length::Fill)
                .height(PEEK_HEIGHT)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .padding(0.0)
        .style(styles::sheet::handle_button);

        // On touch the tap is derived from finger events; wiring the
        // button as well would fire the cycle twice per tap.
        if self.form_factor == FormFactor::Desktop {
            handle = handle.on_press(map(Message::HandleTapped));
        }

        let body = Container::new(
            Column::new()
                .push(handle)
                .push(Container::new(content).width(Length::Fill).height(Length::Fill)),
        )
        .width(Length::Fill)
        .height(self.current_height.max(0.0))
        .style(styles::sheet::body);

        let anchored = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_y(Vertical::Bottom);

        layers.push(anchored).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f32 = 800.0;

    fn touch_state() -> State {
        State::new(FormFactor::Touch, WINDOW)
    }

    fn press_on_handle(state: &mut State) -> Event {
        // Finger in the middle of the visual handle strip.
        let y = WINDOW - state.current_height() + PEEK_HEIGHT / 2.0;
        state.update(Message::FingerPressed { y })
    }

    #[test]
    fn starts_closed_with_zero_height() {
        let state = touch_state();
        assert_eq!(state.position(), SheetPosition::Closed);
        assert_eq!(state.current_height(), 0.0);
        assert!(!state.is_dragging());
    }

    #[test]
    fn open_close_toggle_report_events() {
        let mut state = touch_state();
        assert_eq!(state.open(), Event::Opened);
        assert_eq!(state.current_height(), WINDOW);

        assert_eq!(state.close(), Event::Closed);
        assert_eq!(state.current_height(), 0.0);

        assert_eq!(state.toggle_peek(), Event::PeekToggled);
        assert_eq!(state.position(), SheetPosition::Peek);
        assert_eq!(state.toggle_peek(), Event::Opened);
        assert_eq!(state.position(), SheetPosition::Open);
    }

    #[test]
    fn handle_tap_cycles_peek_open_closed() {
        let mut state = touch_state();

        assert_eq!(state.update(Message::HandleTapped), Event::PeekToggled);
        assert_eq!(state.position(), SheetPosition::Peek);

        assert_eq!(state.update(Message::HandleTapped), Event::Opened);
        assert_eq!(state.position(), SheetPosition::Open);

        // From open, a tap closes directly without passing through peek.
        assert_eq!(state.update(Message::HandleTapped), Event::Closed);
        assert_eq!(state.position(), SheetPosition::Closed);
    }

    #[test]
    fn overlay_press_always_closes() {
        let mut state = touch_state();
        state.open();
        assert_eq!(state.update(Message::OverlayPressed), Event::Closed);

        state.toggle_peek();
        assert_eq!(state.update(Message::OverlayPressed), Event::Closed);
        assert_eq!(state.position(), SheetPosition::Closed);
    }

    #[test]
    fn decisive_upward_drag_opens() {
        let mut state = touch_state();
        state.toggle_peek(); // Peek, height 40, top edge at 760

        press_on_handle(&mut state);
        assert!(state.is_dragging());

        // Drag 300px up: height 40 -> 340, travel beyond 240 commit
        let _ = state.update(Message::FingerMoved { y: 480.0 });
        assert_eq!(state.current_height(), 340.0);

        let event = state.update(Message::FingerLifted { y: 480.0 });
        assert_eq!(event, Event::Opened);
        assert_eq!(state.position(), SheetPosition::Open);
        assert_eq!(state.current_height(), WINDOW);
        assert!(!state.is_dragging());
    }

    #[test]
    fn committed_downward_drag_from_open_closes() {
        let mut state = touch_state();
        state.open();

        // Open sheet: top edge at 0. Drag down 350px: height 800 -> 450.
        let _ = state.update(Message::FingerPressed { y: 10.0 });
        let _ = state.update(Message::FingerMoved { y: 360.0 });
        assert_eq!(state.current_height(), 450.0);

        // Travel -350 is past the commit threshold: closes.
        let event = state.update(Message::FingerLifted { y: 360.0 });
        assert_eq!(event, Event::Closed);
        assert_eq!(state.position(), SheetPosition::Closed);
    }

    #[test]
    fn gentle_drag_down_from_open_settles_back_open() {
        let mut state = touch_state();
        state.open();

        let _ = state.update(Message::FingerPressed { y: 10.0 });
        // Height 800 -> 600: travel -200 stays within the commit
        // threshold and 600 is still above the open band.
        let _ = state.update(Message::FingerMoved { y: 210.0 });
        let event = state.update(Message::FingerLifted { y: 210.0 });
        assert_eq!(event, Event::Opened);
        assert_eq!(state.position(), SheetPosition::Open);
    }

    #[test]
    fn drag_height_is_always_clamped() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        for y in [-1000.0, 2000.0, 100.0, 790.0] {
            let _ = state.update(Message::FingerMoved { y });
            assert!(
                (0.0..=WINDOW).contains(&state.current_height()),
                "height escaped bounds: {}",
                state.current_height()
            );
        }
    }

    #[test]
    fn drag_resolves_to_snap_point_even_after_wild_movement() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        let _ = state.update(Message::FingerMoved { y: -500.0 });
        let _ = state.update(Message::FingerLifted { y: -500.0 });

        // Whatever happened, the rendered height matches a snap target.
        let target = position::target_height(state.position(), WINDOW);
        assert_eq!(state.current_height(), target);
    }

    #[test]
    fn finger_lost_is_treated_like_a_lift() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        let _ = state.update(Message::FingerMoved { y: 480.0 });
        let event = state.update(Message::FingerLost { y: 480.0 });
        assert_eq!(event, Event::Opened);
        assert!(!state.is_dragging());
    }

    #[test]
    fn moves_and_lifts_without_session_are_noops() {
        let mut state = touch_state();
        state.toggle_peek();

        assert_eq!(state.update(Message::FingerMoved { y: 300.0 }), Event::None);
        assert_eq!(state.current_height(), PEEK_HEIGHT);
        assert_eq!(
            state.update(Message::FingerLifted { y: 300.0 }),
            Event::None
        );
        assert_eq!(state.position(), SheetPosition::Peek);
    }

    #[test]
    fn duplicate_lift_is_a_noop() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        let _ = state.update(Message::FingerMoved { y: 400.0 });
        let first = state.update(Message::FingerLifted { y: 400.0 });
        assert_ne!(first, Event::None);

        let second = state.update(Message::FingerLifted { y: 400.0 });
        assert_eq!(second, Event::None);
    }

    #[test]
    fn desktop_ignores_finger_events() {
        let mut state = State::new(FormFactor::Desktop, WINDOW);
        state.toggle_peek();

        let y = WINDOW - state.current_height() + 10.0;
        assert_eq!(state.update(Message::FingerPressed { y }), Event::None);
        assert!(!state.is_dragging());
        assert_eq!(state.update(Message::FingerMoved { y: 100.0 }), Event::None);
        assert_eq!(state.current_height(), PEEK_HEIGHT);
    }

    #[test]
    fn press_below_handle_band_does_not_drag() {
        let mut state = touch_state();
        state.open();

        // Finger well inside the content area.
        let _ = state.update(Message::FingerPressed { y: 400.0 });
        assert!(!state.is_dragging());
    }

    #[test]
    fn motionless_tap_on_handle_strip_cycles_like_a_tap() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        let y = WINDOW - PEEK_HEIGHT + PEEK_HEIGHT / 2.0;
        let event = state.update(Message::FingerLifted { y });
        assert_eq!(event, Event::Opened);
        assert_eq!(state.position(), SheetPosition::Open);
    }

    #[test]
    fn slow_drag_in_tiny_steps_is_not_a_tap() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        // Creep upward 2px at a time; no single step exceeds the slop
        // but the total travel does.
        let start = WINDOW - PEEK_HEIGHT + PEEK_HEIGHT / 2.0;
        for step in 1..=30 {
            let _ = state.update(Message::FingerMoved {
                y: start - 2.0 * step as f32,
            });
        }

        // Total travel is 60px; the release resolves as a drag, not a
        // handle tap (which would have jumped straight to open).
        let event = state.update(Message::FingerLifted { y: start - 60.0 });
        assert_eq!(event, Event::PeekToggled);
        assert_eq!(state.position(), SheetPosition::Peek);
    }

    #[test]
    fn stale_session_is_resolved_by_the_next_press() {
        let mut state = touch_state();
        state.toggle_peek();

        press_on_handle(&mut state);
        let _ = state.update(Message::FingerMoved { y: 480.0 });
        // The lift never arrives (focus loss). The next press resolves
        // the stale drag; since the drag had opened the sheet past the
        // commit threshold, it snaps open, and the new press (near the
        // new top edge) starts a fresh session.
        let event = state.update(Message::FingerPressed { y: 30.0 });
        assert_eq!(event, Event::Opened);
        assert!(state.is_dragging());
    }

    #[test]
    fn auto_peek_fires_only_while_closed_and_unrevealed() {
        let mut state = touch_state();
        assert!(state.wants_auto_peek());
        assert_eq!(state.update(Message::AutoPeek), Event::PeekToggled);
        assert_eq!(state.position(), SheetPosition::Peek);

        // Once revealed, the timer must never fire again.
        assert!(!state.wants_auto_peek());
        state.close();
        assert!(!state.wants_auto_peek());
        assert_eq!(state.update(Message::AutoPeek), Event::None);
        assert_eq!(state.position(), SheetPosition::Closed);
    }

    #[test]
    fn auto_peek_is_desktop_disabled() {
        let mut state = State::new(FormFactor::Desktop, WINDOW);
        assert!(!state.wants_auto_peek());
        assert_eq!(state.update(Message::AutoPeek), Event::None);
    }

    #[test]
    fn resize_reprojects_height_outside_of_drags() {
        let mut state = touch_state();
        state.open();
        state.set_window_height(600.0);
        assert_eq!(state.current_height(), 600.0);

        // During a drag the live height is left alone.
        let _ = state.update(Message::FingerPressed { y: 10.0 });
        let _ = state.update(Message::FingerMoved { y: 110.0 });
        let mid_drag = state.current_height();
        state.set_window_height(900.0);
        assert_eq!(state.current_height(), mid_drag);
    }

    #[test]
    fn gesture_and_programmatic_paths_emit_identical_events() {
        let mut programmatic = touch_state();
        let mut gestured = touch_state();
        gestured.toggle_peek();
        programmatic.toggle_peek();

        let manual = programmatic.open();

        press_on_handle(&mut gestured);
        let _ = gestured.update(Message::FingerMoved { y: 400.0 });
        let via_drag = gestured.update(Message::FingerLifted { y: 400.0 });

        assert_eq!(manual, via_drag);
        assert_eq!(programmatic.position(), gestured.position());
    }
}
