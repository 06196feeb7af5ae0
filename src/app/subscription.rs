// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Touch events are routed to the sheet in window coordinates no matter
//! where they land; the sheet's own hit testing decides whether they
//! start a drag. The auto-peek timer is a conditional subscription: it
//! only exists while the sheet still wants the reveal, so it cancels
//! structurally instead of through bookkeeping.

use super::Message;
use crate::config::Config;
use crate::ui::sheet;
use iced::{event, time, touch, window, Subscription};
use std::time::Duration;

/// Routes native window and touch events to top-level messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Touch(touch_event) => {
            Some(Message::Sheet(route_touch(&touch_event)))
        }
        _ => None,
    })
}

fn route_touch(event: &touch::Event) -> sheet::Message {
    match event {
        touch::Event::FingerPressed { position, .. } => {
            sheet::Message::FingerPressed { y: position.y }
        }
        touch::Event::FingerMoved { position, .. } => {
            sheet::Message::FingerMoved { y: position.y }
        }
        touch::Event::FingerLifted { position, .. } => {
            sheet::Message::FingerLifted { y: position.y }
        }
        touch::Event::FingerLost { position, .. } => {
            sheet::Message::FingerLost { y: position.y }
        }
    }
}

/// One-shot reveal of the peek strip shortly after startup. The timer
/// exists only while the sheet is closed, untouched, and on a touch
/// form factor; the first fire flips that condition, which drops the
/// subscription.
pub fn create_auto_peek_subscription(
    sheet: &sheet::State,
    config: &Config,
) -> Subscription<Message> {
    if config.auto_peek_enabled() && sheet.wants_auto_peek() {
        time::every(Duration::from_millis(config.auto_peek_delay_ms()))
            .map(|_| Message::Sheet(sheet::Message::AutoPeek))
    } else {
        Subscription::none()
    }
}
