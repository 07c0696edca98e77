// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window events are translated into navigator input here. Wheel
//! events are routed even when a widget captured them, since no widget in the
//! window scrolls; keyboard events are only routed when nothing captured them.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use crate::navigator::{InputEvent, NavKey};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, Event, Subscription};
use std::time::Duration;

/// Pixels per wheel line, matching what browsers report for one notch.
const WHEEL_LINE_PX: f32 = 100.0;

/// Subscribes to window events the navigator reacts to.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        route_event(&event, status).map(Message::Input)
    })
}

/// Periodic tick while timers are pending or animations are running.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Translates a window event into navigator input, if it is one.
pub fn route_event(event: &Event, status: event::Status) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => Some(InputEvent::Wheel {
            delta_y: wheel_delta_y(*delta),
        }),
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(InputEvent::TouchStart {
                finger: id.0,
                y: position.y,
            })
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            Some(InputEvent::TouchEnd {
                finger: id.0,
                y: position.y,
            })
        }
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(InputEvent::TouchCancel { finger: id.0 })
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => nav_key(key).map(InputEvent::Key),
            event::Status::Captured => None,
        },
        _ => None,
    }
}

/// Vertical wheel movement in pixels, positive when scrolling down.
fn wheel_delta_y(delta: mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
        mouse::ScrollDelta::Pixels { y, .. } => -y,
    }
}

fn nav_key(key: &Key) -> Option<NavKey> {
    match key {
        Key::Named(Named::ArrowDown) => Some(NavKey::ArrowDown),
        Key::Named(Named::PageDown) => Some(NavKey::PageDown),
        Key::Named(Named::ArrowUp) => Some(NavKey::ArrowUp),
        Key::Named(Named::PageUp) => Some(NavKey::PageUp),
        Key::Named(Named::Home) => Some(NavKey::Home),
        Key::Named(Named::End) => Some(NavKey::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    #[test]
    fn wheel_down_is_positive() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: -1.0 },
        });
        assert_eq!(
            route_event(&event, event::Status::Ignored),
            Some(InputEvent::Wheel { delta_y: 100.0 })
        );
    }

    #[test]
    fn captured_wheel_is_still_routed() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Pixels { x: 0.0, y: 30.0 },
        });
        assert_eq!(
            route_event(&event, event::Status::Captured),
            Some(InputEvent::Wheel { delta_y: -30.0 })
        );
    }

    #[test]
    fn touch_events_carry_vertical_position() {
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(10.0, 400.0),
        });
        let lifted = Event::Touch(touch::Event::FingerLifted {
            id: touch::Finger(0),
            position: Point::new(10.0, 250.0),
        });
        assert_eq!(
            route_event(&pressed, event::Status::Ignored),
            Some(InputEvent::TouchStart {
                finger: 0,
                y: 400.0
            })
        );
        assert_eq!(
            route_event(&lifted, event::Status::Ignored),
            Some(InputEvent::TouchEnd {
                finger: 0,
                y: 250.0
            })
        );
    }

    #[test]
    fn touch_events_keep_finger_identity() {
        let second = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(7),
            position: Point::new(0.0, 90.0),
        });
        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(7),
            position: Point::new(0.0, 90.0),
        });
        assert_eq!(
            route_event(&second, event::Status::Captured),
            Some(InputEvent::TouchStart { finger: 7, y: 90.0 })
        );
        assert_eq!(
            route_event(&lost, event::Status::Ignored),
            Some(InputEvent::TouchCancel { finger: 7 })
        );
    }

    #[test]
    fn navigation_keys_are_recognized() {
        assert_eq!(nav_key(&Key::Named(Named::PageDown)), Some(NavKey::PageDown));
        assert_eq!(nav_key(&Key::Named(Named::Home)), Some(NavKey::Home));
        assert_eq!(nav_key(&Key::Named(Named::End)), Some(NavKey::End));
    }

    #[test]
    fn other_keys_pass_through() {
        assert_eq!(nav_key(&Key::Named(Named::Space)), None);
        assert_eq!(nav_key(&Key::Character("j".into())), None);
    }

    #[test]
    fn cursor_moves_are_not_input() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(route_event(&event, event::Status::Ignored), None);
    }
}
