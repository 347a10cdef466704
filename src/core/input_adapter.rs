use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input_session::PointerEvent;
use crate::traits::controller::{Button, Controller};

/// Pixels per scroll "line" when a touchpad reports pixel deltas
const PIXELS_PER_LINE: f32 = 20.0;

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update button state.
    /// Cursor and wheel events are passed back to the caller as pointer events,
    /// one per winit event; nothing is accumulated across frames.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set_button(button, event.state == ElementState::Pressed);
                    }
                }
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = Self::mouse_button_to_button(*button) {
                    self.set_button(btn, *state == ElementState::Pressed);
                }
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                Some(PointerEvent::Moved {
                    x: position.x as f32,
                    y: position.y as f32,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => Some(PointerEvent::Scrolled {
                y: Self::scroll_lines(*delta),
            }),
            WindowEvent::Focused(false) => {
                self.release_all();
                None
            }
            _ => None,
        }
    }

    /// Translate a raw device event; only mouse motion is of interest
    pub fn process_device_event(event: &DeviceEvent) -> Option<PointerEvent> {
        match event {
            DeviceEvent::MouseMotion { delta } => Some(PointerEvent::Motion {
                dx: delta.0 as f32,
                dy: delta.1 as f32,
            }),
            _ => None,
        }
    }

    /// Forget every held button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    fn set_button(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(button);
        } else {
            self.pressed_keys.remove(&button);
        }
    }

    /// Vertical wheel movement in lines
    fn scroll_lines(delta: MouseScrollDelta) -> f32 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_LINE,
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::Digit0 => Some(Button::Digit0),
            KeyCode::Digit1 => Some(Button::Digit1),
            KeyCode::Digit2 => Some(Button::Digit2),
            KeyCode::KeyL => Some(Button::KeyL),
            KeyCode::KeyO => Some(Button::KeyO),
            KeyCode::KeyK => Some(Button::KeyK),
            _ => None,
        }
    }

    /// Map Winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
