use log::debug;

use crate::camera::{Camera, CameraMovement};
use crate::shading::{DiffuseModel, ShadingSelection, SpecularModel};
use crate::traits::controller::{Button, Controller};

/// Held keys that translate into camera movement
const MOVEMENT_KEYS: [(Button, CameraMovement); 6] = [
    (Button::KeyW, CameraMovement::Forward),
    (Button::KeyS, CameraMovement::Backward),
    (Button::KeyA, CameraMovement::Left),
    (Button::KeyD, CameraMovement::Right),
    (Button::Space, CameraMovement::Up),
    (Button::Shift, CameraMovement::Down),
];

const SPECULAR_KEYS: [(Button, SpecularModel); 3] = [
    (Button::Digit0, SpecularModel::Phong),
    (Button::Digit1, SpecularModel::BlinnPhong),
    (Button::Digit2, SpecularModel::CookTorrance),
];

const DIFFUSE_KEYS: [(Button, DiffuseModel); 3] = [
    (Button::KeyL, DiffuseModel::Lambertian),
    (Button::KeyO, DiffuseModel::OrenNayar),
    (Button::KeyK, DiffuseModel::Disney),
];

/// Pointer input in window coordinates, independent of the windowing backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Absolute cursor position
    Moved { x: f32, y: f32 },
    /// Raw device motion, unbounded by the window edges
    Motion { dx: f32, dy: f32 },
    /// Vertical wheel movement in lines, positive away from the user
    Scrolled { y: f32 },
}

/// Host-owned input bookkeeping between the windowing layer and the camera.
///
/// Holds cursor capture state, the last cursor sample used to turn positions
/// into deltas, and the shading selection. The camera only ever receives
/// finished deltas.
///
/// Once raw device motion has been seen, absolute cursor samples no longer
/// rotate the camera; they would double-count and stop at the window edge.
#[derive(Debug, Clone)]
pub struct InputSession {
    captured: bool,
    first_mouse: bool,
    raw_motion: bool,
    last_cursor: (f32, f32),
    shading: ShadingSelection,
}

impl InputSession {
    /// Session for a viewport of the given size, cursor captured
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            captured: true,
            first_mouse: true,
            raw_motion: false,
            last_cursor: (width as f32 / 2.0, height as f32 / 2.0),
            shading: ShadingSelection::default(),
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn shading(&self) -> ShadingSelection {
        self.shading
    }

    /// Feed a pointer event; ignored while the cursor is released.
    pub fn handle_pointer(&mut self, event: PointerEvent, camera: &mut Camera) {
        match event {
            PointerEvent::Moved { x, y } => self.cursor_moved(x, y, camera),
            PointerEvent::Motion { dx, dy } => self.mouse_motion(dx, dy, camera),
            PointerEvent::Scrolled { y } => self.scroll(y, camera),
        }
    }

    /// Convert an absolute cursor sample into a rotation.
    ///
    /// The first sample after capture only seeds the last position so the
    /// camera does not jump. Screen Y grows downward, hence the inverted
    /// vertical offset.
    pub fn cursor_moved(&mut self, x: f32, y: f32, camera: &mut Camera) {
        if !self.captured {
            self.first_mouse = true;
            return;
        }
        if self.raw_motion {
            return;
        }

        if self.first_mouse {
            self.last_cursor = (x, y);
            self.first_mouse = false;
        }

        let (last_x, last_y) = self.last_cursor;
        let x_offset = x - last_x;
        let y_offset = last_y - y;
        self.last_cursor = (x, y);

        camera.rotate(x_offset, y_offset);
    }

    /// Apply a relative device delta. There is no previous sample to seed,
    /// so no first-sample handling; Y is inverted as for cursor positions.
    pub fn mouse_motion(&mut self, dx: f32, dy: f32, camera: &mut Camera) {
        if !self.raw_motion {
            self.raw_motion = true;
            debug!("using raw mouse motion for look");
        }
        if self.captured {
            camera.rotate(dx, -dy);
        }
    }

    pub fn scroll(&mut self, y: f32, camera: &mut Camera) {
        if self.captured {
            camera.process_zoom(y);
        }
    }

    /// Per-frame dispatch of held buttons.
    ///
    /// Escape releases the cursor and a left click captures it again. While
    /// released no movement or selection keys are honoured.
    pub fn update(&mut self, controller: &impl Controller, camera: &mut Camera, elapsed: f32) {
        if controller.is_down(Button::Escape) && self.captured {
            self.captured = false;
            debug!("cursor released");
        }
        if controller.is_down(Button::MouseLeft) && !self.captured {
            self.captured = true;
            debug!("cursor captured");
        }

        if !self.captured {
            return;
        }

        for (button, movement) in MOVEMENT_KEYS {
            if controller.is_down(button) {
                camera.process_movement(movement, elapsed);
            }
        }

        for (button, model) in SPECULAR_KEYS {
            if controller.is_down(button) && self.shading.specular != model {
                self.shading.specular = model;
                debug!("specular model: {model:?}");
            }
        }

        for (button, model) in DIFFUSE_KEYS {
            if controller.is_down(button) && self.shading.diffuse != model {
                self.shading.diffuse = model;
                debug!("diffuse model: {model:?}");
            }
        }
    }
}
