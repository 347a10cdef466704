use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::frame::Projection;
use crate::math::AABB;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 5.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Pitch is kept short of the poles, where `front x world_up` vanishes.
pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Movement requests understood by the camera.
///
/// Input backends translate their own key codes into these, so the camera
/// never sees a windowing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl CameraMovement {
    pub const ALL: [CameraMovement; 6] = [
        CameraMovement::Forward,
        CameraMovement::Backward,
        CameraMovement::Left,
        CameraMovement::Right,
        CameraMovement::Up,
        CameraMovement::Down,
    ];

    pub const fn is_vertical(self) -> bool {
        matches!(self, CameraMovement::Up | CameraMovement::Down)
    }
}

/// Free-fly camera driven by yaw/pitch Euler angles (degrees, no roll).
///
/// `front`, `right` and `up` are derived from the angles and refreshed after
/// every orientation change; they have no setters.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    position_bounds: AABB,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            position_bounds: AABB::UNBOUNDED,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Camera at `position` with the default orientation (looking down -Z).
    pub fn at(position: Vec3) -> Self {
        Self::new(position, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Build a camera from a config file's settings.
    ///
    /// Values are clamped to the same ranges the update operations enforce.
    pub fn with_config(config: &CameraConfig) -> Self {
        let pitch = config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let mut camera = Self::new(Vec3::from_array(config.position), config.yaw, pitch);
        camera.movement_speed = config.movement_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera.zoom = config.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Accumulated yaw in degrees. Not wrapped; see [`Camera::yaw_wrapped`].
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Yaw folded into `[0, 360)` for display.
    pub fn yaw_wrapped(&self) -> f32 {
        self.yaw.rem_euclid(360.0)
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    pub fn position_bounds(&self) -> AABB {
        self.position_bounds
    }

    /// Replace the positional bounds and pull the current position inside.
    pub fn set_position_bounds(&mut self, bounds: AABB) {
        self.position_bounds = bounds;
        self.position = bounds.clamp(self.position);
    }

    /// Right-handed look-at matrix from the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// OpenGL-style perspective using `zoom` as the vertical field of view.
    pub fn projection_matrix(&self, aspect: f32, projection: Projection) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.zoom.to_radians(),
            aspect,
            projection.near,
            projection.far,
        )
    }

    /// Translate along `direction` for `elapsed` seconds.
    ///
    /// Horizontal moves ignore pitch: `front` and `right` are flattened onto
    /// the XZ plane first. The result is always clamped into
    /// `position_bounds`, on all three axes.
    pub fn process_movement(&mut self, direction: CameraMovement, elapsed: f32) {
        let velocity = self.movement_speed * elapsed.max(0.0);

        if direction.is_vertical() {
            let change = match direction {
                CameraMovement::Up => self.world_up * velocity,
                _ => -self.world_up * velocity,
            };
            self.position.y += change.y;
        } else {
            let horizontal_front = horizontal(self.front);
            let horizontal_right = horizontal(self.right);

            let change = match direction {
                CameraMovement::Forward => horizontal_front * velocity,
                CameraMovement::Backward => -horizontal_front * velocity,
                CameraMovement::Left => -horizontal_right * velocity,
                _ => horizontal_right * velocity,
            };
            self.position.x += change.x;
            self.position.z += change.z;
        }

        self.position = self.position_bounds.clamp(self.position);
    }

    /// Apply a pointer delta. Yaw accumulates without wrapping.
    pub fn process_rotation(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// [`Camera::process_rotation`] with pitch constrained.
    pub fn rotate(&mut self, x_offset: f32, y_offset: f32) {
        self.process_rotation(x_offset, y_offset, true);
    }

    /// Scroll up narrows the field of view.
    pub fn process_zoom(&mut self, y_offset: f32) {
        self.zoom = (self.zoom - y_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    fn update_camera_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos())
            .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

/// Project `v` onto the XZ plane and renormalize.
///
/// A vertical `v` has no horizontal part and yields zero, which turns the
/// corresponding move into a no-op.
fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

impl Default for Camera {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}
