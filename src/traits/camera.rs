use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::frame::Projection;

/// Read side of a camera, as seen by the per-frame uniform builder
pub trait CameraView {
    /// World-to-eye transform
    fn view_matrix(&self) -> Mat4;

    /// Eye-to-clip transform for the given viewport aspect ratio
    fn projection_matrix(&self, aspect: f32, projection: Projection) -> Mat4;

    /// Eye position in world space
    fn position(&self) -> Vec3;
}

impl CameraView for Camera {
    fn view_matrix(&self) -> Mat4 {
        Camera::view_matrix(self)
    }

    fn projection_matrix(&self, aspect: f32, projection: Projection) -> Mat4 {
        Camera::projection_matrix(self, aspect, projection)
    }

    fn position(&self) -> Vec3 {
        Camera::position(self)
    }
}
