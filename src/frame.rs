use glam::Mat4;

use crate::shading::ShadingSelection;
use crate::traits::CameraView;

/// Near/far clip planes used for the perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub near: f32,
    pub far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Per-frame values handed to the shading stage.
///
/// Layout matches a std140 block: the matrix, then two 16-byte rows.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub inv_view_proj: [[f32; 4]; 4],
    pub cam_position: [f32; 3],
    pub near: f32,
    pub far: f32,
    pub specular_shader_type: i32,
    pub diffuse_shader_type: i32,
    pub _pad: f32,
}

impl FrameUniforms {
    /// Combine the camera's view and projection for a `width` x `height`
    /// viewport. A zero-height viewport (minimized window) uses aspect 1.
    pub fn new(
        camera: &impl CameraView,
        viewport: (u32, u32),
        projection: Projection,
        selection: ShadingSelection,
    ) -> Self {
        let (width, height) = viewport;
        let aspect = if height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };

        let view_proj = camera.projection_matrix(aspect, projection) * camera.view_matrix();
        let (specular_shader_type, diffuse_shader_type) = selection.indices();

        Self {
            inv_view_proj: view_proj.inverse().to_cols_array_2d(),
            cam_position: camera.position().to_array(),
            near: projection.near,
            far: projection.far,
            specular_shader_type,
            diffuse_shader_type,
            _pad: 0.0,
        }
    }

    pub fn inv_view_proj(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.inv_view_proj)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::shading::{DiffuseModel, SpecularModel};
    use glam::{Vec3, Vec4};

    #[test]
    fn uniform_block_is_std140_sized() {
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 96);
    }

    #[test]
    fn near_plane_center_unprojects_in_front_of_eye() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 3.0));
        let uniforms = FrameUniforms::new(
            &camera,
            (800, 600),
            Projection::default(),
            ShadingSelection::default(),
        );

        let clip = uniforms.inv_view_proj() * Vec4::new(0.0, 0.0, -1.0, 1.0);
        let world = clip.truncate() / clip.w;
        assert!(world.abs_diff_eq(Vec3::new(0.0, 0.0, 2.9), 1e-3), "{world}");
    }

    #[test]
    fn carries_position_planes_and_selectors() {
        let camera = Camera::at(Vec3::new(1.0, 2.0, 3.0));
        let selection = ShadingSelection {
            specular: SpecularModel::BlinnPhong,
            diffuse: DiffuseModel::Disney,
        };
        let uniforms = FrameUniforms::new(&camera, (800, 600), Projection::default(), selection);

        assert_eq!(uniforms.cam_position, [1.0, 2.0, 3.0]);
        assert_eq!(uniforms.near, 0.1);
        assert_eq!(uniforms.far, 1000.0);
        assert_eq!(uniforms.specular_shader_type, 1);
        assert_eq!(uniforms.diffuse_shader_type, 2);
    }

    #[test]
    fn zero_height_viewport_stays_finite() {
        let camera = Camera::default();
        let uniforms = FrameUniforms::new(
            &camera,
            (800, 0),
            Projection::default(),
            ShadingSelection::default(),
        );
        assert!(uniforms.inv_view_proj().is_finite());
    }

    #[test]
    fn bytes_are_castable() {
        let camera = Camera::default();
        let uniforms = FrameUniforms::new(
            &camera,
            (1, 1),
            Projection::default(),
            ShadingSelection::default(),
        );
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 96);
    }
}
