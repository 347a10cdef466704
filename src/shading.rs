/// Specular lobe used by the fragment stage, keyed 0/1/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecularModel {
    #[default]
    Phong = 0,
    BlinnPhong = 1,
    CookTorrance = 2,
}

/// Diffuse term used by the fragment stage, keyed L/O/K.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiffuseModel {
    #[default]
    Lambertian = 0,
    OrenNayar = 1,
    Disney = 2,
}

/// Currently selected pair of shading models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShadingSelection {
    pub specular: SpecularModel,
    pub diffuse: DiffuseModel,
}

impl ShadingSelection {
    /// Selector indices as the shader expects them: (specular, diffuse).
    pub fn indices(&self) -> (i32, i32) {
        (self.specular as i32, self.diffuse as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_phong_and_lambertian() {
        let selection = ShadingSelection::default();
        assert_eq!(selection.specular, SpecularModel::Phong);
        assert_eq!(selection.diffuse, DiffuseModel::Lambertian);
        assert_eq!(selection.indices(), (0, 0));
    }

    #[test]
    fn indices_match_shader_codes() {
        let selection = ShadingSelection {
            specular: SpecularModel::CookTorrance,
            diffuse: DiffuseModel::OrenNayar,
        };
        assert_eq!(selection.indices(), (2, 1));
        assert_eq!(SpecularModel::BlinnPhong as i32, 1);
        assert_eq!(DiffuseModel::Disney as i32, 2);
    }
}
