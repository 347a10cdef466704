use glam::Vec3;

use crate::error::{Error, Result};

/// Axis-aligned box used to keep the camera inside a scene.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// A box that never moves a finite point.
    pub const UNBOUNDED: AABB = AABB {
        min: Vec3::NEG_INFINITY,
        max: Vec3::INFINITY,
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Like [`AABB::new`] but rejects inverted or NaN corners.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.cmple(max).all() {
            return Err(Error::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Component-wise clamp of `point` into the box.
    ///
    /// Applies `max` after `min`, so an inverted box still yields a value
    /// (the `max` corner wins) instead of panicking.
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        point.max(self.min).min(self.max)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }
}

impl Default for AABB {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_new() {
        let min = Vec3::new(-10.0, -2.0, -15.0);
        let max = Vec3::new(10.0, 50.0, 15.0);
        let aabb = AABB::new(min, max);
        assert_eq!(aabb.min, min);
        assert_eq!(aabb.max, max);
    }

    #[test]
    fn test_aabb_center() {
        let aabb = AABB::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_try_new_rejects_inverted_axis() {
        let result = AABB::try_new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(1.0, 1.0, 1.0));
        assert!(matches!(result, Err(Error::InvalidBounds { .. })));
    }

    #[test]
    fn test_try_new_rejects_nan() {
        let result = AABB::try_new(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
        assert!(result.is_err());
    }

    #[test]
    fn test_try_new_accepts_degenerate_box() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let aabb = AABB::try_new(p, p).unwrap();
        assert_eq!(aabb.clamp(Vec3::ZERO), p);
    }

    #[test]
    fn test_clamp_each_axis_independently() {
        let aabb = AABB::new(Vec3::new(-10.0, -2.0, -15.0), Vec3::new(10.0, 50.0, 15.0));
        let clamped = aabb.clamp(Vec3::new(20.0, -5.0, 3.0));
        assert_eq!(clamped, Vec3::new(10.0, -2.0, 3.0));
    }

    #[test]
    fn test_clamp_inside_is_identity() {
        let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let p = Vec3::new(0.25, -0.5, 0.75);
        assert_eq!(aabb.clamp(p), p);
    }

    #[test]
    fn test_unbounded_never_moves_points() {
        let p = Vec3::new(1.0e6, -3.0e7, 42.0);
        assert_eq!(AABB::UNBOUNDED.clamp(p), p);
        assert!(AABB::UNBOUNDED.contains(p));
        assert_eq!(AABB::default(), AABB::UNBOUNDED);
    }

    #[test]
    fn test_contains_includes_faces() {
        let aabb = AABB::new(Vec3::ZERO, Vec3::ONE);
        assert!(aabb.contains(Vec3::ONE));
        assert!(aabb.contains(Vec3::ZERO));
        assert!(!aabb.contains(Vec3::new(1.0, 1.0, 1.0001)));
    }
}
