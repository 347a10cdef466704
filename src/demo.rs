use std::fmt;

use glam::Vec3;

use crate::error::{Error, Result};
use crate::math::AABB;

pub const VERTEX_SHADER: &str = "scene_vert.vs";

/// Starting eye position shared by every demo.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 3.0);

/// Which scene the fragment stage renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Demo {
    #[default]
    One,
    Two,
}

impl Demo {
    pub fn from_number(number: u32) -> Result<Self> {
        match number {
            1 => Ok(Demo::One),
            2 => Ok(Demo::Two),
            other => Err(Error::InvalidDemo(other)),
        }
    }

    pub const fn number(self) -> u32 {
        match self {
            Demo::One => 1,
            Demo::Two => 2,
        }
    }

    pub fn fragment_shader(self) -> String {
        format!("scene{}.fs", self.number())
    }

    /// Where the camera may roam in this demo.
    pub fn position_bounds(self) -> AABB {
        match self {
            Demo::One => AABB::new(Vec3::new(-10.0, -2.0, -15.0), Vec3::new(10.0, 50.0, 15.0)),
            Demo::Two => AABB::UNBOUNDED,
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "demo {}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_demos() {
        assert_eq!(Demo::from_number(1).unwrap(), Demo::One);
        assert_eq!(Demo::from_number(2).unwrap(), Demo::Two);
    }

    #[test]
    fn rejects_out_of_range_numbers() {
        for n in [0, 3, 42] {
            assert!(matches!(Demo::from_number(n), Err(Error::InvalidDemo(x)) if x == n));
        }
    }

    #[test]
    fn fragment_shader_follows_number() {
        assert_eq!(Demo::One.fragment_shader(), "scene1.fs");
        assert_eq!(Demo::Two.fragment_shader(), "scene2.fs");
    }

    #[test]
    fn demo_one_is_boxed_in() {
        let bounds = Demo::One.position_bounds();
        assert_eq!(bounds.min, Vec3::new(-10.0, -2.0, -15.0));
        assert_eq!(bounds.max, Vec3::new(10.0, 50.0, 15.0));
        assert!(bounds.contains(START_POSITION));
    }

    #[test]
    fn demo_two_is_unbounded() {
        assert_eq!(Demo::Two.position_bounds(), AABB::UNBOUNDED);
    }

    #[test]
    fn display_names_demo() {
        assert_eq!(Demo::Two.to_string(), "demo 2");
        assert_eq!(Demo::default(), Demo::One);
    }
}
