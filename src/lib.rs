pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod demo;
pub mod error;
pub mod frame;
pub mod math;
pub mod shading;
pub mod traits;

pub use camera::{Camera, CameraMovement};
pub use error::{Error, Result};
pub use frame::{FrameUniforms, Projection};
