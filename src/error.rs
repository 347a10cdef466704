use std::path::PathBuf;

use glam::Vec3;

/// Errors raised at the configuration edges of the demo.
///
/// The camera itself never fails; everything here happens before the first
/// frame is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid position bounds: min {min} must not exceed max {max} on any axis")]
    InvalidBounds { min: Vec3, max: Vec3 },

    #[error("invalid demo number {0}, expected 1 or 2")]
    InvalidDemo(u32),

    #[error("failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
