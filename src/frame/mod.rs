//! Frame buffers and file I/O.
//!
//! The pipeline consumes RGB frames (`image::RgbImage`) and works internally
//! on a single-channel float plane kept on the 0..255 scale, so the edge
//! detector thresholds match 8-bit gradient magnitudes directly.

mod io;
mod plane;

pub use io::{load_rgb_image, save_rgb_image, write_json_file};
pub use plane::GrayF32;
