pub mod color;
pub mod palette;
pub mod style;
pub mod theme_colors;

pub use image::{Rgb, Rgba};
