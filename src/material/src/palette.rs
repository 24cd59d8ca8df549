use image::Rgb;

use crate::color::{interpolate_colors, parse_hex, ColorError};

#[derive(Debug, Clone)]
pub struct Palette {
	colors: Vec<Rgb<u8>>,
}

impl Default for Palette {
	fn default() -> Self {
		Self::rainbow()
	}
}

impl Palette {
	pub fn rainbow() -> Self {
		Self {
			colors: vec![
				Rgb([0xFF, 0x00, 0x00]),
				Rgb([0xFF, 0x99, 0x00]),
				Rgb([0xFF, 0xFF, 0x00]),
				Rgb([0x00, 0xFF, 0x00]),
				Rgb([0x00, 0xFF, 0xFF]),
				Rgb([0x00, 0x00, 0xFF]),
				Rgb([0x99, 0x00, 0xFF]),
			],
		}
	}

	pub fn from_hex(hex: &[&str]) -> Result<Self, ColorError> {
		if hex.is_empty() {
			return Err(ColorError::EmptyPalette);
		}
		let colors = hex
			.iter()
			.map(|s| parse_hex(s))
			.collect::<Result<Vec<_>, _>>()?;
		Ok(Self { colors })
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	// progress 0 is the first color, 1 the last
	pub fn sample(&self, progress: f32) -> Rgb<u8> {
		let span = (self.colors.len() - 1) as f32;
		let pos = progress.clamp(0., 1.) * span;
		let idx = pos.floor() as usize;
		let next = (idx + 1).min(self.colors.len() - 1);
		interpolate_colors(self.colors[idx], self.colors[next], pos.fract())
	}
}
