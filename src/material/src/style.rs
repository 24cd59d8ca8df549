use crate::palette::Palette;

// Sizes in logical pixels. The mass radius is not here, it comes with the
// model so that drawing and hit testing use the same value.
#[derive(Debug, Clone)]
pub struct Style {
	pub inner_mass_radius: f64,
	pub anchor_radius: f64,
	pub anchor_inner_radius: f64,
	pub line_width: f64,
	pub glow_line_extra: f64,
	pub trail_width: f64,
	pub glow_size: f64,
	pub palette: Palette,
}

impl Default for Style {
	fn default() -> Self {
		Self {
			inner_mass_radius: 7.5,
			anchor_radius: 8.,
			anchor_inner_radius: 4.,
			line_width: 3.,
			glow_line_extra: 4.,
			trail_width: 3.,
			glow_size: 20.,
			palette: Palette::rainbow(),
		}
	}
}

impl Style {
	pub fn with_palette(mut self, palette: Palette) -> Self {
		self.palette = palette;
		self
	}
}
