use crate::V2;

// Three coordinate spaces:
// surface: physical pixels of the raster target (canvas scaled by `scale`)
// canvas: logical pixels, origin at the top-left corner, y down
// world: canvas shifted so that the pivot is the origin
#[derive(Debug, Clone)]
pub struct View {
	canvas_size: V2,
	pivot_lift: f64,
	scale: f64,
}

impl Default for View {
	fn default() -> Self {
		Self {
			canvas_size: V2::new(800., 600.),
			pivot_lift: 100.,
			scale: 1.0,
		}
	}
}

impl View {
	pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
		self.canvas_size = V2::new(width, height);
		self
	}

	pub fn with_scale(mut self, scale: f64) -> Self {
		self.set_scale(scale);
		self
	}

	pub fn with_pivot_lift(mut self, lift: f64) -> Self {
		self.pivot_lift = lift;
		self
	}

	pub fn set_scale(&mut self, scale: f64) {
		if scale.is_finite() && scale > 0. {
			self.scale = scale;
		}
	}

	pub fn get_scale(&self) -> f64 {
		self.scale
	}

	pub fn canvas_size(&self) -> V2 {
		self.canvas_size
	}

	pub fn surface_size(&self) -> [u32; 2] {
		let s = self.canvas_size * self.scale;
		[s[0].round().max(1.) as u32, s[1].round().max(1.) as u32]
	}

	// canvas center, lifted upward
	pub fn pivot(&self) -> V2 {
		V2::new(
			self.canvas_size[0] / 2.,
			self.canvas_size[1] / 2. - self.pivot_lift,
		)
	}

	pub fn c2w(&self, c: V2) -> V2 {
		c - self.pivot()
	}

	pub fn w2c(&self, w: V2) -> V2 {
		w + self.pivot()
	}

	pub fn s2c(&self, s: V2) -> V2 {
		s / self.scale
	}

	pub fn s2w(&self, s: V2) -> V2 {
		self.c2w(self.s2c(s))
	}

	pub fn w2s(&self, w: V2) -> V2 {
		self.w2c(w) * self.scale
	}

	// length in logical pixels to surface pixels
	pub fn l2s(&self, l: f64) -> f64 {
		l * self.scale
	}
}
