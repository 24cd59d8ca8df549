// Software raster primitives on an RGBA image. Coordinates are surface
// pixels, pixel (x, y) is sampled at its center (x + 0.5, y + 0.5).
// Everything is clipped to the image and blended source-over.

use image::{Rgb, Rgba, RgbaImage};
use protocol::V2;

pub fn clear(img: &mut RgbaImage, c: Rgb<u8>) {
	for p in img.pixels_mut() {
		*p = Rgba([c[0], c[1], c[2], 255]);
	}
}

pub fn blend_pixel(img: &mut RgbaImage, x: i64, y: i64, c: Rgba<u8>, coverage: f32) {
	if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
		return;
	}
	let a = c[3] as f32 / 255. * coverage.clamp(0., 1.);
	if a <= 0. {
		return;
	}
	let dst = img.get_pixel_mut(x as u32, y as u32);
	for i in 0..3 {
		let v = c[i] as f32 * a + dst[i] as f32 * (1. - a);
		dst[i] = v.round().clamp(0., 255.) as u8;
	}
	let da = dst[3] as f32 / 255.;
	dst[3] = ((a + da * (1. - a)) * 255.).round() as u8;
}

// pixel range covering [lo, hi] on one axis, clipped to [0, len)
fn span(lo: f64, hi: f64, len: u32) -> std::ops::Range<i64> {
	let start = (lo.floor() as i64).max(0);
	let end = (hi.ceil() as i64 + 1).min(len as i64);
	start..end.max(start)
}

fn center(x: i64, y: i64) -> V2 {
	V2::new(x as f64 + 0.5, y as f64 + 0.5)
}

fn segment_distance(p: V2, a: V2, b: V2) -> f64 {
	let ab = b - a;
	let len_sq = ab.norm_squared();
	if len_sq == 0. {
		return (p - a).norm();
	}
	let t = ((p - a).dot(&ab) / len_sq).clamp(0., 1.);
	(p - (a + ab * t)).norm()
}

// One anti-aliased stroke with round joins and caps. Pixels shared by
// several segments are painted once.
pub fn stroke_polyline(img: &mut RgbaImage, points: &[V2], width: f64, c: Rgba<u8>) {
	if points.is_empty() || !(width > 0.) {
		return;
	}
	if points.iter().any(|p| !p[0].is_finite() || !p[1].is_finite()) {
		return;
	}
	let half = width / 2.;
	let (mut lo, mut hi) = (points[0], points[0]);
	for p in points {
		lo = lo.inf(p);
		hi = hi.sup(p);
	}
	for y in span(lo[1] - half - 1., hi[1] + half + 1., img.height()) {
		for x in span(lo[0] - half - 1., hi[0] + half + 1., img.width()) {
			let p = center(x, y);
			let d = if points.len() == 1 {
				(p - points[0]).norm()
			} else {
				points
					.windows(2)
					.map(|w| segment_distance(p, w[0], w[1]))
					.fold(f64::INFINITY, f64::min)
			};
			let coverage = (half + 0.5 - d).clamp(0., 1.) as f32;
			if coverage > 0. {
				blend_pixel(img, x, y, c, coverage);
			}
		}
	}
}

pub fn stroke_segment(img: &mut RgbaImage, a: V2, b: V2, width: f64, c: Rgba<u8>) {
	stroke_polyline(img, &[a, b], width, c)
}

// Two-circle radial gradient with a zero-radius start circle at `focal`
// and the end circle (`center`, `radius`), like canvas
// createRadialGradient(fx, fy, 0, cx, cy, r). Stops are interpolated with
// premultiplied alpha, past the end circle the last stop is used.
#[derive(Debug, Clone)]
pub struct RadialGradient {
	pub focal: V2,
	pub center: V2,
	pub radius: f64,
	pub inner: Rgba<u8>,
	pub outer: Rgba<u8>,
}

impl RadialGradient {
	pub fn centered(center: V2, radius: f64, inner: Rgba<u8>, outer: Rgba<u8>) -> Self {
		Self {
			focal: center,
			center,
			radius,
			inner,
			outer,
		}
	}

	pub fn with_focal(mut self, focal: V2) -> Self {
		self.focal = focal;
		self
	}

	// smallest t >= 0 with |p - (focal + t * (center - focal))| = t * radius
	pub fn t_at(&self, p: V2) -> f64 {
		let d = self.center - self.focal;
		let q = p - self.focal;
		let a = d.norm_squared() - self.radius * self.radius;
		let b = q.dot(&d);
		let c = q.norm_squared();
		if a.abs() < 1e-12 {
			// focal on the end circle
			if b <= 0. {
				return f64::INFINITY;
			}
			return c / (2. * b);
		}
		let disc = b * b - a * c;
		if disc < 0. {
			return f64::INFINITY;
		}
		(b - disc.sqrt()) / a
	}

	pub fn color_at(&self, p: V2) -> Rgba<u8> {
		let t = self.t_at(p);
		let t = if t.is_finite() { t.clamp(0., 1.) as f32 } else { 1. };
		let a0 = self.inner[3] as f32 / 255.;
		let a1 = self.outer[3] as f32 / 255.;
		let alpha = a0 + (a1 - a0) * t;
		if alpha <= 0. {
			return Rgba([0, 0, 0, 0]);
		}
		let mut out = [0u8; 4];
		for i in 0..3 {
			let c0 = self.inner[i] as f32 * a0;
			let c1 = self.outer[i] as f32 * a1;
			out[i] = ((c0 + (c1 - c0) * t) / alpha).round().clamp(0., 255.) as u8;
		}
		out[3] = (alpha * 255.).round() as u8;
		Rgba(out)
	}
}

#[derive(Debug, Clone)]
pub enum Paint {
	Solid(Rgba<u8>),
	Radial(RadialGradient),
}

impl Paint {
	pub fn solid(c: Rgb<u8>) -> Self {
		Paint::Solid(Rgba([c[0], c[1], c[2], 255]))
	}

	fn at(&self, p: V2) -> Rgba<u8> {
		match self {
			Paint::Solid(c) => *c,
			Paint::Radial(g) => g.color_at(p),
		}
	}
}

pub fn fill_circle(img: &mut RgbaImage, c: V2, radius: f64, paint: &Paint) {
	if !(radius > 0.) || !c[0].is_finite() || !c[1].is_finite() {
		return;
	}
	for y in span(c[1] - radius - 1., c[1] + radius + 1., img.height()) {
		for x in span(c[0] - radius - 1., c[0] + radius + 1., img.width()) {
			let p = center(x, y);
			let coverage = (radius + 0.5 - (p - c).norm()).clamp(0., 1.) as f32;
			if coverage > 0. {
				blend_pixel(img, x, y, paint.at(p), coverage);
			}
		}
	}
}
