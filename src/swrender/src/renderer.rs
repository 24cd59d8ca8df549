use image::{Rgba, RgbaImage};

use crate::canvas::{clear, fill_circle, stroke_polyline, stroke_segment, Paint, RadialGradient};
use material::color::with_alpha;
use material::style::Style;
use material::theme_colors::ThemeColors;
use protocol::pr_model::{MassId, PrModel};
use protocol::theme::Theme;
use protocol::view::View;
use protocol::V2;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

// Paints a frame from a render snapshot. Holds no per-frame state: theme
// tones are looked up on every call.
#[derive(Default)]
pub struct Renderer {
	style: Style,
}

impl Renderer {
	pub fn new(style: Style) -> Self {
		Self { style }
	}

	pub fn get_style(&self) -> &Style {
		&self.style
	}

	pub fn render(&self, model: &PrModel, view: &View, theme: Theme, surface: &mut RgbaImage) {
		let colors = ThemeColors::of(theme);
		clear(surface, colors.background);
		self.draw_trail(surface, model, view);
		self.draw_rods(surface, model, view, &colors);
		self.draw_masses(surface, model, view, &colors);
		self.draw_anchor(surface, view, &colors);
	}

	// older segments are thinner and more transparent
	fn draw_trail(&self, surface: &mut RgbaImage, model: &PrModel, view: &View) {
		let len = model.trail_len() as f64;
		let mut points = model.trail_points().map(|p| view.w2s(p));
		let Some(mut prev) = points.next() else {
			return;
		};
		for (i, p) in points.enumerate() {
			let progress = (i + 1) as f64 / len;
			let color = self.style.palette.sample(progress as f32);
			let width = view.l2s(self.style.trail_width * (0.3 + progress * 0.7));
			stroke_segment(surface, prev, p, width, with_alpha(color, progress as f32));
			prev = p;
		}
	}

	fn draw_rods(&self, surface: &mut RgbaImage, model: &PrModel, view: &View, colors: &ThemeColors) {
		let path = [
			view.w2s(V2::zeros()),
			view.w2s(model.mass1),
			view.w2s(model.mass2),
		];
		let width = self.style.line_width;
		stroke_polyline(
			surface,
			&path,
			view.l2s(width + self.style.glow_line_extra),
			colors.glow,
		);
		stroke_polyline(surface, &path, view.l2s(width), with_alpha(colors.rod, 1.));
	}

	fn draw_glow(&self, surface: &mut RgbaImage, c: V2, view: &View, colors: &ThemeColors) {
		let r = view.l2s(self.style.glow_size);
		let glow = RadialGradient::centered(c, r, colors.glow, TRANSPARENT);
		fill_circle(surface, c, r, &Paint::Radial(glow));
	}

	fn draw_masses(&self, surface: &mut RgbaImage, model: &PrModel, view: &View, colors: &ThemeColors) {
		let r = view.l2s(model.mass_radius);
		let inner_r = view.l2s(self.style.inner_mass_radius);
		for (id, pos) in [(MassId::Mass1, model.mass1), (MassId::Mass2, model.mass2)] {
			let c = view.w2s(pos);
			self.draw_glow(surface, c, view, colors);
			// lit from the upper left
			let body = RadialGradient::centered(
				c,
				r,
				with_alpha(colors.mass_inner, 1.),
				with_alpha(colors.mass_outer, 1.),
			)
			.with_focal(c - V2::new(r / 3., r / 3.));
			fill_circle(surface, c, r, &Paint::Radial(body));
			let highlight = if model.is_selected(id) {
				colors.selected
			} else {
				colors.highlight
			};
			fill_circle(surface, c, inner_r, &Paint::solid(highlight));
		}
	}

	fn draw_anchor(&self, surface: &mut RgbaImage, view: &View, colors: &ThemeColors) {
		let c = view.w2s(V2::zeros());
		self.draw_glow(surface, c, view, colors);
		fill_circle(surface, c, view.l2s(self.style.anchor_radius), &Paint::solid(colors.rod));
		fill_circle(
			surface,
			c,
			view.l2s(self.style.anchor_inner_radius),
			&Paint::solid(colors.anchor_inner),
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn model<'a>() -> PrModel<'a> {
		PrModel {
			mass1: V2::new(150., 0.),
			mass2: V2::new(300., 0.),
			mass_radius: 15.,
			selected: None,
			trail: [&[], &[]],
		}
	}

	fn surface(view: &View) -> RgbaImage {
		let [w, h] = view.surface_size();
		RgbaImage::new(w, h)
	}

	fn rgba(c: image::Rgb<u8>) -> Rgba<u8> {
		Rgba([c[0], c[1], c[2], 255])
	}

	fn pixel_at(img: &RgbaImage, view: &View, w: V2) -> Rgba<u8> {
		let s = view.w2s(w);
		*img.get_pixel(s[0] as u32, s[1] as u32)
	}

	#[test]
	fn dark_frame() {
		let view = View::default();
		let mut img = surface(&view);
		let colors = ThemeColors::of(Theme::Dark);
		Renderer::default().render(&model(), &view, Theme::Dark, &mut img);
		assert_eq!(*img.get_pixel(0, 0), rgba(colors.background));
		assert_eq!(*img.get_pixel(799, 599), rgba(colors.background));
		assert_eq!(pixel_at(&img, &view, V2::zeros()), rgba(colors.anchor_inner));
		assert_eq!(pixel_at(&img, &view, model().mass1), rgba(colors.highlight));
		assert_eq!(pixel_at(&img, &view, model().mass2), rgba(colors.highlight));
		// halfway along rod 1
		assert_eq!(pixel_at(&img, &view, V2::new(75., 0.)), rgba(colors.rod));
	}

	#[test]
	fn selected_mass_is_highlighted() {
		let view = View::default();
		let mut img = surface(&view);
		let mut m = model();
		m.selected = Some(MassId::Mass2);
		Renderer::default().render(&m, &view, Theme::Dark, &mut img);
		let colors = ThemeColors::of(Theme::Dark);
		assert_eq!(pixel_at(&img, &view, m.mass1), rgba(colors.highlight));
		assert_eq!(pixel_at(&img, &view, m.mass2), rgba(colors.selected));
	}

	#[test]
	fn theme_switch_reuses_renderer() {
		let view = View::default();
		let renderer = Renderer::default();
		let mut img = surface(&view);
		renderer.render(&model(), &view, Theme::Dark, &mut img);
		renderer.render(&model(), &view, Theme::Light, &mut img);
		let light = ThemeColors::of(Theme::Light);
		assert_eq!(*img.get_pixel(0, 0), rgba(light.background));
		assert_eq!(pixel_at(&img, &view, model().mass1), rgba(light.highlight));
		assert_eq!(pixel_at(&img, &view, V2::new(75., 0.)), rgba(light.rod));
	}

	#[test]
	fn trail_is_drawn_newest_opaque() {
		let view = View::default();
		let mut img = surface(&view);
		let points = [V2::new(-300., 250.), V2::new(-200., 250.)];
		let mut m = model();
		m.trail = [&points[..], &[]];
		Renderer::default().render(&m, &view, Theme::Dark, &mut img);
		let background = rgba(ThemeColors::of(Theme::Dark).background);
		let p = pixel_at(&img, &view, V2::new(-250., 250.));
		assert_ne!(p, background);
		// single segment at progress 1/2 is the middle of the palette, green
		assert!(p[1] > background[1]);
		assert!(p[0] < background[0]);
	}

	fn distance(a: Rgba<u8>, b: Rgba<u8>) -> u32 {
		(0..3).map(|i| (a[i] as i32 - b[i] as i32).unsigned_abs()).sum()
	}

	#[test]
	fn trail_fades_from_red_to_violet_under_rods() {
		let view = View::default();
		let mut img = surface(&view);
		// 100 points along y = 250, then 50 points crossing rod 1 at x = 75
		let mut points: Vec<V2> = (0..100)
			.map(|i| V2::new(-300. + i as f64 * 600. / 99., 250.))
			.collect();
		points.extend((0..50).map(|j| V2::new(75., -60. + j as f64 * 120. / 49.)));
		// wrapped like a full ring buffer
		let (head, tail) = points.split_at(60);
		let mut m = model();
		m.trail = [head, tail];
		Renderer::default().render(&m, &view, Theme::Dark, &mut img);

		let colors = ThemeColors::of(Theme::Dark);
		let background = rgba(colors.background);
		let old = pixel_at(&img, &view, V2::new(-240., 250.));
		let new = pixel_at(&img, &view, V2::new(75., 55.));
		assert_ne!(old, background);
		assert!(old[0] > old[2], "oldest end should be red, got {:?}", old);
		assert!(new[2] > new[0] && new[2] > new[1], "newest end should be violet, got {:?}", new);
		// older segments are more transparent
		assert!(distance(old, background) < distance(new, background));
		// older segments are thinner: one pixel off the line only the newest end reaches
		assert_eq!(pixel_at(&img, &view, V2::new(-240., 251.)), background);
		assert_ne!(pixel_at(&img, &view, V2::new(76., 55.)), background);
		// rods are painted over the trail
		assert_eq!(pixel_at(&img, &view, V2::new(75., 0.)), rgba(colors.rod));
	}

	#[test]
	fn scaled_surface() {
		let view = View::default().with_scale(2.);
		let mut img = surface(&view);
		assert_eq!(img.dimensions(), (1600, 1200));
		let mut m = model();
		m.selected = Some(MassId::Mass1);
		Renderer::default().render(&m, &view, Theme::Light, &mut img);
		let colors = ThemeColors::of(Theme::Light);
		assert_eq!(*img.get_pixel(1100, 400), rgba(colors.selected));
	}
}
