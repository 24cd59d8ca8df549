use image::{Rgb, Rgba};

use protocol::theme::Theme;

// Tones that depend on the active theme. Resolved per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeColors {
	pub background: Rgb<u8>,
	pub rod: Rgb<u8>,
	pub glow: Rgba<u8>,
	pub mass_inner: Rgb<u8>,
	pub mass_outer: Rgb<u8>,
	pub highlight: Rgb<u8>,
	pub selected: Rgb<u8>,
	pub anchor_inner: Rgb<u8>,
}

impl ThemeColors {
	pub fn of(theme: Theme) -> Self {
		match theme {
			Theme::Dark => Self {
				background: Rgb([10, 10, 10]),
				rod: Rgb([255, 255, 255]),
				glow: Rgba([255, 255, 255, 51]),
				mass_inner: Rgb([0xff, 0xff, 0xff]),
				mass_outer: Rgb([0x66, 0x66, 0x66]),
				highlight: Rgb([0x33, 0x33, 0x33]),
				selected: Rgb([0xff, 0x44, 0x44]),
				anchor_inner: Rgb([0x33, 0x33, 0x33]),
			},
			Theme::Light => Self {
				background: Rgb([255, 255, 255]),
				rod: Rgb([0, 0, 0]),
				glow: Rgba([0, 0, 0, 51]),
				mass_inner: Rgb([0x00, 0x00, 0x00]),
				mass_outer: Rgb([0x99, 0x99, 0x99]),
				highlight: Rgb([0xff, 0xff, 0xff]),
				selected: Rgb([0xff, 0x44, 0x44]),
				anchor_inner: Rgb([0xff, 0xff, 0xff]),
			},
		}
	}
}
