use image::{Rgb, Rgba};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
	#[error("color {0:?} is not #rgb or #rrggbb")]
	BadHex(String),
	#[error("palette needs at least one color")]
	EmptyPalette,
}

pub fn parse_hex(s: &str) -> Result<Rgb<u8>, ColorError> {
	let bad = || ColorError::BadHex(s.to_string());
	let digits = s.strip_prefix('#').ok_or_else(bad)?;
	if !digits.is_ascii() {
		return Err(bad());
	}
	let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| bad());
	match digits.len() {
		6 => Ok(Rgb([
			channel(&digits[0..2])?,
			channel(&digits[2..4])?,
			channel(&digits[4..6])?,
		])),
		3 => {
			let mut rgb = [0u8; 3];
			for (i, c) in rgb.iter_mut().enumerate() {
				*c = channel(&digits[i..i + 1])? * 17;
			}
			Ok(Rgb(rgb))
		}
		_ => Err(bad()),
	}
}

// Per-channel lerp, rounded. progress is not clamped.
pub fn interpolate_colors(a: Rgb<u8>, b: Rgb<u8>, progress: f32) -> Rgb<u8> {
	let mut out = [0u8; 3];
	for i in 0..3 {
		let (ca, cb) = (a[i] as f32, b[i] as f32);
		out[i] = (ca + (cb - ca) * progress).round().clamp(0., 255.) as u8;
	}
	Rgb(out)
}

pub fn with_alpha(c: Rgb<u8>, alpha: f32) -> Rgba<u8> {
	let a = (alpha.clamp(0., 1.) * 255.).round() as u8;
	Rgba([c[0], c[1], c[2], a])
}
