use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ThemeParseError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
	Light,
	#[default]
	Dark,
}

impl Theme {
	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}
}

impl FromStr for Theme {
	type Err = ThemeParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			_ => Err(ThemeParseError(s.to_string())),
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Theme::Light => write!(f, "light"),
			Theme::Dark => write!(f, "dark"),
		}
	}
}
