use clap::Parser;

use crate::error::ViewerError;
use pendulum::physical_model::PhysicalModel;
use pendulum::pworld::PWorld;
use protocol::theme::Theme;
use protocol::view::View;

#[derive(Debug, Parser)]
#[command(name = "double-pendulum", about = "Interactive double pendulum")]
pub struct Options {
	/// Color theme, light or dark
	#[arg(long, default_value = "dark")]
	pub theme: Theme,

	/// Device pixel ratio of the canvas, defaults to the window scale factor
	#[arg(long)]
	pub scale: Option<f64>,

	/// Start paused (space resumes, s steps one frame)
	#[arg(long)]
	pub paused: bool,

	/// Number of trail points kept behind the second mass
	#[arg(long)]
	pub trail_length: Option<usize>,

	/// Restart from the initial state when the simulation degenerates
	#[arg(long)]
	pub reset_on_degenerate: bool,
}

impl Options {
	pub fn validate(&self) -> Result<(), ViewerError> {
		if let Some(scale) = self.scale {
			if !(scale.is_finite() && scale > 0.) {
				return Err(ViewerError::InvalidOption(format!(
					"scale must be positive, got {}",
					scale
				)));
			}
		}
		Ok(())
	}

	pub fn physical_model(&self) -> PhysicalModel {
		let mut model = PhysicalModel::default();
		if let Some(trail_length) = self.trail_length {
			model = model.with_trail_length(trail_length);
		}
		if self.reset_on_degenerate {
			model = model.with_reset_on_degenerate();
		}
		model
	}

	pub fn pworld(&self, view: View) -> PWorld {
		let pworld = PWorld::default()
			.with_model(self.physical_model())
			.with_view(view);
		if self.paused {
			pworld.with_paused()
		} else {
			pworld
		}
	}
}
