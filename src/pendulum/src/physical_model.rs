// Tuning of the simulated pendulum. Lengths and radii are logical pixels.
#[derive(Debug, Clone)]
pub struct PhysicalModel {
	pub gravity: f64,
	pub l1: f64,
	pub l2: f64,
	pub m1: f64,
	pub m2: f64,
	pub damping: f64,
	pub time_step: f64,
	pub max_angular_velocity: f64,
	pub drag_force_multiplier: f64,
	pub max_drag_force: f64,
	pub mass_radius: f64,
	pub trail_length: usize,
	pub reset_on_degenerate: bool,
}

impl Default for PhysicalModel {
	fn default() -> Self {
		Self {
			// scaled for visual speed
			gravity: 9.81 * 2.,
			l1: 150.,
			l2: 150.,
			m1: 1.,
			m2: 1.,
			damping: 0.9998,
			time_step: 0.016 * 1.5,
			max_angular_velocity: 5.,
			drag_force_multiplier: 0.5,
			max_drag_force: 5.,
			mass_radius: 15.,
			trail_length: 2000,
			reset_on_degenerate: false,
		}
	}
}

impl PhysicalModel {
	pub fn with_gravity(mut self, gravity: f64) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_lengths(mut self, l1: f64, l2: f64) -> Self {
		self.l1 = l1;
		self.l2 = l2;
		self
	}

	pub fn with_masses(mut self, m1: f64, m2: f64) -> Self {
		self.m1 = m1;
		self.m2 = m2;
		self
	}

	pub fn with_damping(mut self, damping: f64) -> Self {
		self.damping = damping;
		self
	}

	pub fn with_time_step(mut self, time_step: f64) -> Self {
		self.time_step = time_step;
		self
	}

	pub fn with_trail_length(mut self, trail_length: usize) -> Self {
		self.trail_length = trail_length;
		self
	}

	pub fn with_reset_on_degenerate(mut self) -> Self {
		self.reset_on_degenerate = true;
		self
	}
}
