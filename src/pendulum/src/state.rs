use std::f64::consts::FRAC_PI_2;

use crate::V2;
use protocol::pr_model::MassId;

#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
	pub theta1: f64,
	pub theta2: f64,
	pub omega1: f64,
	pub omega2: f64,

	pub pointer_down: bool,
	pub selected: Option<MassId>,
	// canvas-local, only meaningful while pointer_down
	pub pointer: V2,
}

impl Default for PendulumState {
	fn default() -> Self {
		Self::at_rest(FRAC_PI_2, FRAC_PI_2)
	}
}

impl PendulumState {
	pub fn at_rest(theta1: f64, theta2: f64) -> Self {
		Self {
			theta1,
			theta2,
			omega1: 0.,
			omega2: 0.,
			pointer_down: false,
			selected: None,
			pointer: V2::zeros(),
		}
	}

	pub fn with_velocity(mut self, omega1: f64, omega2: f64) -> Self {
		self.omega1 = omega1;
		self.omega2 = omega2;
		self
	}

	pub fn is_finite(&self) -> bool {
		self.theta1.is_finite()
			&& self.theta2.is_finite()
			&& self.omega1.is_finite()
			&& self.omega2.is_finite()
	}

	// back to the initial pose, a drag in progress is kept
	pub fn restart(&mut self) {
		let rest = Self::default();
		self.theta1 = rest.theta1;
		self.theta2 = rest.theta2;
		self.omega1 = rest.omega1;
		self.omega2 = rest.omega2;
	}

	pub fn release(&mut self) {
		self.pointer_down = false;
		self.selected = None;
	}
}
