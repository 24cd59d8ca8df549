use crate::physical_model::PhysicalModel;
use crate::V2;

// Pivot-relative mass positions, y down. Hit testing, the trail and the
// renderer all go through this so they agree on where the masses are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joints {
	pub mass1: V2,
	pub mass2: V2,
}

pub fn forward(model: &PhysicalModel, theta1: f64, theta2: f64) -> Joints {
	let mass1 = V2::new(model.l1 * theta1.sin(), model.l1 * theta1.cos());
	let mass2 =
		mass1 + V2::new(model.l2 * theta2.sin(), model.l2 * theta2.cos());
	Joints { mass1, mass2 }
}
