use crate::integrator::normalize_angle;
use crate::kinematics::forward;
use crate::physical_model::PhysicalModel;
use crate::state::PendulumState;
use crate::V2;
use protocol::pr_model::MassId;
use protocol::view::View;

// Mass under a canvas-local pointer, nearest first.
pub fn select_mass(
	model: &PhysicalModel,
	view: &View,
	state: &PendulumState,
	pointer: V2,
) -> Option<MassId> {
	let joints = forward(model, state.theta1, state.theta2);
	let p = view.c2w(pointer);
	[
		(MassId::Mass1, (p - joints.mass1).magnitude()),
		(MassId::Mass2, (p - joints.mass2).magnitude()),
	]
	.into_iter()
	.filter(|(_, dist)| *dist < model.mass_radius)
	.min_by(|a, b| a.1.total_cmp(&b.1))
	.map(|(id, _)| id)
}

// Pull the selected rod toward the pointer by adding to its omega.
// Runs before the integrator on every sub-step of a drag.
pub fn apply_drag_force(
	model: &PhysicalModel,
	view: &View,
	state: &mut PendulumState,
) {
	if !state.pointer_down {
		return;
	}
	let Some(id) = state.selected else { return };
	let p = view.c2w(state.pointer);
	let joints = forward(model, state.theta1, state.theta2);
	let (origin, theta) = match id {
		MassId::Mass1 => (V2::zeros(), state.theta1),
		MassId::Mass2 => (joints.mass1, state.theta2),
	};
	let d = p - origin;
	let target = d[0].atan2(d[1]);
	let diff = normalize_angle(target - theta);
	let force = (diff * model.drag_force_multiplier)
		.clamp(-model.max_drag_force, model.max_drag_force);
	match id {
		MassId::Mass1 => state.omega1 += force,
		MassId::Mass2 => state.omega2 += force,
	}
}
