use crate::controller_message::ControllerMessage;
use crate::integrator::rk4_step;
use crate::interaction::{apply_drag_force, select_mass};
use crate::kinematics::forward;
use crate::physical_model::PhysicalModel;
use crate::state::PendulumState;
use crate::trail::TrailBuffer;
use protocol::pr_model::PrModel;
use protocol::user_event::PointerEvent;
use protocol::view::View;

pub struct PWorld {
	model: PhysicalModel,
	view: View,
	state: PendulumState,
	trail: TrailBuffer,
	steps: u64,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,
}

impl Default for PWorld {
	fn default() -> Self {
		let model = PhysicalModel::default();
		let trail = TrailBuffer::new(model.trail_length);
		Self {
			model,
			view: View::default(),
			state: PendulumState::default(),
			trail,
			steps: 0,
			forward_frames: -1,
		}
	}
}

impl PWorld {
	pub fn with_model(mut self, model: PhysicalModel) -> Self {
		self.trail = TrailBuffer::new(model.trail_length);
		self.model = model;
		self
	}

	pub fn with_view(mut self, view: View) -> Self {
		self.view = view;
		self
	}

	pub fn with_state(mut self, state: PendulumState) -> Self {
		self.state = state;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 0;
		self
	}

	pub fn set_view(&mut self, view: View) {
		self.view = view;
	}

	pub fn get_view(&self) -> &View {
		&self.view
	}

	pub fn get_model(&self) -> &PhysicalModel {
		&self.model
	}

	pub fn get_state(&self) -> &PendulumState {
		&self.state
	}

	pub fn get_trail(&self) -> &TrailBuffer {
		&self.trail
	}

	pub fn get_steps(&self) -> u64 {
		self.steps
	}

	pub fn is_paused(&self) -> bool {
		self.forward_frames == 0
	}

	pub fn reset(&mut self) {
		self.state.restart();
		self.trail.clear();
		self.steps = 0;
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::TogglePause => {
				if self.forward_frames == 0 {
					self.forward_frames = -1;
				} else {
					self.forward_frames = 0;
				}
				log::info!("paused: {}", self.is_paused());
			}
			ControllerMessage::FrameForward => {
				if self.forward_frames == 0 {
					self.forward_frames += 1;
				}
			}
			ControllerMessage::Reset => {
				log::info!("reset after {} steps", self.steps);
				self.reset();
			}
			ControllerMessage::Pointer(event) => self.pointer(event),
		}
	}

	pub fn pointer(&mut self, event: PointerEvent) {
		match event {
			PointerEvent::Down(c) => {
				self.state.pointer_down = true;
				self.state.pointer = c;
				self.state.selected =
					select_mass(&self.model, &self.view, &self.state, c);
				log::debug!("pointer down at {:?}: {:?}", c, self.state.selected);
			}
			PointerEvent::Move(c) => {
				if self.state.pointer_down {
					self.state.pointer = c;
				}
			}
			PointerEvent::Up | PointerEvent::Leave => self.state.release(),
		}
	}

	// drag, integrate, record
	pub fn step(&mut self) {
		apply_drag_force(&self.model, &self.view, &mut self.state);
		rk4_step(&self.model, &mut self.state);
		self.steps += 1;
		if self.model.reset_on_degenerate && !self.state.is_finite() {
			log::warn!(
				"non-finite state after {} steps, resetting: {:?}",
				self.steps,
				self.state
			);
			self.reset();
			return;
		}
		let joints = forward(&self.model, self.state.theta1, self.state.theta2);
		self.trail.push(joints.mass2);
	}

	// returns the number of sub-steps actually run
	pub fn run(&mut self, substeps: usize) -> usize {
		let substeps = match self.forward_frames {
			0 => return 0,
			n if n > 0 => {
				self.forward_frames -= 1;
				substeps.max(1)
			}
			_ => substeps,
		};
		for _ in 0..substeps {
			self.step();
		}
		substeps
	}

	pub fn pr_model(&self) -> PrModel<'_> {
		let joints = forward(&self.model, self.state.theta1, self.state.theta2);
		let (head, tail) = self.trail.as_slices();
		PrModel {
			mass1: joints.mass1,
			mass2: joints.mass2,
			mass_radius: self.model.mass_radius,
			selected: self.state.selected,
			trail: [head, tail],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::V2;
	use protocol::pr_model::MassId;
	use std::f64::consts::FRAC_PI_2;

	#[test]
	fn trail_follows_mass2() {
		let mut pworld = PWorld::default();
		pworld.run(3);
		assert_eq!(pworld.get_trail().len(), 3);
		let model = pworld.pr_model();
		assert_eq!(model.trail_points().last(), Some(model.mass2));
	}

	#[test]
	fn snapshot_borrows_wrapped_trail() {
		let model = PhysicalModel::default().with_trail_length(5);
		let mut pworld = PWorld::default().with_model(model);
		pworld.run(8);
		let snapshot = pworld.pr_model();
		assert_eq!(snapshot.trail_len(), 5);
		let expected: Vec<V2> = pworld.get_trail().iter().copied().collect();
		let points: Vec<V2> = snapshot.trail_points().collect();
		assert_eq!(points, expected);
		assert_eq!(points.last().copied(), Some(snapshot.mass2));
	}

	#[test]
	fn pause_and_frame_forward() {
		let mut pworld = PWorld::default().with_paused();
		assert_eq!(pworld.run(4), 0);
		pworld.handle_message(ControllerMessage::FrameForward);
		assert_eq!(pworld.run(0), 1);
		assert_eq!(pworld.run(4), 0);
		pworld.handle_message(ControllerMessage::TogglePause);
		assert_eq!(pworld.run(4), 4);
		assert_eq!(pworld.get_steps(), 5);
	}

	#[test]
	fn press_drag_release() {
		let mut pworld = PWorld::default();
		let view = pworld.get_view().clone();
		let on_mass1 = view.w2c(pworld.pr_model().mass1);
		pworld.pointer(PointerEvent::Down(on_mass1));
		assert_eq!(pworld.get_state().selected, Some(MassId::Mass1));
		let below = view.w2c(V2::new(0., 150.));
		pworld.handle_message(ControllerMessage::Pointer(PointerEvent::Move(below)));
		assert_eq!(pworld.get_state().pointer, below);
		pworld.run(1);
		let omega1 = pworld.get_state().omega1;
		// drag plus gravity both pull toward the bottom
		assert!(omega1 < -0.5);
		pworld.pointer(PointerEvent::Leave);
		assert!(!pworld.get_state().pointer_down);
		assert_eq!(pworld.get_state().selected, None);
		assert_eq!(pworld.get_state().omega1, omega1);
	}

	#[test]
	fn move_without_press_is_ignored() {
		let mut pworld = PWorld::default();
		pworld.pointer(PointerEvent::Move(V2::new(10., 10.)));
		assert_eq!(pworld.get_state().pointer, V2::zeros());
	}

	#[test]
	fn miss_leaves_nothing_selected() {
		let mut pworld = PWorld::default();
		pworld.pointer(PointerEvent::Down(V2::new(5., 5.)));
		assert!(pworld.get_state().pointer_down);
		assert_eq!(pworld.get_state().selected, None);
		assert_eq!(pworld.pr_model().selected, None);
	}

	#[test]
	fn degenerate_state_resets_when_enabled() {
		let model = PhysicalModel::default().with_reset_on_degenerate();
		let mut pworld = PWorld::default()
			.with_model(model)
			.with_state(PendulumState::at_rest(f64::NAN, 0.));
		pworld.step();
		assert_eq!(pworld.get_state(), &PendulumState::default());
		assert!(pworld.get_trail().is_empty());
	}

	#[test]
	fn degenerate_reset_keeps_drag() {
		let model = PhysicalModel::default().with_reset_on_degenerate();
		let mut state = PendulumState::at_rest(f64::NAN, 0.);
		state.pointer_down = true;
		state.selected = Some(MassId::Mass2);
		state.pointer = V2::new(400., 500.);
		let mut pworld = PWorld::default().with_model(model).with_state(state);
		pworld.step();
		let state = pworld.get_state();
		assert!(state.is_finite());
		assert_eq!((state.theta1, state.theta2), (FRAC_PI_2, FRAC_PI_2));
		assert_eq!((state.omega1, state.omega2), (0., 0.));
		assert!(state.pointer_down);
		assert_eq!(state.selected, Some(MassId::Mass2));

		let next = V2::new(420., 480.);
		pworld.pointer(PointerEvent::Move(next));
		assert_eq!(pworld.get_state().pointer, next);
		pworld.run(1);
		assert!(pworld.get_state().is_finite());
		assert_eq!(pworld.get_trail().len(), 1);
	}

	#[test]
	fn reset_restarts_motion() {
		let mut pworld = PWorld::default();
		pworld.run(10);
		pworld.handle_message(ControllerMessage::Reset);
		assert_eq!(pworld.get_state(), &PendulumState::default());
		assert_eq!(pworld.get_steps(), 0);
		assert!(pworld.get_trail().is_empty());
	}

	#[test]
	fn degenerate_state_propagates_by_default() {
		let mut pworld = PWorld::default()
			.with_state(PendulumState::at_rest(f64::NAN, 0.));
		pworld.step();
		assert!(!pworld.get_state().is_finite());
	}
}
