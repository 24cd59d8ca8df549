use std::f64::consts::{PI, TAU};

use crate::physical_model::PhysicalModel;
use crate::state::PendulumState;

// Wrap into (-PI, PI]. Both corrections are exact in floating point
// (Sterbenz), so the bound holds without tolerance. NaN passes through.
pub fn normalize_angle(angle: f64) -> f64 {
	let a = angle % TAU;
	if a > PI {
		a - TAU
	} else if a <= -PI {
		a + TAU
	} else {
		a
	}
}

// (theta1', theta2', omega1', omega2') of the coupled double pendulum.
// den1 vanishes when cos^2(dt) = (m1 + m2) / m2, which is not guarded.
pub fn derivatives(
	model: &PhysicalModel,
	t1: f64,
	t2: f64,
	w1: f64,
	w2: f64,
) -> [f64; 4] {
	let PhysicalModel {
		gravity: g,
		l1,
		l2,
		m1,
		m2,
		..
	} = *model;
	let delta = t2 - t1;
	let (sin_d, cos_d) = delta.sin_cos();
	let den1 = (m1 + m2) * l1 - m2 * l1 * cos_d * cos_d;
	let den2 = (l2 / l1) * den1;

	let dw1 = (m2 * l1 * w1 * w1 * sin_d * cos_d
		+ m2 * g * t2.sin() * cos_d
		+ m2 * l2 * w2 * w2 * sin_d
		- (m1 + m2) * g * t1.sin())
		/ den1;
	let dw2 = (-m2 * l2 * w2 * w2 * sin_d * cos_d
		+ (m1 + m2) * g * t1.sin() * cos_d
		- (m1 + m2) * l1 * w1 * w1 * sin_d
		- (m1 + m2) * g * t2.sin())
		/ den2;
	[w1, w2, dw1, dw2]
}

// One classical RK4 step of `model.time_step`, in place.
// Omegas are damped then clamped, angles are normalized last.
pub fn rk4_step(model: &PhysicalModel, state: &mut PendulumState) {
	let h = model.time_step;
	let y = [state.theta1, state.theta2, state.omega1, state.omega2];
	let f = |y: [f64; 4]| derivatives(model, y[0], y[1], y[2], y[3]);
	let offset = |k: [f64; 4], s: f64| {
		let mut out = y;
		for (o, d) in out.iter_mut().zip(k.iter()) {
			*o += d * s;
		}
		out
	};

	let k1 = f(y);
	let k2 = f(offset(k1, h / 2.));
	let k3 = f(offset(k2, h / 2.));
	let k4 = f(offset(k3, h));
	let weighted =
		|i: usize| (k1[i] + 2. * k2[i] + 2. * k3[i] + k4[i]) * h / 6.;

	let vmax = model.max_angular_velocity;
	let omega1 = (state.omega1 + weighted(2)) * model.damping;
	let omega2 = (state.omega2 + weighted(3)) * model.damping;
	state.omega1 = omega1.clamp(-vmax, vmax);
	state.omega2 = omega2.clamp(-vmax, vmax);
	state.theta1 = normalize_angle(state.theta1 + weighted(0));
	state.theta2 = normalize_angle(state.theta2 + weighted(1));
}

// Kinetic plus potential energy with the pivot as potential zero (y down).
pub fn total_energy(model: &PhysicalModel, state: &PendulumState) -> f64 {
	let PhysicalModel {
		gravity: g,
		l1,
		l2,
		m1,
		m2,
		..
	} = *model;
	let (t1, t2, w1, w2) =
		(state.theta1, state.theta2, state.omega1, state.omega2);
	let v2_sq = (l1 * w1).powi(2)
		+ (l2 * w2).powi(2)
		+ 2. * l1 * l2 * w1 * w2 * (t1 - t2).cos();
	let kinetic = 0.5 * m1 * (l1 * w1).powi(2) + 0.5 * m2 * v2_sq;
	let y1 = l1 * t1.cos();
	let y2 = y1 + l2 * t2.cos();
	let potential = -(m1 * g * y1 + m2 * g * y2);
	kinetic + potential
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use std::f64::consts::FRAC_PI_2;

	#[test]
	fn normalize_bounds() {
		assert_eq!(normalize_angle(-PI), PI);
		assert_eq!(normalize_angle(PI), PI);
		assert_eq!(normalize_angle(0.), 0.);
		assert_relative_eq!(normalize_angle(3. * PI / 2.), -PI / 2.);
		assert_relative_eq!(normalize_angle(-3. * PI / 2.), PI / 2.);
		assert_relative_eq!(normalize_angle(7. * TAU + 0.25), 0.25, epsilon = 1e-12);
		assert!(normalize_angle(f64::NAN).is_nan());
	}

	#[test]
	fn rest_is_equilibrium() {
		let model = PhysicalModel::default();
		assert_eq!(derivatives(&model, 0., 0., 0., 0.), [0.; 4]);
		let mut state = PendulumState::at_rest(0., 0.);
		for _ in 0..1000 {
			rk4_step(&model, &mut state);
		}
		assert_eq!(state, PendulumState::at_rest(0., 0.));
	}

	#[test]
	fn horizontal_start_accelerates_rod1_down() {
		let model = PhysicalModel::default();
		let d = derivatives(&model, FRAC_PI_2, FRAC_PI_2, 0., 0.);
		// den1 = L1, numerator = -g
		assert_relative_eq!(d[2], -model.gravity / model.l1);
		assert_relative_eq!(d[3], 0.);
	}

	#[test]
	fn velocity_is_clamped() {
		let model = PhysicalModel::default();
		let mut state = PendulumState::at_rest(0.3, -0.2).with_velocity(40., -40.);
		rk4_step(&model, &mut state);
		assert!(state.omega1.abs() <= model.max_angular_velocity);
		assert!(state.omega2.abs() <= model.max_angular_velocity);
	}

	#[test]
	fn damping_bleeds_energy() {
		let model = PhysicalModel::default().with_damping(0.99);
		let mut state = PendulumState::at_rest(0.4, 0.4);
		let e0 = total_energy(&model, &state);
		for _ in 0..500 {
			rk4_step(&model, &mut state);
		}
		assert!(total_energy(&model, &state) < e0);
	}

	#[test]
	fn undamped_conserves_energy() {
		let model = PhysicalModel::default().with_damping(1.0);
		let mut state = PendulumState::at_rest(0.2, 0.1);
		let e0 = total_energy(&model, &state);
		for _ in 0..200 {
			rk4_step(&model, &mut state);
		}
		assert_relative_eq!(total_energy(&model, &state), e0, max_relative = 1e-3);
	}
}
