// pr_model: pendulum model for rendering

use crate::V2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassId {
	Mass1,
	Mass2,
}

// all positions are pivot-relative
#[derive(Debug, Clone)]
pub struct PrModel<'a> {
	pub mass1: V2,
	pub mass2: V2,
	pub mass_radius: f64,
	pub selected: Option<MassId>,
	// oldest first, split in two where the ring buffer wraps
	pub trail: [&'a [V2]; 2],
}

impl PrModel<'_> {
	pub fn is_selected(&self, id: MassId) -> bool {
		self.selected == Some(id)
	}

	pub fn trail_len(&self) -> usize {
		self.trail[0].len() + self.trail[1].len()
	}

	pub fn trail_points(&self) -> impl Iterator<Item = V2> + '_ {
		self.trail.iter().flat_map(|s| s.iter().copied())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn trail_halves_are_joined() {
		let head = [V2::new(1., 0.), V2::new(2., 0.)];
		let tail = [V2::new(3., 0.)];
		let model = PrModel {
			mass1: V2::zeros(),
			mass2: V2::zeros(),
			mass_radius: 15.,
			selected: Some(MassId::Mass1),
			trail: [&head[..], &tail[..]],
		};
		assert_eq!(model.trail_len(), 3);
		let xs: Vec<f64> = model.trail_points().map(|p| p[0]).collect();
		assert_eq!(xs, vec![1., 2., 3.]);
		assert!(model.is_selected(MassId::Mass1));
		assert!(!model.is_selected(MassId::Mass2));
	}
}
