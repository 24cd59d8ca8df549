use std::time::{Duration, Instant};

// Turns wall-clock time between frames into a number of fixed sub-steps,
// one per `tick`, so physics runs at the same rate whatever the frame rate.
pub struct TimeManager {
	tick: Duration,
	max_substeps: usize,
	last_frame: Option<Instant>,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self {
			tick: Duration::from_millis(16),
			max_substeps: 32,
			last_frame: None,
		}
	}
}

impl TimeManager {
	pub fn with_tick(mut self, tick: Duration) -> Self {
		self.tick = tick;
		self
	}

	pub fn with_max_substeps(mut self, max_substeps: usize) -> Self {
		self.max_substeps = max_substeps;
		self
	}

	pub fn reset(&mut self) {
		self.last_frame = None;
	}

	pub fn substeps_for(&self, elapsed: Duration) -> usize {
		if self.tick.is_zero() {
			return self.max_substeps;
		}
		let n = (elapsed.as_secs_f64() / self.tick.as_secs_f64()).ceil();
		let n = n as usize;
		if n > self.max_substeps {
			log::debug!(
				"{:?} since last frame, capping {} substeps at {}",
				elapsed,
				n,
				self.max_substeps
			);
			return self.max_substeps;
		}
		n
	}

	// the first frame after a reset runs a single sub-step
	pub fn take_substeps(&mut self, now: Instant) -> usize {
		let last = self.last_frame.replace(now);
		match last {
			None => 1,
			Some(last) => {
				self.substeps_for(now.saturating_duration_since(last))
			}
		}
	}
}
