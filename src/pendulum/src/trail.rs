use std::collections::VecDeque;

use crate::V2;

// Oldest first. Consecutive duplicates are kept.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
	capacity: usize,
	data: VecDeque<V2>,
}

impl TrailBuffer {
	pub fn new(capacity: usize) -> Self {
		Self {
			capacity,
			data: VecDeque::with_capacity(capacity + 1),
		}
	}

	pub fn push(&mut self, p: V2) {
		self.data.push_back(p);
		while self.data.len() > self.capacity {
			self.data.pop_front();
		}
	}

	pub fn clear(&mut self) {
		self.data.clear();
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn iter(&self) -> impl Iterator<Item = &V2> + '_ {
		self.data.iter()
	}

	// oldest first, the second slice is empty unless the buffer wrapped
	pub fn as_slices(&self) -> (&[V2], &[V2]) {
		self.data.as_slices()
	}

	pub fn newest(&self) -> Option<V2> {
		self.data.back().copied()
	}
}
