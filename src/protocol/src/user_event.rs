use crate::V2;

// pointer events from the host, positions are canvas-local logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
	Down(V2),
	Move(V2),
	Up,
	Leave,
}
