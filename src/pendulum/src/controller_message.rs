use protocol::user_event::PointerEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Reset,
	Pointer(PointerEvent),
}
