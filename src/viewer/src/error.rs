#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
	#[error("failed to create window: {0}")]
	Window(#[from] winit::error::OsError),
	#[error("pixel surface: {0}")]
	Surface(#[from] pixels::Error),
	#[error("invalid option: {0}")]
	InvalidOption(String),
}
