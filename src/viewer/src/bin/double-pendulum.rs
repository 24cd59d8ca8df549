use clap::Parser;
use winit::event_loop::EventLoop;

use viewer::options::Options;
use viewer::viewer::Viewer;
use viewer::ViewerError;

fn main() -> Result<(), ViewerError> {
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();
	let options = Options::parse();
	log::debug!("{:?}", options);
	let event_loop = EventLoop::new();
	let viewer = Viewer::new(&options, &event_loop)?;
	viewer.run(event_loop)
}
