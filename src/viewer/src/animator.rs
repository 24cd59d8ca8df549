use std::time::Instant;

use image::RgbaImage;

use pendulum::controller_message::ControllerMessage;
use pendulum::pworld::PWorld;
use pendulum::time_manager::TimeManager;
use protocol::theme::Theme;
use protocol::user_event::PointerEvent;
use swrender::renderer::Renderer;

// Owns everything one running animation needs. A frame is only drawn
// when one was scheduled, and every drawn frame schedules the next one,
// until `stop` cancels the pending request and detaches input.
pub struct Animator {
	pworld: PWorld,
	renderer: Renderer,
	time_manager: TimeManager,
	theme: Theme,
	surface: Option<RgbaImage>,
	frame_request: Option<u64>,
	next_request: u64,
	listening: bool,
}

impl Animator {
	pub fn new(pworld: PWorld) -> Self {
		Self {
			pworld,
			renderer: Renderer::default(),
			time_manager: TimeManager::default(),
			theme: Theme::default(),
			surface: None,
			frame_request: None,
			next_request: 0,
			listening: false,
		}
	}

	pub fn with_renderer(mut self, renderer: Renderer) -> Self {
		self.renderer = renderer;
		self
	}

	pub fn with_time_manager(mut self, time_manager: TimeManager) -> Self {
		self.time_manager = time_manager;
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	// attach a surface sized for `scale`, start listening, schedule a frame
	pub fn mount(&mut self, scale: f64) {
		self.rescale(scale);
		let [w, h] = self.pworld.get_view().surface_size();
		self.surface = Some(RgbaImage::new(w, h));
		self.listening = true;
		self.time_manager.reset();
		self.schedule();
		log::info!("mounted {}x{} surface at scale {}", w, h, scale);
	}

	// device pixel ratio changed, reallocate the surface if there is one
	pub fn rescale(&mut self, scale: f64) {
		let mut view = self.pworld.get_view().clone();
		view.set_scale(scale);
		let [w, h] = view.surface_size();
		self.pworld.set_view(view);
		if let Some(surface) = self.surface.as_mut() {
			if surface.dimensions() != (w, h) {
				*surface = RgbaImage::new(w, h);
			}
		}
	}

	pub fn detach_surface(&mut self) {
		self.surface = None;
	}

	pub fn surface_size(&self) -> [u32; 2] {
		self.pworld.get_view().surface_size()
	}

	fn schedule(&mut self) {
		self.next_request += 1;
		self.frame_request = Some(self.next_request);
	}

	pub fn frame_pending(&self) -> bool {
		self.frame_request.is_some()
	}

	pub fn is_listening(&self) -> bool {
		self.listening
	}

	// Runs one animation frame. Returns None without scheduling another
	// frame when nothing was pending or no surface is attached.
	pub fn frame(&mut self, now: Instant) -> Option<&RgbaImage> {
		self.frame_request.take()?;
		if self.surface.is_none() {
			log::debug!("no surface attached, dropping frame");
			return None;
		}
		let substeps = self.time_manager.take_substeps(now);
		self.pworld.run(substeps);
		self.schedule();

		let model = self.pworld.pr_model();
		let surface = self.surface.as_mut()?;
		self.renderer
			.render(&model, self.pworld.get_view(), self.theme, surface);
		Some(&*surface)
	}

	// returns false when input is no longer accepted
	pub fn pointer(&mut self, event: PointerEvent) -> bool {
		if !self.listening {
			return false;
		}
		self.pworld.pointer(event);
		true
	}

	pub fn handle_message(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::Pointer(event) => {
				self.pointer(event);
			}
			ControllerMessage::Reset => {
				self.pworld.handle_message(msg);
				self.time_manager.reset();
			}
			msg => self.pworld.handle_message(msg),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn toggle_theme(&mut self) {
		self.theme = self.theme.toggled();
		log::info!("theme: {}", self.theme);
	}

	pub fn get_theme(&self) -> Theme {
		self.theme
	}

	pub fn get_pworld(&self) -> &PWorld {
		&self.pworld
	}

	pub fn stop(&mut self) {
		if self.frame_request.take().is_some() || self.listening {
			log::info!("animation stopped after {} steps", self.pworld.get_steps());
		}
		self.listening = false;
	}
}
