use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{
	ElementState,
	Event,
	KeyboardInput,
	MouseButton,
	VirtualKeyCode as Vkc,
	WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::animator::Animator;
use crate::error::ViewerError;
use crate::options::Options;
use pendulum::controller_message::ControllerMessage;
use protocol::user_event::PointerEvent;
use protocol::view::View;
use protocol::V2;

pub struct Viewer {
	animator: Animator,
	window: Window,
	pixels: Pixels,
	// track the window scale factor unless one was given on the command line
	follow_scale: bool,
}

impl Viewer {
	pub fn new(options: &Options, event_loop: &EventLoop<()>) -> Result<Self, ViewerError> {
		options.validate()?;
		let view = View::default();
		let canvas = view.canvas_size();
		let window = WindowBuilder::new()
			.with_title("Double Pendulum")
			.with_inner_size(LogicalSize::new(canvas[0], canvas[1]))
			.with_min_inner_size(LogicalSize::new(canvas[0], canvas[1]))
			.build(event_loop)?;
		let scale = options.scale.unwrap_or_else(|| window.scale_factor());

		let mut animator = Animator::new(options.pworld(view))
			.with_theme(options.theme);
		animator.mount(scale);
		let [w, h] = animator.surface_size();
		let size = window.inner_size();
		let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
		let pixels = Pixels::new(w, h, surface_texture)?;

		Ok(Self {
			animator,
			window,
			pixels,
			follow_scale: options.scale.is_none(),
		})
	}

	// physical window position to canvas-local logical position
	fn window_to_canvas(&self, x: f64, y: f64) -> V2 {
		let (px, py) = match self.pixels.window_pos_to_pixel((x as f32, y as f32)) {
			Ok((px, py)) => (px as f64, py as f64),
			Err((px, py)) => (px as f64, py as f64),
		};
		self.animator.get_pworld().get_view().s2c(V2::new(px, py))
	}

	fn draw(&mut self) -> Result<(), pixels::Error> {
		let Some(surface) = self.animator.frame(Instant::now()) else {
			return Ok(());
		};
		let frame = self.pixels.get_frame();
		if frame.len() == surface.as_raw().len() {
			frame.copy_from_slice(surface.as_raw());
		} else {
			log::warn!(
				"surface {:?} does not match pixel buffer, skipping copy",
				surface.dimensions()
			);
		}
		self.pixels.render()
	}

	fn rescale(&mut self, scale: f64) {
		self.animator.rescale(scale);
		let [w, h] = self.animator.surface_size();
		self.pixels.resize_buffer(w, h);
	}

	pub fn run(mut self, event_loop: EventLoop<()>) -> ! {
		let mut button_down = false;
		let mut last_cursor = V2::new(0., 0.);
		event_loop.run(move |event, _, control_flow| match event {
			Event::WindowEvent { event: e, .. } => match e {
				WindowEvent::CloseRequested | WindowEvent::Destroyed => {
					self.animator.stop();
					*control_flow = ControlFlow::Exit;
				}
				WindowEvent::Resized(new_size) => {
					self.pixels.resize_surface(new_size.width, new_size.height);
				}
				WindowEvent::ScaleFactorChanged {
					scale_factor,
					new_inner_size,
				} => {
					if self.follow_scale {
						self.rescale(scale_factor);
					}
					self.pixels.resize_surface(new_inner_size.width, new_inner_size.height);
				}
				WindowEvent::CursorMoved {
					position: p,
					..
				} => {
					last_cursor = self.window_to_canvas(p.x, p.y);
					if button_down {
						self.animator.pointer(PointerEvent::Move(last_cursor));
					}
				}
				WindowEvent::CursorLeft { .. } => {
					button_down = false;
					self.animator.pointer(PointerEvent::Leave);
				}
				WindowEvent::MouseInput {
					button: MouseButton::Left,
					state: s,
					..
				} => {
					button_down = s == ElementState::Pressed;
					if button_down {
						self.animator.pointer(PointerEvent::Down(last_cursor));
					} else {
						self.animator.pointer(PointerEvent::Up);
					}
				}
				WindowEvent::KeyboardInput {
					input:
						KeyboardInput {
							state: ElementState::Pressed,
							virtual_keycode: Some(keycode),
							..
						},
					..
				} => {
					match keycode {
						Vkc::Space => {
							self.animator.handle_message(ControllerMessage::TogglePause)
						}
						Vkc::S => {
							self.animator.handle_message(ControllerMessage::FrameForward)
						}
						Vkc::R => self.animator.handle_message(ControllerMessage::Reset),
						Vkc::T => self.animator.toggle_theme(),
						Vkc::Q | Vkc::Escape => {
							self.animator.stop();
							*control_flow = ControlFlow::Exit;
						}
						_ => {}
					}
				}
				_ => {}
			},
			Event::RedrawRequested(_) => {
				if let Err(e) = self.draw() {
					log::error!("render failed: {}", e);
					self.animator.stop();
					*control_flow = ControlFlow::Exit;
				}
			}
			Event::MainEventsCleared => {
				if *control_flow == ControlFlow::Exit {
					return;
				}
				if self.animator.frame_pending() {
					self.window.request_redraw();
					*control_flow = ControlFlow::Poll;
				} else {
					*control_flow = ControlFlow::Wait;
				}
			}
			Event::LoopDestroyed => {
				self.animator.stop();
				self.animator.detach_surface();
			}
			_ => {}
		})
	}
}
