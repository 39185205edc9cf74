use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use crate::camera::Camera;
use crate::core::{Clock, InputSession, Viewport};
use crate::error::Error;
use crate::renderer::Renderer;
use crate::scene::Scene;
use crate::types::CameraUniform;

const WINDOW_TITLE: &str = "camera-lab";

/// Interactive viewer: owns the camera, the input session and the frame clock
pub struct App {
    camera: Camera,
    input: InputSession,
    clock: Clock,
    scene: Scene,
    initial_size: Viewport,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    error: Option<Error>,
}

impl App {
    pub fn new(camera: Camera, initial_size: Viewport) -> Self {
        Self {
            camera,
            input: InputSession::new(),
            clock: Clock::new(),
            scene: Scene::demo(),
            initial_size,
            window: None,
            renderer: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let window = Arc::new(
            event_loop.create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.initial_size.width,
                        self.initial_size.height,
                    )),
            )?,
        );

        let renderer = pollster::block_on(Renderer::new(window.clone(), &self.scene))?;

        self.camera.set_viewport(renderer.viewport());
        self.window = Some(window);
        self.renderer = Some(renderer);
        self.grab_cursor(true);
        self.clock.reset();
        Ok(())
    }

    /// Hide and confine the cursor while a free-look camera has focus
    fn grab_cursor(&mut self, focused: bool) {
        let Some(window) = &self.window else {
            return;
        };
        let grab = focused && self.camera.wants_cursor_grab();
        let result = if grab {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        } else {
            window.set_cursor_grab(CursorGrabMode::None)
        };
        if let Err(e) = result {
            log::warn!("Cursor grab unavailable: {}", e);
        }
        window.set_cursor_visible(!grab);
        self.input.set_relative(grab);
        log::debug!("Cursor grab {}", if grab { "on" } else { "off" });
    }

    fn redraw(&mut self) {
        let frame = self.clock.tick();
        let input = self.input.take_frame();
        log::trace!(
            "Frame {} at {:.3}s (dt {:.4}s)",
            frame.number,
            frame.time,
            frame.delta
        );
        self.camera.apply_input(&input, frame.delta);

        let Some(renderer) = &mut self.renderer else {
            return;
        };
        let uniform = CameraUniform::from_camera(&self.camera, renderer.viewport());
        if let Err(e) = renderer.render(&uniform) {
            log::error!("Render error: {}", e);
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: Error) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                self.fail(event_loop, e);
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                let viewport = Viewport::from(size);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(viewport);
                }
                if !viewport.is_empty() {
                    self.camera.set_viewport(viewport);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Focused(focused) => {
                self.input.process_event(&event);
                self.grab_cursor(focused);
                if focused {
                    self.clock.reset();
                }
            }
            other => {
                self.input.process_event(&other);
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.input.raw_motion(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
