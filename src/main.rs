//! Terrasculpt - terrain sculpting demo

use std::path::PathBuf;
use std::sync::Arc;

use glam::{Vec2, Vec3};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use terrasculpt::brush::BrushParams;
use terrasculpt::core::{
    camera::Camera,
    camera_controller::OrbitCameraController,
    config::SculptConfig,
    error::Error,
    input::InputState,
    logging,
    time::FrameTimer,
};
use terrasculpt::interaction::{InteractionController, InteractionMode};
use terrasculpt::render::{GpuContext, Renderer};
use terrasculpt::terrain::{pick, TerrainMesh};
use terrasculpt::ui::{BrushPanel, PanelEvent};

const KEY_HELP: &str = "N/P=mode [ ]=radius -/= falloff ,/.=step";

struct App {
    config: SculptConfig,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<Renderer>,
    camera: Camera,
    orbit: OrbitCameraController,
    input: InputState,
    timer: FrameTimer,
    terrain: TerrainMesh,
    controller: InteractionController,
    panel: BrushPanel,
}

impl App {
    fn new(config: SculptConfig) -> Self {
        let cam = &config.camera;
        let aspect = config.window.width as f32 / config.window.height as f32;
        let mut camera = Camera::new(Vec3::from_array(cam.position), cam.fov_degrees, aspect);
        camera.near = cam.near;
        camera.far = cam.far;
        let target = Vec3::from_array(cam.target);
        camera.look_at(target);

        let orbit = OrbitCameraController::new(&camera, target, config.orbit.clone());
        let terrain = TerrainMesh::from_settings(&config.terrain);
        let brush = &config.brush;
        let params = BrushParams::new(brush.radius, brush.max_falloff, brush.step_size);
        let panel = BrushPanel::new(&params);

        log::info!(
            "Terrain: {} vertices, {} triangles",
            terrain.vertex_count(),
            terrain.triangle_count()
        );

        let mut app = Self {
            config,
            window: None,
            gpu: None,
            renderer: None,
            camera,
            orbit,
            input: InputState::new(),
            timer: FrameTimer::new(),
            terrain,
            controller: InteractionController::new(params),
            panel,
        };
        app.switch_mode(InteractionMode::Navigation);
        app
    }

    /// Change mode and apply its effects to the orbit controls and the panel
    fn switch_mode(&mut self, mode: InteractionMode) {
        let effects = self.controller.set_mode(mode);
        self.orbit.enabled = effects.orbit_enabled;
        self.panel.set_radius_enabled(effects.radius_control_enabled);
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), Error> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.window.width, self.config.window.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| Error::Window(e.to_string()))?,
        );

        let gpu = pollster::block_on(GpuContext::new(window.clone()))?;

        let size = window.inner_size();
        self.camera.set_aspect(size.width as f32, size.height as f32);
        log::info!("Window created: {}x{}", size.width, size.height);

        let renderer = Renderer::new(&gpu, &mut self.terrain, &self.config.terrain);

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn cursor_ray(&self) -> Option<terrasculpt::math::Ray> {
        let gpu = self.gpu.as_ref()?;
        let (width, height) = gpu.size();
        let (x, y) = self.input.mouse_position();
        Some(self.camera.ray_from_screen(Vec2::new(x, y), Vec2::new(width as f32, height as f32)))
    }

    fn on_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        match state {
            ElementState::Pressed => {
                let ray = self.cursor_ray();
                let outcome = self.controller.pointer_down(&mut self.terrain, button, |mesh| {
                    ray.and_then(|ray| pick(mesh, &ray))
                });
                if let Some(outcome) = outcome {
                    log::trace!("Press stroke: {:?}", outcome);
                }
            }
            ElementState::Released => {
                self.controller.pointer_up();
            }
        }
    }

    fn on_cursor_moved(&mut self) {
        let ray = self.cursor_ray();
        let buttons = self.input.buttons_mask();
        self.controller.pointer_move(&mut self.terrain, buttons, |mesh| {
            ray.and_then(|ray| pick(mesh, &ray))
        });
    }

    fn on_key(&mut self, event: &KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            self.on_key_code(code);
        }
    }

    fn on_key_code(&mut self, code: KeyCode) {
        match self.panel.handle_key(code) {
            Some(PanelEvent::SelectMode(mode)) => self.switch_mode(mode),
            Some(PanelEvent::BrushChanged(control)) => {
                self.panel.apply(control, self.controller.params_mut());
                let params = self.controller.params();
                log::info!(
                    "Brush: radius={} max_falloff={} step_size={}",
                    params.radius(),
                    params.max_falloff(),
                    params.step_size()
                );
            }
            None => {}
        }
    }

    fn render(&mut self) {
        let (Some(gpu), Some(renderer)) = (self.gpu.as_mut(), self.renderer.as_mut()) else {
            return;
        };
        if let Err(e) = renderer.render(gpu, &self.camera, &mut self.terrain) {
            // Lost or outdated surfaces recover after a reconfigure
            log::warn!("Frame skipped: {}", e);
            let (width, height) = gpu.size();
            gpu.resize(width, height);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_graphics(event_loop) {
            log::error!("Startup failed: {}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(gpu) = &mut self.gpu {
                        gpu.resize(size.width, size.height);
                        self.camera.set_aspect(size.width as f32, size.height as f32);
                        if let Some(renderer) = &mut self.renderer {
                            renderer.resize(gpu);
                        }
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_key(&event),
            WindowEvent::MouseInput { state, button, .. } => self.on_mouse_button(state, button),
            WindowEvent::CursorMoved { .. } => self.on_cursor_moved(),
            WindowEvent::RedrawRequested => {
                self.timer.tick();

                // A disabled orbit also stops damping, so a glide freezes in place
                if self.orbit.enabled {
                    self.orbit.handle_input(&self.input);
                    self.orbit.update(&mut self.camera);
                }

                self.render();

                if let Some(window) = &self.window {
                    window.set_title(&format!(
                        "{} - {} | {:.1} FPS | {}",
                        self.config.window.title,
                        self.panel.status(self.controller.mode()),
                        self.timer.fps(),
                        KEY_HELP
                    ));
                }

                self.input.end_frame();

                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() {
    logging::init();
    log::info!("Terrasculpt starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = std::env::args().collect();

    let mut config = match parse_config_arg(&args) {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            SculptConfig::load(&path)?
        }
        None => SculptConfig::default(),
    };
    if let Some(segments) = parse_segments_arg(&args) {
        log::info!("Terrain segments: {}", segments);
        config.terrain.segments = segments;
        config.validate()?;
    }

    let event_loop = EventLoop::new().map_err(|e| Error::Window(e.to_string()))?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app).map_err(|e| Error::Window(e.to_string()))
}

/// Parse --config argument from command line
fn parse_config_arg(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            if let Some(path) = args.get(i + 1) {
                return Some(PathBuf::from(path));
            }
        }
    }
    None
}

/// Parse --segments argument from command line (grid cells per edge)
fn parse_segments_arg(args: &[String]) -> Option<u32> {
    for i in 0..args.len() {
        if args[i] == "--segments" {
            if let Some(value) = args.get(i + 1) {
                return value.parse().ok();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_config_arg() {
        assert_eq!(
            parse_config_arg(&args(&["terrasculpt", "-c", "scene.json"])),
            Some(PathBuf::from("scene.json"))
        );
        assert_eq!(
            parse_config_arg(&args(&["terrasculpt", "--config", "a/b.json"])),
            Some(PathBuf::from("a/b.json"))
        );
        assert_eq!(parse_config_arg(&args(&["terrasculpt", "--config"])), None);
    }

    #[test]
    fn test_parse_segments_arg() {
        assert_eq!(parse_segments_arg(&args(&["terrasculpt", "--segments", "64"])), Some(64));
        assert_eq!(parse_segments_arg(&args(&["terrasculpt", "--segments", "lots"])), None);
        assert_eq!(parse_segments_arg(&args(&["terrasculpt"])), None);
    }

    #[test]
    fn test_app_starts_in_navigation() {
        let app = App::new(SculptConfig::default());
        assert_eq!(app.controller.mode(), InteractionMode::Navigation);
        assert!(app.orbit.enabled);
        assert!(!app.panel.sliders()[0].is_enabled());
    }

    #[test]
    fn test_switch_mode_applies_effects() {
        let mut app = App::new(SculptConfig::default());
        app.switch_mode(InteractionMode::Painting);
        assert!(!app.orbit.enabled);
        assert!(app.panel.sliders()[0].is_enabled());

        app.switch_mode(InteractionMode::Navigation);
        assert!(app.orbit.enabled);
        assert!(!app.panel.sliders()[0].is_enabled());
    }

    #[test]
    fn test_slider_key_keeps_configured_brush() {
        let mut config = SculptConfig::default();
        config.brush.radius = 4.5;
        config.brush.max_falloff = 2.0;
        config.brush.step_size = 0.25;
        let mut app = App::new(config);

        app.on_key_code(KeyCode::Equal);

        let params = app.controller.params();
        assert_eq!(params.radius(), 4.5);
        assert_eq!(params.step_size(), 0.25);
        assert!((params.max_falloff() - 2.1).abs() < 1e-5);
    }
}
