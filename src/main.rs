use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, anyhow};
use clap::Parser;
use glam::{IVec2, Vec2};
use tracing_subscriber::EnvFilter;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

mod config;
mod geometry;
mod renderer;
mod ui;

use config::{Cli, ViewerConfig};
use renderer::{DragButton, GpuState, MeshBuffer, MeshSlot, ViewCamera, load_image};
use ui::{UiActions, UiState, ViewStats, apply_theme, draw_help_overlay, draw_side_panel};

/// Wheel angle reported for one notch, in eighths of a degree.
const WHEEL_NOTCH: f32 = 120.0;

#[derive(Default)]
struct InputState {
    cursor: Option<IVec2>,
    left_down: bool,
    right_down: bool,
}

impl InputState {
    fn drag_button(&self) -> Option<DragButton> {
        if self.left_down {
            Some(DragButton::Left)
        } else if self.right_down {
            Some(DragButton::Right)
        } else {
            None
        }
    }

    /// Tracks the cursor in whole pixels and returns the drag step since the last move.
    fn move_to(&mut self, position: Vec2) -> Option<(DragButton, Vec2)> {
        let position = position.round().as_ivec2();
        let last = self.cursor.replace(position)?;
        let button = self.drag_button()?;
        Some((button, (position - last).as_vec2()))
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_ctx: egui::Context,

    config: ViewerConfig,
    camera: ViewCamera,
    ui_state: UiState,
    input: InputState,

    mesh: MeshSlot<MeshBuffer>,
    generation_ms: f32,

    fatal_error: Option<anyhow::Error>,
}

impl App {
    fn new(config: ViewerConfig) -> Self {
        let mut app = Self {
            window: None,
            gpu: None,
            egui_state: None,
            egui_renderer: None,
            egui_ctx: egui::Context::default(),

            camera: ViewCamera::default(),
            ui_state: UiState::from_spec(config.surface),
            input: InputState::default(),

            mesh: MeshSlot::Empty,
            generation_ms: 0.0,

            fatal_error: None,
            config,
        };

        app.generate_mesh();
        app
    }

    fn init_gpu(&mut self, window: Arc<Window>) -> anyhow::Result<()> {
        let image = load_image(self.config.texture.as_deref())?;
        let gpu = pollster::block_on(GpuState::new(window.clone(), &image))
            .context("failed to initialize the renderer")?;

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            self.egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );

        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);

        apply_theme(&self.egui_ctx);

        self.camera
            .set_aspect(gpu.config.width as f32, gpu.config.height as f32);

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        Ok(())
    }

    fn generate_mesh(&mut self) {
        let spec = self.ui_state.current_spec();
        let (n_phi, n_theta) = spec.resolution();

        let start = Instant::now();
        let mesh = spec.generate();
        self.generation_ms = start.elapsed().as_secs_f32() * 1000.0;

        tracing::info!(
            surface = spec.kind().label(),
            n_phi,
            n_theta,
            vertices = mesh.vertex_count(),
            ms = self.generation_ms,
            "generated mesh"
        );

        self.mesh.attach(mesh);
        self.ui_state.needs_generate = false;
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn view_stats(&self) -> ViewStats {
        let (vertex_count, triangle_count) = self
            .mesh
            .mesh()
            .map_or((0, 0), |m| (m.vertex_count(), m.triangle_count()));

        ViewStats {
            vertex_count,
            triangle_count,
            generation_ms: self.generation_ms,
            fov: self.camera.fov,
            rotation: [self.camera.x_rot, self.camera.y_rot, self.camera.z_rot],
            texture_size: self.gpu.as_ref().map_or((0, 0), |g| g.texture.size),
        }
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) else {
            return Ok(());
        };

        let raw_input = egui_state.take_egui_input(window);
        let stats = self.view_stats();
        let show_overlay = self.ui_state.show_overlay;

        let mut ui_actions = UiActions::default();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            ui_actions = draw_side_panel(ctx, &mut self.ui_state, &stats);

            if show_overlay {
                draw_help_overlay(ctx);
            }
        });

        self.handle_ui_actions(ui_actions);

        let Some(gpu) = &mut self.gpu else {
            return Ok(());
        };
        let Some(window) = &self.window else {
            return Ok(());
        };
        let Some(egui_state) = &mut self.egui_state else {
            return Ok(());
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return Ok(());
        };

        let repaint_now = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());

        egui_state.handle_platform_output(window, full_output.platform_output);

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                gpu.resize(gpu.size);
                window.request_redraw();
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(anyhow!("out of GPU memory"));
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("timed out acquiring the next frame");
                return Ok(());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.update_scene(&self.camera);

        let mesh_buffer = self
            .mesh
            .prepare(|mesh| MeshBuffer::upload(&gpu.device, mesh));

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, delta) in full_output.textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        gpu.render_mesh(&view, &mut encoder, mesh_buffer);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        if repaint_now {
            window.request_redraw();
        }

        Ok(())
    }

    fn handle_ui_actions(&mut self, actions: UiActions) {
        if actions.generate {
            self.generate_mesh();
        }

        if actions.reset_view {
            self.camera.reset();
            self.request_redraw();
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: KeyCode, pressed: bool) {
        if !pressed {
            return;
        }

        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyR => {
                self.camera.reset();
                self.request_redraw();
            }
            _ => {}
        }
    }

    fn handle_cursor(&mut self, position: Vec2) {
        if let Some((button, delta)) = self.input.move_to(position) {
            if self.camera.process_drag(button, delta) {
                self.request_redraw();
            }
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.fatal_error = Some(error);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.config.window_size;
        let window_attrs = Window::default_attributes()
            .with_title("3D Viewer")
            .with_inner_size(PhysicalSize::new(width, height))
            .with_min_inner_size(PhysicalSize::new(400, 400));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.fail(event_loop, anyhow!("failed to create window: {e}"));
                return;
            }
        };

        if let Err(e) = self.init_gpu(window) {
            self.fail(event_loop, e);
            return;
        }

        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(egui_state), Some(window)) = (&mut self.egui_state, &self.window) {
            let response = egui_state.on_window_event(window, &event);
            if response.repaint {
                window.request_redraw();
            }

            // A drag that ends over the panel still has to release the button.
            let release = matches!(
                event,
                WindowEvent::MouseInput {
                    state: ElementState::Released,
                    ..
                }
            );
            if response.consumed && !release {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                    self.camera
                        .set_aspect(size.width as f32, size.height as f32);
                }
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(event_loop, key, event.state == ElementState::Pressed);
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let pressed = state == ElementState::Pressed;
                match button {
                    MouseButton::Left => self.input.left_down = pressed,
                    MouseButton::Right => self.input.right_down = pressed,
                    _ => {}
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::CursorLeft { .. } => {
                self.input.cursor = None;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let angle = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * WHEEL_NOTCH,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                self.camera.process_scroll(angle);
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ViewerConfig::from(Cli::parse());

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("event loop exited with an error")?;

    match app.fatal_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slow_drag_adds_up_to_whole_pixels() {
        let mut input = InputState {
            left_down: true,
            ..Default::default()
        };
        let mut camera = ViewCamera::default();

        assert!(input.move_to(Vec2::new(100.0, 50.0)).is_none());
        for step in 1..=10 {
            let x = 100.0 + 0.4 * step as f32;
            if let Some((button, delta)) = input.move_to(Vec2::new(x, 50.0)) {
                camera.process_drag(button, delta);
            }
        }

        assert_eq!(camera.y_rot, 32);
        assert_eq!(camera.x_rot, 0);
    }

    #[test]
    fn no_rotation_without_a_button() {
        let mut input = InputState::default();
        input.move_to(Vec2::ZERO);
        assert!(input.move_to(Vec2::new(5.0, 5.0)).is_none());
        assert_eq!(input.cursor, Some(IVec2::new(5, 5)));
    }

    #[test]
    fn right_button_rolls() {
        let mut input = InputState {
            right_down: true,
            ..Default::default()
        };
        input.move_to(Vec2::new(10.2, 10.0));
        let (button, delta) = input.move_to(Vec2::new(12.9, 9.0)).unwrap();
        assert_eq!(button, DragButton::Right);
        assert_eq!(delta, Vec2::new(3.0, -1.0));
    }
}
