//! Window and event loop wiring.

use crate::camera::{init_camera, CameraData};
use crate::constants::CAMERA_START;
use crate::input::{self, InputState};
use crate::renderer::{self, SceneUniforms};
use crate::scene::desk_scene;
use crate::ViewerConfig;
use cgmath::Point3;
use std::sync::Arc;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

/// Open the window and run the viewer until Escape or window close.
pub fn run(config: ViewerConfig) -> anyhow::Result<()> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(&config.window_title)
            .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
            .build(&event_loop)?,
    );

    let mut renderer = pollster::block_on(renderer::init(window.clone(), desk_scene()))?;
    let mut camera: CameraData = init_camera(Point3::from(CAMERA_START));
    let mut input = InputState::default();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                renderer::resize(&mut renderer, size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                input::handle_keyboard(&mut input, &event);
            }
            WindowEvent::CursorMoved { position, .. } => {
                input::handle_cursor_moved(&mut input, position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                input::handle_scroll(&mut input, delta);
            }
            WindowEvent::RedrawRequested => {
                if input.exit_requested {
                    elwt.exit();
                    return;
                }

                let now = Instant::now();
                let delta_seconds = now.duration_since(last_frame).as_secs_f32();
                last_frame = now;
                camera = input::apply(&mut input, &camera, delta_seconds);

                let scene = SceneUniforms::new(&camera, input.projection, renderer.aspect());
                match renderer::render_frame(&renderer, &scene) {
                    Ok(()) => {}
                    // The surface comes back after reconfiguring at the
                    // current size.
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = window.inner_size();
                        renderer::resize(&mut renderer, size.width, size.height);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("surface out of memory, exiting");
                        elwt.exit();
                    }
                    Err(err) => log::warn!("dropped frame: {err:?}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
