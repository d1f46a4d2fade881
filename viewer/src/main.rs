mod config;
mod events;
mod logging;
mod scene;
mod window_context;

use config::ViewerConfig;
use events::{Event, EventSystem, WindowEvent};
use renderer::{gl, AppState, VertexArrayState};
use scene::Scene;
use std::path::Path;
use window_context::WindowContext;

type ViewerState<'a> = AppState<'a, WindowContext, Scene>;

fn render_frame(state: &ViewerState, vertex_arrays: &mut VertexArrayState) {
    if let Some(scene) = state.scene() {
        scene.draw(vertex_arrays);
    }
}

fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(Path::new(&path))?,
        None => ViewerConfig::default(),
    };

    logging::init_logging(&config);

    let mut event_system = EventSystem::new();
    let window_context = WindowContext::from_event_loop(&event_system, &config)?;
    let mut vertex_arrays = VertexArrayState::build_initialized();
    let scene = Scene::triangle(&mut vertex_arrays, config.clear_color)?;

    let mut state: ViewerState = AppState::with_window(&window_context);
    state.replace_scene(&scene);
    log::info!("showing scene {:?}", scene.name());

    while event_system.running {
        event_system.update_events(|event| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                if let Some(window) = state.window() {
                    window.resize(*size);
                }
            }
        });

        render_frame(&state, &mut vertex_arrays);

        if let Err(err) = gl::check_error() {
            log::warn!("GL error after frame: {}", err);
        }

        if let Some(window) = state.window() {
            window.swap_buffers()?;
        }
    }

    state.teardown();
    log::info!("shutting down");

    Ok(())
}
