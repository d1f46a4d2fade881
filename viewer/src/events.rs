pub use glutin::event::{Event, WindowEvent};
use winit::{
    event_loop::{ControlFlow, EventLoop},
    platform::desktop::EventLoopExtDesktop,
};

/// Pumps window events once per frame instead of handing the thread to
/// the event loop.
pub struct EventSystem {
    pub event_loop: EventLoop<()>,
    pub running: bool,
}

impl EventSystem {
    pub fn new() -> Self {
        Self {
            event_loop: EventLoop::new(),
            running: true,
        }
    }

    /// Delivers every pending event to `handler`, then returns.
    pub fn update_events<F>(&mut self, mut handler: F)
    where
        F: FnMut(&Event<()>),
    {
        let running = &mut self.running;

        self.event_loop.run_return(|event, _, control_flow| {
            match &event {
                Event::WindowEvent {
                    event: WindowEvent::CloseRequested,
                    ..
                } => *running = false,
                Event::MainEventsCleared => *control_flow = ControlFlow::Exit,
                _ => *control_flow = ControlFlow::Poll,
            }

            handler(&event);
        });
    }
}
