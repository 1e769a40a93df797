mod app;
mod config;
mod font;
mod gpu;
mod layout;
mod simulation;

use env_logger::Env;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::app::App;
use crate::config::Config;

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    log::info!(
        "Cell size {}px, randomize count {}, seed {:?}",
        config.cell_size,
        config.random_count,
        config.seed
    );

    let event_loop = EventLoop::new()?;
    // Redraw only in response to input
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)
}
