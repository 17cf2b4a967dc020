use anyhow::Result;
use log::{debug, info};
use rusted_input::engine::input::{Input, InputBindings, InputEvent, DEFAULT_PLAYER};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Number of local players sharing the keyboard
const LOCAL_PLAYERS: usize = 2;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting input demo...");

    let mut input = Input::new();
    input.bind(InputBindings::default_keyboard(), DEFAULT_PLAYER);
    input.bind(InputBindings::default_arrows(), 1);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Input")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.release_all();
            }
            Event::WindowEvent { event, .. } => {
                let input_event = InputEvent::from_window_event(&event);
                if let InputEvent::Key(key_event) = input_event {
                    for entry in input.actions_for(key_event.key) {
                        debug!(
                            "{:?} drives action {} of player {}",
                            key_event.key, entry.name, entry.player
                        );
                    }
                }
                input.handle(&input_event);
            }
            Event::AboutToWait => {
                for player in 0..LOCAL_PLAYERS {
                    let horizontal = input.axis("Horizontal", player);
                    let vertical = input.axis("Vertical", player);
                    if horizontal != 0.0 || vertical != 0.0 {
                        info!("Player {} moving ({}, {})", player + 1, horizontal, vertical);
                    }
                    if input.just_pressed("Jump", player) {
                        info!("Player {} jumped", player + 1);
                    }
                }

                if input.just_pressed("Pause", DEFAULT_PLAYER) {
                    info!("Pause requested");
                }

                input.end_frame();
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
