//! Opens a window and logs keyboard and mouse transitions
//!
//! Usage: `input_monitor [config.toml|config.ron]`
//!
//! Escape or closing the window quits.

use std::rc::Rc;

use windowing_core::foundation::logging;
use windowing_core::prelude::*;

const WATCHED_KEYS: &[(KeyCode, &str)] = &[
    (KeyCode::W, "W"),
    (KeyCode::A, "A"),
    (KeyCode::S, "S"),
    (KeyCode::D, "D"),
    (KeyCode::SPACE, "Space"),
    (KeyCode::LEFT_SHIFT, "LeftShift"),
];

const WATCHED_BUTTONS: &[(MouseCode, &str)] = &[
    (MouseCode::LEFT, "Left"),
    (MouseCode::RIGHT, "Right"),
    (MouseCode::MIDDLE, "Middle"),
];

fn load_config() -> Result<WindowingConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => WindowingConfig::load_from_file(path),
        None => Ok(WindowingConfig {
            window: WindowSpecification::new("Input monitor", 800, 600),
            ..WindowingConfig::default()
        }),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;
    logging::init(&config.log_filter);

    let mut device = Device::new(&config.device)?;
    let window_id = device.create_window(&config.window)?;
    let events = device
        .window(window_id)
        .map(|window| Rc::clone(window.events()))
        .ok_or("window vanished right after creation")?;

    let mut input = InputManager::new(Rc::clone(&events));

    let focus_listener = events.focus_lost.subscribe(|_| log::info!("Focus lost"));
    let resize_listener = events
        .framebuffer_resized
        .subscribe(|&(width, height)| log::info!("Framebuffer resized to {}x{}", width, height));

    let mut timer = Timer::new();
    log::info!("Starting input monitor...");

    loop {
        input.begin_frame();
        device.poll_events();
        let delta = timer.tick();

        let Some(window) = device.window_mut(window_id) else {
            break;
        };

        for &(key, name) in WATCHED_KEYS {
            match input.key_state(key) {
                ClickableState::Pressed => log::info!("{} pressed", name),
                ClickableState::Released => log::info!("{} released", name),
                ClickableState::Repeated | ClickableState::None => {}
            }
        }

        for &(button, name) in WATCHED_BUTTONS {
            if input.is_mouse_button_pressed(button) {
                let (x, y) = input.mouse_position();
                log::info!("{} button pressed at ({:.0}, {:.0})", name, x, y);
            } else if input.is_mouse_button_released(button) {
                log::info!("{} button released", name);
            }
        }

        let (_, scroll) = input.scroll_delta();
        if scroll != 0.0 {
            log::debug!("Scrolled {:+.1}", scroll);
        }

        if input.is_key_held(KeyCode::SPACE) && timer.frame_count() % 60 == 0 {
            log::debug!("Space held, frame time {:.2} ms", delta.milliseconds());
        }

        if input.is_key_pressed(KeyCode::ESCAPE) {
            window.set_should_close(true);
        }

        let should_close = window.should_close();
        input.end_frame();

        if should_close {
            break;
        }
    }

    events.focus_lost.unsubscribe(focus_listener);
    events.framebuffer_resized.unsubscribe(resize_listener);
    drop(input);
    device.destroy_window(window_id);

    log::info!(
        "Input monitor finished after {} frames ({:.1} fps average)",
        timer.frame_count(),
        timer.average_fps()
    );
    Ok(())
}
