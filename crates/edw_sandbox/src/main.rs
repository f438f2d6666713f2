// crates/edw_sandbox/src/main.rs
//! Small interactive playground for the window layer.
//!
//! Esc closes, F/G enter/leave fullscreen, gamepad South prints, left stick X is traced.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use edw_core::{KeyCode, MouseButton, NativeWindow, Platform, WindowConfig};
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "edw_sandbox", about = "Open a window and log input callbacks")]
struct Args {
    /// TOML file with window settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt().with_max_level(args.log_level).init();

    let config = match &args.config {
        Some(path) => WindowConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => WindowConfig::default().with_title("edw sandbox"),
    };

    let mut platform = Platform::init().context("initializing the windowing platform")?;
    if !config.joysticks.is_empty() && !platform.has_gamepad_support() {
        warn!(joysticks = ?config.joysticks, "no gamepad support, joystick callbacks will not fire");
    }
    let mut window = NativeWindow::open(&mut platform, &config).context("opening the window")?;

    let control = window.control();
    let input = window.input_mut();

    let quit = control.clone();
    input.on_key_press(KeyCode::Escape, move || quit.close());

    let fullscreen = control.clone();
    input.on_key_press(KeyCode::KeyF, move || fullscreen.set_full_screen(true));
    let windowed = control.clone();
    input.on_key_press(KeyCode::KeyG, move || windowed.set_full_screen(false));

    input.on_mouse_press(MouseButton::Left, || info!("left mouse down"));
    input.on_mouse_release(MouseButton::Left, || info!("left mouse up"));
    input.on_cursor_position_change(|x, y| tracing::trace!(x, y, "cursor"));
    input.on_scroll(|dx, dy| info!(dx, dy, "scroll"));

    input.on_joystick_button_press(0, || info!("gamepad south pressed"));
    input.on_joystick_button_release(0, || info!("gamepad south released"));
    input.on_joystick_analog_move(0, |value| tracing::trace!(value, "left stick x"));

    window.add_init_behavior(|| info!("sandbox ready"));

    let frames = Rc::new(Cell::new(0u64));
    let counter = frames.clone();
    let clock = control.clone();
    window.add_frame_behavior(move || {
        counter.set(counter.get() + 1);
        if counter.get() % 600 == 0 {
            info!(frames = counter.get(), dt = clock.delta_time(), "still running");
        }
    });

    window.show()?;
    info!(frames = frames.get(), "sandbox finished");
    Ok(())
}
