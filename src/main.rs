//! Terminal Pair-a-Gone runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from the `term` crate. Timers are driven by polling with a short timeout.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pair_a_gone::adapter::{AppConfig, BellSoundPlayer, FileSettingsStore};
use pair_a_gone::core::{Controller, SystemClock};
use pair_a_gone::input::{handle_mouse_event, should_quit, InputHandler};
use pair_a_gone::term::{install_panic_hook, GameView, TermScreen, Viewport};
use pair_a_gone::types::GameAction;

/// Poll timeout between timer updates (~60 FPS).
const TICK_MS: u64 = 16;

type App = Controller<TermScreen, BellSoundPlayer, FileSettingsStore, SystemClock>;

fn main() -> Result<()> {
    let mut config = AppConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;

    init_logging(&config)?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut screen = TermScreen::new(GameView::default(), Viewport::new(w, h));
    screen.set_cursor(Some(0));
    install_panic_hook();
    screen.enter()?;

    let seed = config.resolve_seed();
    info!(seed, data_dir = %config.data_dir.display(), "starting");

    let mut app: App = Controller::new(
        seed,
        screen,
        BellSoundPlayer::new(config.mute),
        FileSettingsStore::new(config.settings_path()),
        SystemClock::new(),
    );

    let result = run(&mut app);

    app.shutdown();
    // The screen also restores the terminal when dropped.
    let _ = app.renderer_mut().exit();
    info!("exited");
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(app: &mut App) -> Result<()> {
    let mut input = InputHandler::new();
    let tick = Duration::from_millis(TICK_MS);

    loop {
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }

                    let before = input.cursor();
                    let action = input.handle_key_press(key.code);
                    if input.cursor() != before {
                        app.renderer_mut().set_cursor(Some(input.cursor()));
                        app.refresh();
                    }
                    if let Some(action) = action {
                        apply(app, &mut input, action);
                    }
                }
                Event::Mouse(mouse) => {
                    let screen = app.renderer();
                    let action = handle_mouse_event(mouse, |x, y| screen.slot_at(x, y));
                    if let Some(action) = action {
                        if let GameAction::Select(index) = action {
                            input.set_cursor(index);
                            app.renderer_mut().set_cursor(Some(index));
                        }
                        apply(app, &mut input, action);
                    }
                }
                Event::Resize(w, h) => {
                    app.renderer_mut().resize(w, h);
                    app.refresh();
                }
                _ => {}
            }
        }

        app.update();
    }
}

fn apply(app: &mut App, input: &mut InputHandler, action: GameAction) {
    if action == GameAction::Restart {
        input.reset();
        app.renderer_mut().set_cursor(Some(input.cursor()));
    }
    if !app.apply_action(action) {
        // Cursor moves still need a frame even when the click was ignored.
        app.refresh();
    }
}
