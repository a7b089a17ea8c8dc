/// Entry point and game loop.

mod app;
mod config;
mod domain;
mod ui;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use rand::Rng;

use app::App;
use config::GameConfig;
use domain::session::Phase;
use ui::input::InputState;
use ui::renderer::Renderer;

const FRAME_SLEEP: Duration = Duration::from_millis(5);

fn main() {
    let config = GameConfig::load();

    let mut app = App::new();
    let mut renderer = Renderer::new(config.ui.keyboard_columns);

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        return;
    }

    let result = game_loop(&mut app, &mut renderer, &config);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Game error: {e}");
    }

    println!();
    println!("Thanks for playing Hangman!");
}

fn game_loop(
    app: &mut App,
    renderer: &mut Renderer,
    config: &GameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut kb = InputState::new();
    let mut rng = rand::thread_rng();
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    loop {
        kb.drain_events();

        if kb.ctrl_c_pressed() {
            break;
        }
        if handle_keys(app, &mut rng, &kb) {
            break;
        }

        // Animation tick: cursor blink, message bar countdown
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        renderer.render(app)?;
        std::thread::sleep(FRAME_SLEEP);
    }

    Ok(())
}

// ── Key Constants ──

const KEYS_SINGLE: &[KeyCode] = &[KeyCode::Char('1'), KeyCode::Char('s'), KeyCode::Char('S')];
const KEYS_TWO: &[KeyCode] = &[KeyCode::Char('2'), KeyCode::Char('t'), KeyCode::Char('T')];
const KEYS_QUIT: &[KeyCode] = &[KeyCode::Char('q'), KeyCode::Char('Q')];
const KEYS_CONFIRM: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];
const KEYS_FIELD_SWITCH: &[KeyCode] = &[KeyCode::Tab, KeyCode::Up, KeyCode::Down];

/// Dispatch this frame's input to the current screen. Returns true to quit.
fn handle_keys(app: &mut App, rng: &mut impl Rng, kb: &InputState) -> bool {
    // The setup dialog captures all input while open: printable keys
    // type into the focused field, never into menu shortcuts.
    if app.setup.is_some() {
        if kb.any_pressed(&[KeyCode::Esc]) {
            app.cancel_setup();
        } else if kb.any_pressed(&[KeyCode::Enter]) {
            app.submit_setup();
        } else if kb.any_pressed(KEYS_FIELD_SWITCH) {
            app.setup_switch_field();
        } else if kb.any_pressed(&[KeyCode::Backspace]) {
            app.setup_backspace();
        } else {
            for c in kb.chars_typed() {
                app.setup_type(c);
            }
        }
        return false;
    }

    match app.session.phase {
        // ── Menu ──
        Phase::Menu => {
            if kb.any_pressed(KEYS_SINGLE) {
                app.start_single_player(rng);
            } else if kb.any_pressed(KEYS_TWO) {
                app.open_setup();
            } else if kb.any_pressed(KEYS_QUIT) || kb.any_pressed(&[KeyCode::Esc]) {
                return true;
            }
        }

        // ── In round ──
        Phase::Playing => {
            if kb.any_pressed(&[KeyCode::Esc]) {
                app.session.return_to_menu();
                return false;
            }
            for c in kb.chars_typed() {
                app.session.guess(c);
            }
        }

        // ── Round over ──
        Phase::Won | Phase::Lost => {
            if kb.any_pressed(KEYS_CONFIRM) {
                // Play again: identical to starting fresh from the menu
                app.start_single_player(rng);
            } else if kb.any_pressed(&[KeyCode::Esc]) {
                app.session.return_to_menu();
            }
        }
    }

    false
}
