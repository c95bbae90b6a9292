use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, PromptKind};
use crate::audio::AudioPlayer;
use crate::config;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: draws the UI and turns key presses into `App`
/// operations. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<AudioPlayer>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns `true` when the app should exit.
fn handle_key_event(key: KeyEvent, app: &mut App<AudioPlayer>, state: &mut EventLoopState) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.backend().quit_softly();
        return true;
    }

    if let Some(prompt) = &app.prompt {
        state.pending_gg = false;
        if prompt.is_confirmation() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_prompt(Some("y".to_string())),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_prompt(),
                _ => {}
            }
        } else {
            match key.code {
                KeyCode::Esc => app.cancel_prompt(),
                KeyCode::Enter => app.submit_prompt(),
                KeyCode::Backspace => app.pop_prompt_char(),
                KeyCode::Char(c) if !c.is_control() => app.push_prompt_char(c),
                _ => {}
            }
        }
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.backend().quit_softly();
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_row(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter => {
            let r = app.play_selected();
            app.report(r);
        }
        KeyCode::Char('p') => {
            let r = app.play();
            app.report(r);
        }
        KeyCode::Char(' ') => {
            let r = app.toggle_play_pause();
            app.report(r);
        }
        KeyCode::Char('l') => {
            let r = app.next();
            app.report(r);
        }
        KeyCode::Char('h') => {
            let r = app.prev();
            app.report(r);
        }
        KeyCode::Char('r') => {
            app.toggle_loop();
        }
        KeyCode::Char('o') => app.open_prompt(PromptKind::OpenFolder),
        KeyCode::Char('a') => app.open_prompt(PromptKind::AddTrack),
        KeyCode::Char('/') => app.open_prompt(PromptKind::Search),
        KeyCode::Char('d') => app.request_remove(app.selected),
        KeyCode::Char('m') => {
            let r = match app.pending_move {
                Some(_) => app.complete_move(app.selected),
                None => app.begin_move(app.selected),
            };
            app.report(r);
        }
        KeyCode::Esc => {
            if app.pending_move.is_some() {
                app.cancel_move();
                app.info("Move cancelled");
            } else if app.guide_window {
                app.toggle_guide_window();
            }
        }
        KeyCode::Char('?') => app.toggle_guide_window(),
        _ => {}
    }

    false
}
