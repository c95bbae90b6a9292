//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::app::{App, StatusLevel};
use crate::audio::PlaybackBackend;
use crate::config::UiSettings;
use crate::transport::PlaybackState;

const CONTROLS: &[(&str, &str)] = &[
    ("j/k", "up/down"),
    ("enter", "play selected"),
    ("p", "play"),
    ("space", "play/pause"),
    ("h/l", "prev/next"),
    ("r", "loop"),
    ("o", "open folder"),
    ("a", "add track"),
    ("/", "search"),
    ("m", "move"),
    ("d", "remove"),
    ("?", "guide"),
    ("q", "quit"),
];

const GUIDE: &str = "\
Open folder [o]: load every track of a folder into the queue (replaces it).
Add track [a]: add one file, then pick its position (blank = end).
Play [p] / pause [space]: play resumes a paused track without restarting it.
Play selected [enter]: start the track under the cursor immediately.
Next/previous [l/h]: step through the queue; nothing happens at either end.
Loop [r]: repeat tracks started from now on until loop is turned off.
Move [m]: press on a track, move the cursor, press again to drop it; esc cancels.
Remove [d]: remove the track under the cursor after confirming.
Search [/]: type a song name without its extension to find its position.";

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Build the status line from transport state.
fn status_text<B: PlaybackBackend>(app: &App<B>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let state = match app.playback() {
        PlaybackState::Stopped => "Stopped",
        PlaybackState::Playing => "Playing",
        PlaybackState::Paused => "Paused",
    };
    let current = app.transport.current().and_then(|i| app.queue.get(i));
    match current {
        Some(track) if app.playback() != PlaybackState::Stopped => {
            parts.push(format!("{state}: {}", track.name));
        }
        _ => parts.push(state.to_string()),
    }

    parts.push(if app.transport.looped() {
        "Loop: ON".to_string()
    } else {
        "Loop: OFF".to_string()
    });

    parts.push(format!("Tracks: {}", app.queue.len()));

    if let Some(from) = app.pending_move {
        if let Some(track) = app.queue.get(from) {
            parts.push(format!("Moving: {}", track.name));
        }
    }

    if let Some(dir) = &app.current_dir {
        parts.push(format!("Dir: {}", dir.display()));
    }

    parts.join(" • ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<B: PlaybackBackend>(frame: &mut Frame, app: &App<B>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" segue ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box: transport summary plus the latest message.
    let mut status = status_text(app);
    let mut status_style = Style::default();
    if let Some(msg) = &app.status {
        status.push('\n');
        status.push_str(&msg.text);
        if msg.level == StatusLevel::Warning {
            status_style = status_style.fg(Color::Yellow);
        }
    }
    let status_par = Paragraph::new(status)
        .style(status_style)
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Queue list. Only build items for the visible window.
    {
        let total = app.queue.len();
        let list_height = chunks[2].height.saturating_sub(2) as usize;
        let sel_pos = app.selected.min(total.saturating_sub(1));
        let (start, end, selected_pos_in_visible) = if total <= list_height || list_height == 0 {
            (0, total, sel_pos)
        } else {
            let half = list_height / 2;
            let mut start = sel_pos.saturating_sub(half);
            if start + list_height > total {
                start = total - list_height;
            }
            (start, start + list_height, sel_pos - start)
        };

        let current = app.transport.current();
        let visible_items: Vec<ListItem> = app.queue.tracks()[start..end]
            .iter()
            .enumerate()
            .map(|(offset, track)| {
                let i = start + offset;
                let marker = if current == Some(i) { "♪" } else { " " };
                let text = format!("{marker} {:>3}. {}", i + 1, track.name);
                let mut style = Style::default();
                if app.pending_move == Some(i) {
                    style = style.add_modifier(Modifier::ITALIC | Modifier::DIM);
                }
                if current == Some(i) {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ListItem::new(text).style(style)
            })
            .collect();

        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(" queue "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if total > 0 {
            state.select(Some(selected_pos_in_visible));
        }
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    if app.guide_window {
        let popup_area = centered_rect_sized(84, 13, chunks[2]);
        frame.render_widget(Clear, popup_area);
        let guide = Paragraph::new(GUIDE)
            .block(padded(" guide (? closes) "))
            .wrap(Wrap { trim: true });
        frame.render_widget(guide, popup_area);
    }

    // Prompt overlay sits on top of everything in the list area.
    if let Some(prompt) = &app.prompt {
        let popup_area = centered_rect_sized(72, 6, chunks[2]);
        frame.render_widget(Clear, popup_area);

        let question = prompt.question(app.queue.len(), app.queue.extension());
        let body = if prompt.is_confirmation() {
            question
        } else {
            format!("{question}\n> {}_", prompt.input)
        };
        let popup = Paragraph::new(body)
            .block(padded(prompt.title()))
            .wrap(Wrap { trim: false });
        frame.render_widget(popup, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_text_lists_every_binding_in_order() {
        let text = controls_text();
        assert!(text.starts_with("[j/k] up/down | "));
        assert!(text.ends_with("[q] quit"));
        assert_eq!(text.matches(" | ").count(), CONTROLS.len() - 1);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 40,
            height: 10,
        };
        let r = centered_rect_sized(100, 100, area);
        assert!(r.width <= 38);
        assert!(r.height <= 8);
        assert!(r.x + r.width <= area.width);
        assert!(r.y + r.height <= area.height);
    }
}
