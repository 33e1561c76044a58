use crate::application::{AnalysisPipeline, App, Screen};
use crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        pipeline: &AnalysisPipeline,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        match app.view.screen {
            Screen::Landing => Self::handle_landing(app, key),
            // The prank screen is a dead end; it leaves on its own.
            Screen::LoginPrank => {}
            Screen::Terms => Self::handle_terms(app, key),
            Screen::Form => Self::handle_form(app, pipeline, key, modifiers),
        }
    }

    fn handle_landing(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char('g') => {
                app.activate(Screen::Terms, Instant::now());
            }
            KeyCode::Char('l') => {
                app.activate(Screen::LoginPrank, Instant::now());
            }
            _ => {}
        }
    }

    fn handle_terms(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char(' ') => {
                app.terms_accepted = !app.terms_accepted;
            }
            KeyCode::Enter => {
                // Submit stays inert until the acknowledgement is checked.
                if app.terms_accepted {
                    app.activate(Screen::Form, Instant::now());
                }
            }
            _ => {}
        }
    }

    fn handle_form(
        app: &mut App,
        pipeline: &AnalysisPipeline,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('r') = key {
                app.reset(Instant::now());
            }
            return;
        }

        // No cancellation once a call is in flight; ignore edits until it
        // settles.
        if app.loading.is_some() {
            return;
        }

        match key {
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_previous_field();
            }
            KeyCode::Enter => match app.capture_profile() {
                Some(profile) => {
                    let handle = pipeline.spawn(profile);
                    app.begin_analysis(handle, Instant::now());
                }
                None => {
                    app.status_message = Some("All four fields are required.".to_string());
                }
            },
            KeyCode::PageUp => {
                app.results_scroll = app.results_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                if !app.cards.is_empty() {
                    app.results_scroll += 5;
                }
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    let position = app.cursor_position - 1;
                    app.focused_input_mut().remove(position);
                    app.cursor_position = position;
                    app.status_message = None;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.focused_input().len() {
                    let position = app.cursor_position;
                    app.focused_input_mut().remove(position);
                    app.status_message = None;
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.focused_input().len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.focused_input().len();
            }
            KeyCode::Char(c) => {
                let position = app.cursor_position;
                app.focused_input_mut().insert(position, c);
                app.cursor_position += 1;
                app.status_message = None;
            }
            _ => {}
        }
    }
}
