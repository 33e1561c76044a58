use crate::application::{App, LoadingState, Screen, FIELD_LABELS};
use crate::domain::CardContent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    match app.view.screen {
        Screen::Landing => render_landing(f, chunks[1]),
        Screen::LoginPrank => render_login_prank(f, chunks[1]),
        Screen::Terms => render_terms(f, app, chunks[1]),
        Screen::Form => render_form(f, app, chunks[1]),
    }

    render_status_bar(f, app, chunks[2]);
}

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Landing => "Welcome",
        Screen::LoginPrank => "Login",
        Screen::Terms => "Terms",
        Screen::Form => "Your Details",
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    // The active marker lands a moment after a screen becomes visible, so
    // the transition itself is observable in the header styling.
    let mut style = Style::default().fg(Color::Cyan);
    if app.view.is_active() {
        style = style.add_modifier(Modifier::BOLD);
    }
    let header = Paragraph::new(format!(
        "lifelens - AI Life Analysis | {}",
        screen_title(app.view.screen)
    ))
    .style(style);
    f.render_widget(header, area);
}

fn render_landing(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "L I F E L E N S",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Your name, birth date, time and place,"),
        Line::from("analyzed into a seven-part life report."),
        Line::default(),
        Line::from("For entertainment only. The stars do not actually care."),
        Line::default(),
        Line::from(Span::styled(
            "[Enter] Get Started    [l] Login    [q] Quit",
            Style::default().fg(Color::Yellow),
        )),
    ];
    let landing = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(landing, area);
}

fn render_login_prank(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "SECURE MEMBER LOGIN",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from("Verifying your credentials..."),
        Line::from("Just kidding. There is no login."),
        Line::default(),
        Line::from(Span::styled(
            "Returning to the landing page...",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let prank = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(prank, area);
}

fn render_terms(f: &mut Frame, app: &App, area: Rect) {
    let checkbox = if app.terms_accepted { "[x]" } else { "[ ]" };
    let checkbox_style = if app.terms_accepted {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let submit_style = if app.terms_accepted {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from("Before we gaze into your data, please note:"),
        Line::default(),
        Line::from("1. The report is generated by a language model and is"),
        Line::from("   for entertainment purposes only."),
        Line::from("2. Your details are sent to the generative API once per"),
        Line::from("   analysis and are not stored anywhere."),
        Line::from("3. Any resemblance to your actual life is a lucky guess."),
        Line::default(),
        Line::from(Span::styled(
            format!("{} I acknowledge the above (press Space to toggle)", checkbox),
            checkbox_style,
        )),
        Line::default(),
        Line::from(Span::styled("[Enter] Continue", submit_style)),
    ];
    let terms = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Terms"));
    f.render_widget(terms, area);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    for (i, label) in FIELD_LABELS.iter().enumerate() {
        let focused = i == app.focused_field && app.loading.is_none();
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let field = Paragraph::new(app.profile_inputs[i].as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(*label)
                .border_style(border_style),
        );
        f.render_widget(field, rows[i]);

        if focused {
            let x = rows[i].x + 1 + app.cursor_position.min(u16::MAX as usize) as u16;
            let y = rows[i].y + 1;
            if x < rows[i].x + rows[i].width.saturating_sub(1) {
                f.set_cursor_position((x, y));
            }
        }
    }

    if let Some(loading) = &app.loading {
        render_loading(f, loading, rows[4]);
    } else if !app.cards.is_empty() {
        render_results(f, app, rows[4]);
    } else {
        let hint = Paragraph::new("Fill in all four fields and press Enter to analyze.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(hint, rows[4]);
    }
}

fn render_loading(f: &mut Frame, loading: &LoadingState, area: Rect) {
    let panel = Paragraph::new(loading.ticker.current())
        .style(Style::default().fg(Color::Magenta))
        .block(Block::default().borders(Borders::ALL).title("Analyzing"));
    f.render_widget(panel, area);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for card in &app.cards {
        lines.push(Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        match &card.content {
            CardContent::Paragraph(text) => lines.push(Line::from(text.clone())),
            CardContent::List(items) => {
                for item in items {
                    lines.push(Line::from(format!("  - {}", item)));
                }
            }
        }
        lines.push(Line::default());
    }

    let scroll = app.results_scroll.min(lines.len().saturating_sub(1)) as u16;
    let results = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Your Life Report"),
        );
    f.render_widget(results, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.view.screen {
            Screen::Landing => {
                "Enter: get started | l: member login | q: quit".to_string()
            }
            Screen::LoginPrank => "One moment...".to_string(),
            Screen::Terms => {
                if app.terms_accepted {
                    "Space: toggle acknowledgement | Enter: continue".to_string()
                } else {
                    "Space: toggle acknowledgement | Enter: continue (check the box first)"
                        .to_string()
                }
            }
            Screen::Form => {
                if app.loading.is_some() {
                    "Analyzing... this takes a few seconds".to_string()
                } else {
                    "Tab/Up/Down: fields | Enter: analyze | PgUp/PgDn: scroll report | Ctrl+R: start over"
                        .to_string()
                }
            }
        }
    };

    let style = match app.view.screen {
        Screen::Landing => Style::default(),
        Screen::LoginPrank => Style::default().fg(Color::Red),
        Screen::Terms => Style::default().fg(Color::Yellow),
        Screen::Form => {
            if app.loading.is_some() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default().fg(Color::Green)
            }
        }
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}
