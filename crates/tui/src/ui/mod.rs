pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use theme::Theme;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};

pub fn render(frame: &mut Frame<'_>, app: &App) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Length(3), // Totals
            Constraint::Length(3), // Form
            Constraint::Min(3),    // Transactions
            Constraint::Length(1), // Hints
        ])
        .split(frame.area());

    render_title_bar(frame, layout[0], app, &theme);
    screens::summary::render(frame, layout[1], app, &theme);
    screens::form::render(frame, layout[2], app, &theme);
    screens::transactions::render(frame, layout[3], app, &theme);
    render_bottom_bar(frame, layout[4], &theme);
}

fn render_title_bar(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            "Tally",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("Currency", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", app.formatter.currency)),
        Span::styled("Locale", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", app.formatter.locale)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let hints = [
        ("Tab", " switch field"),
        ("Enter", " add"),
        ("↑/↓", " select"),
        ("Del", " delete"),
        ("Esc", " quit"),
    ];

    let mut parts = Vec::with_capacity(hints.len() * 3);
    for (idx, (key, label)) in hints.into_iter().enumerate() {
        if idx > 0 {
            parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        parts.push(Span::styled(key, Style::default().fg(theme.accent)));
        parts.push(Span::raw(label));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
