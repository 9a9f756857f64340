use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    app::{App, FormField},
    ui::{components::card::Card, theme::Theme},
};

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let form = &app.form;
    render_field(
        frame,
        cols[0],
        "Description",
        &form.description,
        form.focus == FormField::Description,
        theme,
    );
    render_field(
        frame,
        cols[1],
        "Amount (negative = expense)",
        &form.amount,
        form.focus == FormField::Amount,
        theme,
    );
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let card = Card::new(title, theme).focused(focused);
    let inner = card.inner(area);

    // Keep the end of long input visible.
    let width = usize::from(inner.width.saturating_sub(1));
    let chars = value.chars().count();
    let visible: String = value.chars().skip(chars.saturating_sub(width)).collect();

    card.render_with(
        frame,
        area,
        Paragraph::new(visible.as_str()).style(Style::default().fg(theme.text)),
    );

    if focused {
        let offset = u16::try_from(visible.chars().count()).unwrap_or(inner.width);
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}
