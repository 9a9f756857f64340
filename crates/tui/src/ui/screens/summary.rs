use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::App,
    ui::{
        components::{
            card::StatCard,
            money::{styled_amount_no_sign, styled_balance},
        },
        theme::Theme,
    },
};

/// Balance, income and expenses side by side.
pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let summary = app.summary();
    let formatter = &app.formatter;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    StatCard::new("Balance", styled_balance(summary.balance, formatter, theme), theme)
        .render(frame, cols[0]);
    StatCard::new(
        "Income",
        styled_amount_no_sign(summary.income, formatter, theme),
        theme,
    )
    .render(frame, cols[1]);
    StatCard::new(
        "Expenses",
        styled_amount_no_sign(summary.expenses, formatter, theme),
        theme,
    )
    .render(frame, cols[2]);
}
