use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::App,
    ui::{
        components::{card::Card, money::styled_amount},
        theme::Theme,
    },
};

const AMOUNT_WIDTH: usize = 16;

pub fn render(frame: &mut Frame<'_>, area: Rect, app: &App, theme: &Theme) {
    let transactions = app.transactions();
    let title = format!("Transactions ({})", transactions.len());
    let card = Card::new(&title, theme);

    if transactions.is_empty() {
        card.render_with(
            frame,
            area,
            Paragraph::new(Line::from(Span::styled(
                "No transactions yet. Add one above.",
                Style::default().fg(theme.dim),
            ))),
        );
        return;
    }

    let items = transactions
        .iter()
        .map(|tx| {
            let amount = styled_amount(tx.amount, &app.formatter, theme);
            let pad = AMOUNT_WIDTH.saturating_sub(amount.content.chars().count());
            ListItem::new(Line::from(vec![
                Span::raw(" ".repeat(pad)),
                amount,
                Span::raw("  "),
                Span::styled(tx.description.clone(), Style::default().fg(theme.text)),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected.min(transactions.len() - 1)));

    let list = List::new(items)
        .block(card.block())
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}
