use engine::{Formatter, Money};
use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

fn sign_color(amount: Money, theme: &Theme) -> ratatui::style::Color {
    if amount.is_positive() {
        theme.positive
    } else if amount.is_negative() {
        theme.negative
    } else {
        theme.text
    }
}

/// Signed amount with semantic coloring.
///
/// - Positive amounts: green with `+` prefix
/// - Negative amounts: red, minus sign from the formatter
/// - Zero: neutral text color
#[must_use]
pub fn styled_amount(amount: Money, formatter: &Formatter, theme: &Theme) -> Span<'static> {
    let prefix = if amount.is_positive() { "+" } else { "" };
    Span::styled(
        format!("{prefix}{}", formatter.format(amount)),
        Style::default().fg(sign_color(amount, theme)),
    )
}

/// Magnitude only, colored by sign. Used where the label already says which
/// direction the money went (e.g. "Expenses").
#[must_use]
pub fn styled_amount_no_sign(amount: Money, formatter: &Formatter, theme: &Theme) -> Span<'static> {
    Span::styled(
        formatter.format_abs(amount),
        Style::default().fg(sign_color(amount, theme)),
    )
}

/// Signed amount without a `+`, for the balance.
#[must_use]
pub fn styled_balance(amount: Money, formatter: &Formatter, theme: &Theme) -> Span<'static> {
    Span::styled(
        formatter.format(amount),
        Style::default().fg(sign_color(amount, theme)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn income_gets_plus_prefix() {
        let theme = Theme::default();
        let span = styled_amount(Money::new(100_000), &Formatter::default(), &theme);
        assert_eq!(span.content, "+€1,000.00");
        assert_eq!(span.style.fg, Some(theme.positive));
    }

    #[test]
    fn expenses_card_shows_magnitude() {
        let theme = Theme::default();
        let span = styled_amount_no_sign(Money::new(-40_000), &Formatter::default(), &theme);
        assert_eq!(span.content, "€400.00");
        assert_eq!(span.style.fg, Some(theme.negative));
    }

    #[test]
    fn zero_balance_is_neutral() {
        let theme = Theme::default();
        let span = styled_balance(Money::ZERO, &Formatter::default(), &theme);
        assert_eq!(span.content, "€0.00");
        assert_eq!(span.style.fg, Some(theme.text));
    }
}
