//! Localized currency rendering.
//!
//! A [`Formatter`] pairs a [`Currency`] with a [`Locale`] and is fixed for the
//! lifetime of the application, so the same amount always renders the same way.

use crate::{Currency, EngineError, Money};

/// Locales the formatter knows how to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// `-€1,234.56`
    #[default]
    EnUs,
    /// `-1.234,56 €`
    ItIt,
}

impl Locale {
    /// BCP 47 tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::ItIt => "it-IT",
        }
    }

    const fn group_separator(self) -> char {
        match self {
            Locale::EnUs => ',',
            Locale::ItIt => '.',
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Locale::EnUs => '.',
            Locale::ItIt => ',',
        }
    }

    const fn symbol_first(self) -> bool {
        matches!(self, Locale::EnUs)
    }
}

impl core::fmt::Display for Locale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

impl TryFrom<&str> for Locale {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" | "en" => Ok(Locale::EnUs),
            "it-it" | "it" => Ok(Locale::ItIt),
            _ => Err(EngineError::UnsupportedLocale(value.trim().to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Formatter {
    pub currency: Currency,
    pub locale: Locale,
}

impl Formatter {
    #[must_use]
    pub const fn new(currency: Currency, locale: Locale) -> Self {
        Self { currency, locale }
    }

    /// Renders a signed amount, e.g. `-€400.00`.
    #[must_use]
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let number = self.number(amount);
        let symbol = self.currency.symbol();
        if self.locale.symbol_first() {
            format!("{sign}{symbol}{number}")
        } else {
            format!("{sign}{number} {symbol}")
        }
    }

    /// Renders the magnitude only, for places where the label already
    /// carries the direction (the expenses total).
    #[must_use]
    pub fn format_abs(&self, amount: Money) -> String {
        self.format(amount.abs())
    }

    fn number(&self, amount: Money) -> String {
        let (units, cents) = amount.split_abs();
        let digits = units.to_string();
        let group = self.locale.group_separator();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                grouped.push(group);
            }
            grouped.push(ch);
        }

        format!("{grouped}{}{cents:02}", self.locale.decimal_separator())
    }
}
