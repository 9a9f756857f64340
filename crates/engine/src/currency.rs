use crate::EngineError;

/// ISO currency code used when rendering amounts.
///
/// Tally is mono-currency: every stored amount is in the configured currency,
/// and this type only decides how it is displayed. All supported currencies use
/// two fraction digits, matching [`Money::MINOR_UNITS`](crate::Money::MINOR_UNITS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "EUR" => Ok(Currency::Eur),
            "USD" => Ok(Currency::Usd),
            "GBP" => Ok(Currency::Gbp),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Currency::try_from("eur").unwrap(), Currency::Eur);
        assert_eq!(Currency::try_from(" USD ").unwrap(), Currency::Usd);
        assert_eq!(Currency::try_from("Gbp").unwrap(), Currency::Gbp);
        assert_eq!(
            Currency::try_from("jpy"),
            Err(EngineError::UnsupportedCurrency("JPY".to_string()))
        );
    }
}
