//! Transaction primitives.
//!
//! A `Transaction` is a single signed entry in the ledger. New entries start as
//! a [`Draft`], which is the only place input validation happens.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine};

pub type TransactionId = u64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "text", alias = "description")]
    pub description: String,
    pub amount: Money,
}

impl Transaction {
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }
}

/// A validated, not yet stored transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub amount: Money,
}

impl Draft {
    /// Validates raw form input.
    ///
    /// The description is trimmed and must not be empty; the amount must parse
    /// (see [`Money::parse_major`]), must not be zero once rounded to cents and
    /// must not exceed [`Money::MAX`] in magnitude.
    pub fn parse(description: &str, amount: &str) -> ResultEngine<Draft> {
        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::InvalidDescription(
                "description is empty".to_string(),
            ));
        }

        let amount = Money::parse_major(amount)?;
        if amount.is_zero() {
            return Err(EngineError::ZeroAmount);
        }
        if amount.abs() > Money::MAX {
            return Err(EngineError::InvalidAmount("amount too large".to_string()));
        }

        Ok(Draft {
            description: description.to_string(),
            amount,
        })
    }
}

/// Shorthand for [`Draft::parse`].
pub fn validate(description: &str, amount: &str) -> ResultEngine<Draft> {
    Draft::parse(description, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_description() {
        let draft = validate("  Salary \n", "1000").unwrap();
        assert_eq!(draft.description, "Salary");
        assert_eq!(draft.amount, Money::new(100_000));
    }

    #[test]
    fn draft_rejects_blank_description() {
        assert_eq!(
            validate("   ", "50"),
            Err(EngineError::InvalidDescription(
                "description is empty".to_string()
            ))
        );
        assert!(validate("", "50").is_err());
    }

    #[test]
    fn draft_rejects_bad_amounts() {
        assert!(matches!(
            validate("Gift", "abc"),
            Err(EngineError::InvalidAmount(_))
        ));
        assert!(matches!(validate("Gift", ""), Err(EngineError::InvalidAmount(_))));
        assert_eq!(validate("Gift", "0"), Err(EngineError::ZeroAmount));
        assert_eq!(validate("Gift", "-0.00"), Err(EngineError::ZeroAmount));
        assert_eq!(validate("Gift", "0.004"), Err(EngineError::ZeroAmount));
        assert_eq!(validate("Gift", "0e5"), Err(EngineError::ZeroAmount));
    }

    #[test]
    fn draft_accepts_exponent_notation() {
        assert_eq!(validate("Bonus", "1e3").unwrap().amount, Money::new(100_000));
        assert_eq!(validate("Fee", "-2.5E1").unwrap().amount, Money::new(-2_500));
    }

    #[test]
    fn draft_caps_magnitude() {
        assert_eq!(
            validate("Lottery", "10000000000000").unwrap().amount,
            Money::MAX
        );
        let too_large = Err(EngineError::InvalidAmount("amount too large".to_string()));
        assert_eq!(validate("Lottery", "10000000000000.01"), too_large);
        assert_eq!(validate("Debt", "-2e13"), too_large);
    }

    #[test]
    fn description_is_stored_as_text() {
        let tx = Transaction {
            id: 7,
            description: "Rent".to_string(),
            amount: Money::new(-40_000),
        };
        let json = serde_json::to_string(&tx).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"Rent","amount":-400}"#);

        let legacy: Transaction =
            serde_json::from_str(r#"{"id":7,"description":"Rent","amount":-400}"#).unwrap();
        assert_eq!(legacy, tx);
    }

    #[test]
    fn direction_follows_sign() {
        let income = Transaction {
            id: 1,
            description: "Salary".to_string(),
            amount: Money::new(1),
        };
        assert!(income.is_income());
        assert!(!income.is_expense());
    }
}
