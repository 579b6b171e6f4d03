//! Currency amounts as received from the backend.
//!
//! The store trades in a single currency, so an amount is a bare decimal.
//! Display uses a fixed `$` prefix and keeps whatever scale the backend
//! sent: `450` renders as `$450`, `12.50` as `$12.50`.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_source_scale() {
        assert_eq!(Money::from(450_i64).to_string(), "$450");
        assert_eq!(Money::new(Decimal::new(1250, 2)).to_string(), "$12.50");
        assert_eq!(Money::ZERO.to_string(), "$0");
    }

    #[test]
    fn test_decodes_json_numbers_and_strings() {
        let from_number: Money = serde_json::from_str("3.99").unwrap();
        let from_string: Money = serde_json::from_str("\"3.99\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.to_string(), "$3.99");
    }
}
