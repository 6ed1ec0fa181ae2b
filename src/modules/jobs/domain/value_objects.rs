/// Value objects for jobs domain
use super::errors::JobError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

/// Non-negative money amount with exact decimal arithmetic
///
/// Displays without trailing zeros (`298`, `24.99`), which is how prices are
/// written in job titles. Parsed prices are capped at [`Money::MAX_PRICE`];
/// sums saturate instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Largest price a single line item may carry (12 integer digits)
    pub const MAX_PRICE: Money = Money(Decimal::from_parts(276_447_231, 23_283, 0, false, 2));

    /// Parse a price as typed into a form
    pub fn parse(text: &str) -> Result<Self, JobError> {
        let malformed = || JobError::MalformedPrice {
            value: text.to_string(),
        };

        let amount = Decimal::from_str(text.trim()).map_err(|_| malformed())?;
        if amount.is_zero() {
            return Ok(Money::ZERO);
        }
        if amount.is_sign_negative() || amount > Self::MAX_PRICE.0 {
            return Err(malformed());
        }

        Ok(Money(amount))
    }

    /// Whole currency units
    pub fn from_units(units: u32) -> Self {
        Money(Decimal::from(units))
    }

}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Money::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.copied().sum()
    }
}

/// How a paid job was settled
///
/// `Unset` is the empty selection and is written as `""` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentType {
    #[default]
    #[serde(rename = "")]
    Unset,
    Card,
    Check,
    Cash,
    Zelle,
}

impl PaymentType {
    pub fn is_set(&self) -> bool {
        !matches!(self, PaymentType::Unset)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Unset => write!(f, ""),
            PaymentType::Card => write!(f, "Card"),
            PaymentType::Check => write!(f, "Check"),
            PaymentType::Cash => write!(f, "Cash"),
            PaymentType::Zelle => write!(f, "Zelle"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = JobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(PaymentType::Unset),
            "card" => Ok(PaymentType::Card),
            "check" => Ok(PaymentType::Check),
            "cash" => Ok(PaymentType::Cash),
            "zelle" => Ok(PaymentType::Zelle),
            _ => Err(JobError::InvalidPaymentType(s.to_string())),
        }
    }
}
