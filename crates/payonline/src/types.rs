//! Value types rendered into the payment page URL and query parameters.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Localized variant of the hosted payment page, rendered as the language
/// path segment of the page URL.
#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    /// English page variant.
    #[default]
    En,
    /// Russian page variant.
    Ru,
}

/// Payment instrument the hosted page is opened for.
///
/// The processor serves each instrument under its own path segment; the
/// default card page lives directly under `payment/`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card payment page, contributing no extra path segment.
    #[default]
    Default,
    /// Instrument-specific page, addressed by its URL identifier.
    Named(String),
}

impl PaymentMethod {
    /// URL path segment contributed by the selector.
    ///
    /// Named instruments keep the same directory-style trailing slash as the
    /// bare `payment/` path.
    pub fn url_segment(&self) -> String {
        match self {
            Self::Default => String::new(),
            Self::Named(id) => format!("{id}/"),
        }
    }
}

/// Payment amount, rendered as a raw fixed-point numeric string with no
/// locale formatting and no currency symbol.
///
/// The scale the amount is constructed with is preserved, so `10.00` renders
/// as `"10.00"`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Amount(Decimal);

impl Amount {
    /// Wraps a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Decimal> for Amount {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settlement currencies accepted by the processor, rendered as the ISO 4217
/// code.
#[allow(missing_docs)] // The ISO codes are self-describing
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    Byn,
    Eur,
    Gbp,
    Kzt,
    Rub,
    Uah,
    Usd,
}
