use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::shared::tid::TradeId;

/// Amount scaling is currency independent, amounts are always in BTC.
pub const AMOUNT_SCALE: f64 = 0.00000001;

/*----- */
// Currency
/*----- */
// Scale factors per https://en.bitcoin.it/wiki/MtGox/API#Number_Formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Sek,
    Btc,
    Other(String),
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        match code.to_uppercase().as_str() {
            "USD" => Currency::Usd,
            "EUR" => Currency::Eur,
            "GBP" => Currency::Gbp,
            "JPY" => Currency::Jpy,
            "SEK" => Currency::Sek,
            "BTC" => Currency::Btc,
            other => Currency::Other(other.to_owned()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Sek => "SEK",
            Currency::Btc => "BTC",
            Currency::Other(code) => code,
        }
    }

    pub fn price_scale(&self) -> f64 {
        match self {
            Currency::Jpy | Currency::Sek => 0.001,
            Currency::Btc => 0.00000001,
            _ => 0.00001,
        }
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Currency::from_code(&code))
    }
}

/*----- */
// Side
/*----- */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => f.write_str("bid"),
            Side::Ask => f.write_str("ask"),
        }
    }
}

/*----- */
// Trade
/*----- */
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: TradeId,
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub amount: f64,
    pub side: Side,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd"), Currency::Usd);
        assert_eq!(Currency::from_code("JPY"), Currency::Jpy);
        assert_eq!(
            Currency::from_code("pln"),
            Currency::Other("PLN".to_string())
        );
        assert_eq!(Currency::from_code("pln").code(), "PLN");
    }

    #[test]
    fn test_price_scales() {
        assert_eq!(Currency::Jpy.price_scale(), 0.001);
        assert_eq!(Currency::Sek.price_scale(), 0.001);
        assert_eq!(Currency::Btc.price_scale(), 0.00000001);
        assert_eq!(Currency::Usd.price_scale(), 0.00001);
        // Unrecognized currencies fall back to the default scale.
        assert_eq!(Currency::from_code("XYZ").price_scale(), 0.00001);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Bid.to_string(), "bid");
        assert_eq!(Side::Ask.to_string(), "ask");
    }
}
