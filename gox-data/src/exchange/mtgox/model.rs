use serde::Deserialize;

use crate::{
    error::DownloadError,
    exchange::Validator,
    model::{
        page::TradePage,
        trade::{Currency, Side, Trade, AMOUNT_SCALE},
    },
    shared::{
        de::{de_i64_str_or_int, de_u64_str_or_int},
        tid::tid_to_datetime,
    },
};

/*----- */
// Trade history entry
/*----- */
// Reference: https://en.bitcoin.it/wiki/MtGox/API/HTTP/v1#Multi_currency_trades
#[derive(Debug, Deserialize, PartialEq)]
pub struct GoxTradeEntry {
    #[serde(deserialize_with = "de_u64_str_or_int")]
    pub tid: u64,
    pub price_currency: Currency,
    #[serde(deserialize_with = "de_i64_str_or_int")]
    pub price_int: i64,
    #[serde(deserialize_with = "de_i64_str_or_int")]
    pub amount_int: i64,
    pub trade_type: Side,
    pub primary: String,
}

impl GoxTradeEntry {
    // A trade can appear in more than one currency. Only entries with
    // primary = Y are canonical, the rest are duplicate echoes.
    pub fn is_primary(&self) -> bool {
        self.primary == "Y"
    }
}

impl From<GoxTradeEntry> for Trade {
    fn from(entry: GoxTradeEntry) -> Self {
        Self {
            id: entry.tid,
            timestamp: tid_to_datetime(entry.tid),
            price: entry.price_int as f64 * entry.price_currency.price_scale(),
            amount: entry.amount_int as f64 * AMOUNT_SCALE,
            side: entry.trade_type,
        }
    }
}

/*----- */
// Trade history response envelope
/*----- */
#[derive(Debug, Deserialize, PartialEq)]
pub struct GoxTradesResponse {
    pub result: String,
    #[serde(rename = "return")]
    pub entries: Vec<GoxTradeEntry>,
}

impl Validator for GoxTradesResponse {
    fn validate(self) -> Result<Self, DownloadError>
    where
        Self: Sized,
    {
        if self.result == "success" {
            Ok(self)
        } else {
            Err(DownloadError::RequestFailed {
                result: self.result,
            })
        }
    }
}

impl From<GoxTradesResponse> for TradePage {
    fn from(response: GoxTradesResponse) -> Self {
        let trades = response
            .entries
            .into_iter()
            .filter(GoxTradeEntry::is_primary)
            .map(Trade::from)
            .collect();

        TradePage::from_trades(trades)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trades_response_de() {
        let payload = "{\"result\":\"success\",\"return\":[{\"tid\":\"1356998401000000\",\"price_currency\":\"USD\",\"price_int\":\"1351000\",\"amount_int\":\"100000000\",\"trade_type\":\"bid\",\"primary\":\"Y\"},{\"tid\":1356998401000000,\"price_currency\":\"EUR\",\"price_int\":1024000,\"amount_int\":100000000,\"trade_type\":\"bid\",\"primary\":\"N\"}]}";
        let response = serde_json::from_str::<GoxTradesResponse>(payload).unwrap();

        let expected = GoxTradesResponse {
            result: "success".to_string(),
            entries: vec![
                GoxTradeEntry {
                    tid: 1356998401000000,
                    price_currency: Currency::Usd,
                    price_int: 1351000,
                    amount_int: 100000000,
                    trade_type: Side::Bid,
                    primary: "Y".to_string(),
                },
                GoxTradeEntry {
                    tid: 1356998401000000,
                    price_currency: Currency::Eur,
                    price_int: 1024000,
                    amount_int: 100000000,
                    trade_type: Side::Bid,
                    primary: "N".to_string(),
                },
            ],
        };

        assert_eq!(response, expected)
    }

    #[test]
    fn test_validate() {
        let success = GoxTradesResponse {
            result: "success".to_string(),
            entries: vec![],
        };
        assert!(success.validate().is_ok());

        let failure = GoxTradesResponse {
            result: "error".to_string(),
            entries: vec![],
        };
        match failure.validate() {
            Err(DownloadError::RequestFailed { result }) => assert_eq!(result, "error"),
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_entry_to_trade_btc_scaling() {
        let entry = GoxTradeEntry {
            tid: 1000000000000,
            price_currency: Currency::Btc,
            price_int: 5000000000,
            amount_int: 100000000,
            trade_type: Side::Bid,
            primary: "Y".to_string(),
        };

        let trade = Trade::from(entry);
        assert_eq!(trade.id, 1000000000000);
        assert_eq!(trade.price, 50.0);
        assert_eq!(trade.amount, 1.0);
        assert_eq!(trade.side, Side::Bid);
        assert_eq!(trade.timestamp, tid_to_datetime(1000000000000));
    }

    #[test]
    fn test_entry_to_trade_jpy_scaling() {
        let entry = GoxTradeEntry {
            tid: 1356998401000000,
            price_currency: Currency::Jpy,
            price_int: 1200000,
            amount_int: 50000000,
            trade_type: Side::Ask,
            primary: "Y".to_string(),
        };

        let trade = Trade::from(entry);
        assert_eq!(trade.price, 1200.0);
        assert_eq!(trade.amount, 0.5);
    }

    #[test]
    fn test_page_filter_drops_non_primary() {
        let payload = "{\"result\":\"success\",\"return\":[{\"tid\":\"300\",\"price_currency\":\"USD\",\"price_int\":\"1351000\",\"amount_int\":\"100000000\",\"trade_type\":\"bid\",\"primary\":\"Y\"},{\"tid\":\"300\",\"price_currency\":\"EUR\",\"price_int\":\"1024000\",\"amount_int\":\"100000000\",\"trade_type\":\"bid\",\"primary\":\"N\"},{\"tid\":\"100\",\"price_currency\":\"USD\",\"price_int\":\"1350000\",\"amount_int\":\"200000000\",\"trade_type\":\"ask\",\"primary\":\"Y\"}]}";
        let response = serde_json::from_str::<GoxTradesResponse>(payload).unwrap();
        let page = TradePage::from(response);

        assert_eq!(page.len(), 2);
        assert_eq!(page.first(), Some(100));
        assert_eq!(page.last(), Some(300));
        assert_eq!(page.trades()[0].id, 300);
        assert_eq!(page.trades()[1].id, 100);
    }

    #[test]
    fn test_page_filter_deterministic() {
        let payload = "{\"result\":\"success\",\"return\":[{\"tid\":\"300\",\"price_currency\":\"USD\",\"price_int\":\"1351000\",\"amount_int\":\"100000000\",\"trade_type\":\"bid\",\"primary\":\"Y\"},{\"tid\":\"100\",\"price_currency\":\"USD\",\"price_int\":\"1350000\",\"amount_int\":\"200000000\",\"trade_type\":\"ask\",\"primary\":\"N\"}]}";

        let first_pass =
            TradePage::from(serde_json::from_str::<GoxTradesResponse>(payload).unwrap());
        let second_pass =
            TradePage::from(serde_json::from_str::<GoxTradesResponse>(payload).unwrap());

        assert_eq!(first_pass, second_pass);
        assert_eq!(first_pass.len(), 1);
    }

    #[test]
    fn test_page_filter_all_non_primary() {
        let payload = "{\"result\":\"success\",\"return\":[{\"tid\":\"300\",\"price_currency\":\"EUR\",\"price_int\":\"1024000\",\"amount_int\":\"100000000\",\"trade_type\":\"bid\",\"primary\":\"N\"}]}";
        let response = serde_json::from_str::<GoxTradesResponse>(payload).unwrap();
        let page = TradePage::from(response);

        assert!(page.is_empty());
        assert_eq!(page.last(), None);
    }
}
