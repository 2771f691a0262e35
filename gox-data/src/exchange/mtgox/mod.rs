use reqwest::header::CONTENT_TYPE;

use crate::{
    error::DownloadError,
    model::{page::TradePage, trade::Currency},
    shared::tid::TradeId,
};

use self::model::GoxTradesResponse;

use super::{TradeSource, Validator};

pub mod model;

pub const HTTP_TRADES_URL_MTGOX: &str = "https://data.mtgox.com/api/1/BTC";

/*----- */
// MtGox public data
/*----- */
#[derive(Debug)]
pub struct GoxPublicData {
    http_client: reqwest::blocking::Client,
    base_url: String,
}

impl GoxPublicData {
    pub fn new() -> Self {
        Self::with_base_url(HTTP_TRADES_URL_MTGOX)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::blocking::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// One fetch attempt for the trade history page at or after `since`.
    pub fn get_trades(
        &self,
        currency: &Currency,
        since: TradeId,
    ) -> Result<GoxTradesResponse, DownloadError> {
        let trades_url = format!("{}{}/trades?since={}", self.base_url, currency.code(), since);
        let response = self.http_client.get(&trades_url).send()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_owned();
        if !content_type.starts_with("application/json") {
            return Err(DownloadError::InvalidContentType { content_type });
        }

        let payload = response.text()?;
        serde_json::from_str::<GoxTradesResponse>(&payload)
            .map_err(|error| DownloadError::Deserialise { error, payload })?
            .validate()
    }
}

impl Default for GoxPublicData {
    fn default() -> Self {
        Self::new()
    }
}

impl TradeSource for GoxPublicData {
    fn fetch_page(
        &self,
        currency: &Currency,
        since: TradeId,
    ) -> Result<TradePage, DownloadError> {
        self.get_trades(currency, since).map(TradePage::from)
    }
}
