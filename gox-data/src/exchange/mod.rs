use crate::{
    error::DownloadError,
    model::{page::TradePage, trade::Currency},
    shared::tid::TradeId,
};

pub mod mtgox;

/*----- */
// Validator
/*----- */
/// Validates a response envelope before its payload is used.
pub trait Validator {
    fn validate(self) -> Result<Self, DownloadError>
    where
        Self: Sized;
}

/*----- */
// Trade source
/*----- */
/// One page fetch attempt: up to the venue page limit of trades at or after
/// `since`, already filtered down to primary currency entries. Retry policy
/// lives with the caller, one call is one attempt.
pub trait TradeSource {
    fn fetch_page(&self, currency: &Currency, since: TradeId)
        -> Result<TradePage, DownloadError>;
}
