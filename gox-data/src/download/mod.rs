use std::{io::Write, path::Path};

use tracing::{error, info};

use crate::{
    error::DownloadError,
    exchange::{mtgox::GoxPublicData, TradeSource},
    model::{
        page::TradePage,
        trade::{Currency, Trade},
    },
    shared::tid::{tid_to_datetime, TidRange, TradeId},
    sink::TradesFile,
};

pub const DEFAULT_FETCH_RETRIES: u32 = 3;

/*----- */
// Page fetch with bounded retry
/*----- */
// Transient failures (transport errors, bad content type, non-success
// envelopes) are retried up to `retries` times, so total attempts =
// retries + 1. Decode failures propagate immediately, retrying cannot fix
// malformed upstream data.
fn fetch_page_with_retry<Source>(
    source: &Source,
    currency: &Currency,
    since: TradeId,
    retries: u32,
) -> Result<TradePage, DownloadError>
where
    Source: TradeSource,
{
    info!(since = %tid_to_datetime(since), "downloading trades");

    let mut retries_left = retries;
    loop {
        match source.fetch_page(currency, since) {
            Ok(page) => {
                info!(trades = page.len(), "got trades page");
                return Ok(page);
            }
            Err(error) => {
                if !error.is_transient() || retries_left == 0 {
                    return Err(error);
                }
                error!(%error, "trades fetch failed. Retrying...");
                retries_left -= 1;
            }
        }
    }
}

/*----- */
// Range walker
/*----- */
/// Walks the half-open id range `[tid_begin, tid_end)`, appending every
/// primary trade to the sink exactly once. The cursor advances to
/// `last_id + 1` after each full page, so no id is requested twice and no
/// trade crosses a page boundary twice.
pub fn download_range_with<Source, W>(
    source: &Source,
    sink: &mut TradesFile<W>,
    currency: &Currency,
    tid_begin: TradeId,
    tid_end: TradeId,
) -> Result<(), DownloadError>
where
    Source: TradeSource,
    W: Write,
{
    let mut next_tid = tid_begin;

    loop {
        let page = fetch_page_with_retry(source, currency, next_tid, DEFAULT_FETCH_RETRIES)?;

        let Some(last) = page.last() else {
            // Nothing upstream at or after the cursor, history is exhausted.
            return Ok(());
        };

        if last < tid_end {
            // Page is fully in range but has not reached the boundary yet.
            sink.append(page.trades())?;
            next_tid = last + 1;
        } else {
            // Final page crosses the boundary, keep the in-range subset only.
            let in_range = page
                .into_trades()
                .into_iter()
                .filter(|trade| trade.id < tid_end)
                .collect::<Vec<Trade>>();
            sink.append(&in_range)?;
            return Ok(());
        }
    }
}

/*----- */
// Public entry points
/*----- */
pub fn download_range(
    currency: &Currency,
    tid_begin: TradeId,
    tid_end: TradeId,
    csv_path: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let source = GoxPublicData::new();
    let mut sink = TradesFile::create(csv_path)?;
    download_range_with(&source, &mut sink, currency, tid_begin, tid_end)
}

/// Download all trades for a given year. The venue returns no more than
/// ~1000 trades per request, so this can take a while.
pub fn download_year(
    currency: &Currency,
    year: i32,
    csv_path: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let range = TidRange::year(year)?;
    download_range(currency, range.begin, range.end, csv_path)
}

pub fn download_month(
    currency: &Currency,
    year: i32,
    month: u32,
    csv_path: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let range = TidRange::month(year, month)?;
    download_range(currency, range.begin, range.end, csv_path)
}

pub fn download_day(
    currency: &Currency,
    year: i32,
    month: u32,
    day: u32,
    csv_path: impl AsRef<Path>,
) -> Result<(), DownloadError> {
    let range = TidRange::day(year, month, day)?;
    download_range(currency, range.begin, range.end, csv_path)
}
