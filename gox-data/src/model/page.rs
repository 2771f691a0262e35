use crate::shared::tid::TradeId;

use super::trade::Trade;

/*----- */
// Trade page
/*----- */
/// One filtered page of trades as returned by a single history fetch.
/// `first` and `last` are the min/max trade ids of the kept set, computed by
/// numeric comparison since the venue does not guarantee page ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TradePage {
    trades: Vec<Trade>,
    first: Option<TradeId>,
    last: Option<TradeId>,
}

impl TradePage {
    pub fn from_trades(trades: Vec<Trade>) -> Self {
        let mut first = None;
        let mut last = None;

        for trade in trades.iter() {
            if first.is_none() || Some(trade.id) < first {
                first = Some(trade.id);
            }
            if last.is_none() || Some(trade.id) > last {
                last = Some(trade.id);
            }
        }

        Self {
            trades,
            first,
            last,
        }
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn into_trades(self) -> Vec<Trade> {
        self.trades
    }

    pub fn first(&self) -> Option<TradeId> {
        self.first
    }

    pub fn last(&self) -> Option<TradeId> {
        self.last
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}
