//! Order book depth snapshot for market data

use super::book::OrderBook;
use super::order::{Price, Quantity};
use crate::utils::current_time_millis;
use serde::{Deserialize, Serialize};

/// Aggregated view of one price level: its price and the sum of remaining
/// quantity over all orders resting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Price of the level
    pub price: Price,
    /// Total remaining quantity at this level
    pub quantity: Quantity,
    /// Number of orders resting at this level
    pub order_count: usize,
}

/// A snapshot of the order book's depth at a specific point in time.
///
/// Bid levels are ordered best-first (descending price), ask levels
/// best-first (ascending price) — the same order matching priority walks
/// them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// The symbol or identifier for this order book
    pub symbol: String,

    /// Timestamp when the snapshot was created (milliseconds since epoch)
    pub timestamp: u64,

    /// Bid price levels, best (highest) first
    pub bids: Vec<LevelSnapshot>,

    /// Ask price levels, best (lowest) first
    pub asks: Vec<LevelSnapshot>,
}

impl OrderBookSnapshot {
    /// Get the best bid price and quantity.
    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.first().map(|level| (level.price, level.quantity))
    }

    /// Get the best ask price and quantity.
    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.first().map(|level| (level.price, level.quantity))
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some((bid_price as f64 + ask_price as f64) / 2.0)
            }
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some((bid_price, _)), Some((ask_price, _))) => {
                Some(ask_price.saturating_sub(bid_price))
            }
            _ => None,
        }
    }

    /// Total resting quantity on the bid side.
    pub fn total_bid_quantity(&self) -> Quantity {
        self.bids.iter().map(|level| level.quantity).sum()
    }

    /// Total resting quantity on the ask side.
    pub fn total_ask_quantity(&self) -> Quantity {
        self.asks.iter().map(|level| level.quantity).sum()
    }
}

impl OrderBook {
    /// Project the book's depth into per-level (price, quantity) aggregates,
    /// up to `depth` levels per side. Pure read; pass `usize::MAX` for the
    /// full book.
    pub fn create_snapshot(&self, depth: usize) -> OrderBookSnapshot {
        let bids = self
            .bids
            .iter()
            .rev()
            .take(depth)
            .map(|(price, level)| LevelSnapshot {
                price: *price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect();

        let asks = self
            .asks
            .iter()
            .take(depth)
            .map(|(price, level)| LevelSnapshot {
                price: *price,
                quantity: level.total_quantity(),
                order_count: level.order_count(),
            })
            .collect();

        OrderBookSnapshot {
            symbol: self.symbol.clone(),
            timestamp: current_time_millis(),
            bids,
            asks,
        }
    }
}
