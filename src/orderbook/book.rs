//! Core OrderBook implementation for managing price levels and orders

use super::level::{OrderNode, PriceLevel};
use super::order::{Order, OrderId, Price, Side};
use super::trade::TradeIdGenerator;
use slab::Slab;
use std::collections::{BTreeMap, HashMap};
use tracing::trace;
use uuid::Uuid;

/// The OrderBook maintains the resting buy/sell interest for a single
/// instrument and matches incoming orders under strict price-time priority.
///
/// The book is a single-writer structure: every mutating operation takes
/// `&mut self` and runs to completion before the next may begin, which is
/// exactly the serialization the matching semantics require. Scaling to
/// multiple instruments means running one independent `OrderBook` per
/// instrument, never sharing one across threads.
pub struct OrderBook {
    /// The symbol or identifier for this order book
    pub(super) symbol: String,

    /// Bid side price levels (buy orders), keyed by price; the highest key
    /// is the best bid
    pub(super) bids: BTreeMap<Price, PriceLevel>,

    /// Ask side price levels (sell orders), keyed by price; the lowest key
    /// is the best ask
    pub(super) asks: BTreeMap<Price, PriceLevel>,

    /// Storage for all resting orders. Slab keys are the stable handles the
    /// levels link through and the index points at.
    pub(super) arena: Slab<OrderNode>,

    /// Index from order id to slab key, for O(1) lookup and cancellation.
    /// An entry exists iff the order is resting in exactly one price level.
    pub(super) order_locations: HashMap<OrderId, usize>,

    /// Generator for unique trade identifiers
    pub(super) trade_ids: TradeIdGenerator,

    /// Arrival counter; assigned to each accepted order for time priority
    pub(super) next_seq: u64,

    /// The price at which the most recent trade executed (the maker's price)
    pub(super) last_trade_price: Option<Price>,
}

impl OrderBook {
    /// Create a new, empty order book for the given symbol.
    pub fn new(symbol: &str) -> Self {
        // Unique namespace for this book's trade ids
        let namespace = Uuid::new_v4();

        Self {
            symbol: symbol.to_string(),
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            arena: Slab::new(),
            order_locations: HashMap::new(),
            trade_ids: TradeIdGenerator::new(namespace),
            next_seq: 0,
            last_trade_price: None,
        }
    }

    /// Get the symbol of this order book.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the best bid price, if any.
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.last_key_value().map(|(price, _)| *price)
    }

    /// Get the best ask price, if any.
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.first_key_value().map(|(price, _)| *price)
    }

    /// Get the mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<f64> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid as f64 + ask as f64) / 2.0),
            _ => None,
        }
    }

    /// Get the spread (best ask - best bid).
    pub fn spread(&self) -> Option<Price> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.saturating_sub(bid)),
            _ => None,
        }
    }

    /// The price of the most recent execution, if any.
    pub fn last_trade_price(&self) -> Option<Price> {
        self.last_trade_price
    }

    /// Number of orders currently resting in the book.
    pub fn order_count(&self) -> usize {
        self.order_locations.len()
    }

    /// Whether an order with the given id is currently resting.
    pub fn contains_order(&self, order_id: OrderId) -> bool {
        self.order_locations.contains_key(&order_id)
    }

    /// Get a copy of a resting order by id.
    pub fn get_order(&self, order_id: OrderId) -> Option<Order> {
        let key = *self.order_locations.get(&order_id)?;
        Some(self.arena[key].order.clone())
    }

    /// Get copies of all orders resting at a price level, oldest first.
    pub fn get_orders_at_price(&self, price: Price, side: Side) -> Vec<Order> {
        trace!(
            "Order book {}: getting orders at price {} for side {}",
            self.symbol, price, side
        );
        let level = match side {
            Side::Buy => self.bids.get(&price),
            Side::Sell => self.asks.get(&price),
        };

        let mut orders = Vec::new();
        let Some(level) = level else {
            return orders;
        };

        let mut cursor = level.front();
        while let Some(key) = cursor {
            orders.push(self.arena[key].order.clone());
            cursor = self.arena[key].next_key();
        }
        orders
    }

    /// Unlink a resting order from its level, drop the level if it empties,
    /// and erase the order from the index and the arena. Returns the removed
    /// order. `key` must reference a currently resting order.
    pub(super) fn remove_resting_order(&mut self, key: usize) -> Order {
        let price = self.arena[key].order.price();
        let side = self.arena[key].order.side();

        let level_is_empty = {
            let level = match side {
                Side::Buy => self.bids.get_mut(&price),
                Side::Sell => self.asks.get_mut(&price),
            };
            // The index and the levels agree on order lifetime, so a resting
            // order's level always exists.
            let level = level.expect("resting order must have a price level");
            level.unlink(&mut self.arena, key);
            level.is_empty()
        };

        if level_is_empty {
            match side {
                Side::Buy => self.bids.remove(&price),
                Side::Sell => self.asks.remove(&price),
            };
        }

        let node = self.arena.remove(key);
        self.order_locations.remove(&node.order.id());
        node.order
    }
}
