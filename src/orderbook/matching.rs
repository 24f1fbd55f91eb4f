//! Contains the core matching logic for the order book.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{Price, Quantity, Side, TimeInForce};
use super::trade::{Trade, TradeLeg};
use crate::utils::current_time_millis;
use tracing::trace;

impl OrderBook {
    /// Whether an incoming order at `price` would execute immediately: the
    /// opposite side is non-empty and the price crosses its best level.
    pub(super) fn can_match(&self, side: Side, price: Price) -> bool {
        match side {
            Side::Buy => self.best_ask().is_some_and(|best_ask| price >= best_ask),
            Side::Sell => self.best_bid().is_some_and(|best_bid| price <= best_bid),
        }
    }

    /// Run the matching loop until the book is no longer crossed, then
    /// enforce the fill-and-kill promise on both tops of book.
    ///
    /// While the best bid and best ask cross, their front orders are drained
    /// pairwise: each pairing fills both orders by the smaller remainder and
    /// emits one trade whose legs execute at the resting orders' own prices.
    /// Fully filled orders leave their level and the index immediately, and
    /// a level that empties is removed from its side before the next pairing
    /// is considered, so the loop always works against the true tops.
    pub(super) fn match_orders(&mut self) -> Result<Vec<Trade>, OrderBookError> {
        let mut trades = Vec::new();

        loop {
            let (Some(bid_price), Some(ask_price)) = (self.best_bid(), self.best_ask()) else {
                break;
            };
            if bid_price < ask_price {
                break;
            }

            let (Some(bid_key), Some(ask_key)) = (
                self.bids.get(&bid_price).and_then(|level| level.front()),
                self.asks.get(&ask_price).and_then(|level| level.front()),
            ) else {
                break;
            };

            let bid = &self.arena[bid_key];
            let ask = &self.arena[ask_key];
            let quantity = bid
                .order
                .remaining_quantity()
                .min(ask.order.remaining_quantity());

            let buy_leg = TradeLeg {
                order_id: bid.order.id(),
                price: bid.order.price(),
                quantity,
            };
            let sell_leg = TradeLeg {
                order_id: ask.order.id(),
                price: ask.order.price(),
                quantity,
            };
            // The trade prints at the price of the order that rested first.
            let maker_price = if bid.seq < ask.seq {
                bid.order.price()
            } else {
                ask.order.price()
            };

            self.fill_resting_order(bid_key, quantity)?;
            self.fill_resting_order(ask_key, quantity)?;
            self.last_trade_price = Some(maker_price);

            let trade = Trade {
                trade_id: self.trade_ids.next_id(),
                buy: buy_leg,
                sell: sell_leg,
                timestamp: current_time_millis(),
            };
            trace!(
                "Order book {}: matched {} units, buy order {} at {} / sell order {} at {}",
                self.symbol,
                quantity,
                trade.buy.order_id,
                trade.buy.price,
                trade.sell.order_id,
                trade.sell.price
            );
            trades.push(trade);
        }

        // A fill-and-kill order that could not be fully satisfied must not
        // rest, even when unrelated liquidity below it remains unmatched.
        self.cancel_immediate_top(Side::Buy);
        self.cancel_immediate_top(Side::Sell);

        Ok(trades)
    }

    /// Fill a resting order by `quantity`, maintaining the level aggregate,
    /// and remove the order (and its level, if emptied) once fully filled.
    fn fill_resting_order(&mut self, key: usize, quantity: Quantity) -> Result<(), OrderBookError> {
        self.arena[key].order.fill(quantity)?;

        let price = self.arena[key].order.price();
        let side = self.arena[key].order.side();
        let level = match side {
            Side::Buy => self.bids.get_mut(&price),
            Side::Sell => self.asks.get_mut(&price),
        };
        if let Some(level) = level {
            level.reduce_quantity(quantity);
        }

        if self.arena[key].order.is_filled() {
            self.remove_resting_order(key);
        }
        Ok(())
    }

    /// If the order at the top of `side` is fill-and-kill, cancel it.
    fn cancel_immediate_top(&mut self, side: Side) {
        let top = match side {
            Side::Buy => self.bids.last_key_value(),
            Side::Sell => self.asks.first_key_value(),
        };
        let Some(front) = top.and_then(|(_, level)| level.front()) else {
            return;
        };

        if self.arena[front].order.time_in_force() == TimeInForce::Fak {
            let order = self.remove_resting_order(front);
            trace!(
                "Order book {}: discarded fill-and-kill remainder of order {} ({} of {} unfilled)",
                self.symbol,
                order.id(),
                order.remaining_quantity(),
                order.quantity()
            );
        }
    }
}
