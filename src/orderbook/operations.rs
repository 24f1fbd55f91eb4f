//! Order book operations for adding and cancelling orders

use super::book::OrderBook;
use super::error::OrderBookError;
use super::level::OrderNode;
use super::order::{Order, OrderId, Price, Quantity, Side, TimeInForce};
use super::trade::Trade;
use crate::utils::current_time_millis;
use tracing::trace;

impl OrderBook {
    /// Submit a limit order and return the trades it executed immediately.
    ///
    /// The order matches against the opposite side's best levels as far as
    /// its price allows; any remainder rests at the back of its price level
    /// unless the order is fill-and-kill.
    ///
    /// Business rejections are silent: a duplicate id, or a fill-and-kill
    /// order that cannot execute at all, returns an empty trade list and
    /// leaves the book untouched. `Err` signals an internal invariant
    /// breach, never a caller mistake.
    pub fn add_limit_order(
        &mut self,
        id: OrderId,
        price: Price,
        quantity: Quantity,
        side: Side,
        time_in_force: TimeInForce,
    ) -> Result<Vec<Trade>, OrderBookError> {
        trace!(
            "Order book {}: adding limit order {} {} {}@{} {}",
            self.symbol, id, side, quantity, price, time_in_force
        );

        if self.order_locations.contains_key(&id) {
            trace!("Order book {}: order {} already exists, ignored", self.symbol, id);
            return Ok(Vec::new());
        }

        // A fill-and-kill order that cannot execute at all would rest with
        // zero fills, which its type forbids; reject it up front.
        if time_in_force.is_immediate() && !self.can_match(side, price) {
            trace!(
                "Order book {}: fill-and-kill order {} cannot match, rejected",
                self.symbol, id
            );
            return Ok(Vec::new());
        }

        let order = Order::new(id, side, price, quantity, time_in_force, current_time_millis());
        self.insert_resting_order(order);
        self.match_orders()
    }

    /// Cancel a resting order by id and return it, idempotently: an unknown
    /// or already-removed id is a no-op returning `None`.
    pub fn cancel_order(&mut self, order_id: OrderId) -> Option<Order> {
        let key = *self.order_locations.get(&order_id)?;
        let order = self.remove_resting_order(key);
        trace!(
            "Order book {}: cancelled order {} with {} remaining",
            self.symbol,
            order_id,
            order.remaining_quantity()
        );
        Some(order)
    }

    /// Place an order at the back of its price level (creating the level if
    /// absent) and record it in the index.
    pub(super) fn insert_resting_order(&mut self, order: Order) {
        let price = order.price();
        let side = order.side();
        let id = order.id();

        let seq = self.next_seq;
        self.next_seq += 1;

        let key = self.arena.insert(OrderNode::new(order, seq));
        let level = match side {
            Side::Buy => self.bids.entry(price).or_default(),
            Side::Sell => self.asks.entry(price).or_default(),
        };
        level.push_back(&mut self.arena, key);
        self.order_locations.insert(id, key);
    }
}
