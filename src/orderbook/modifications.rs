//! Order modification, expressed as cancel-then-reinsert.

use super::book::OrderBook;
use super::error::OrderBookError;
use super::order::{OrderId, Price, Quantity, Side};
use super::trade::Trade;
use tracing::trace;

/// The replacement fields for an existing order. The order's time-in-force
/// is not modifiable and is carried over from the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderModify {
    /// Id of the order to replace
    pub order_id: OrderId,
    /// New side
    pub side: Side,
    /// New limit price
    pub price: Price,
    /// New (original) quantity
    pub quantity: Quantity,
}

impl OrderModify {
    /// Create a modification request.
    pub fn new(order_id: OrderId, side: Side, price: Price, quantity: Quantity) -> Self {
        Self {
            order_id,
            side,
            price,
            quantity,
        }
    }
}

impl OrderBook {
    /// Replace a resting order with new side/price/quantity, keeping its id
    /// and original time-in-force, and return any trades the replacement
    /// executed immediately.
    ///
    /// The replacement is a cancel followed by a fresh submission, so the
    /// order always re-enters at the back of whatever level it lands in —
    /// queue-time priority is lost even when the price is unchanged. An
    /// unknown id is a silent no-op, consistent with add and cancel.
    pub fn modify_order(&mut self, update: OrderModify) -> Result<Vec<Trade>, OrderBookError> {
        trace!(
            "Order book {}: modifying order {} to {} {}@{}",
            self.symbol, update.order_id, update.side, update.quantity, update.price
        );

        let Some(existing) = self.get_order(update.order_id) else {
            trace!(
                "Order book {}: order {} not found, modify ignored",
                self.symbol, update.order_id
            );
            return Ok(Vec::new());
        };
        let time_in_force = existing.time_in_force();

        self.cancel_order(update.order_id);
        self.add_limit_order(
            update.order_id,
            update.price,
            update.quantity,
            update.side,
            time_in_force,
        )
    }
}
