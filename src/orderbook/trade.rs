//! Trade records produced by the matching loop.

use super::order::{OrderId, Price, Quantity};
use uuid::Uuid;

/// One side's view of an execution: which order traded, at what price, and
/// for how much.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeLeg {
    /// The participating order
    pub order_id: OrderId,
    /// The price this leg executed at (the resting order's own price)
    pub price: Price,
    /// The matched amount
    pub quantity: Quantity,
}

/// The immutable record of a single execution between one buy and one sell
/// order. Both legs always carry the same quantity; the prices may differ
/// because each leg executes at its own order's resting price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Unique identifier for this execution, deterministic per book instance
    pub trade_id: Uuid,
    /// The buy side of the execution
    pub buy: TradeLeg,
    /// The sell side of the execution
    pub sell: TradeLeg,
    /// Milliseconds since epoch at which the trade was produced
    pub timestamp: u64,
}

impl Trade {
    /// The matched quantity, equal on both legs.
    pub fn quantity(&self) -> Quantity {
        self.buy.quantity
    }
}

/// Generator for unique trade identifiers.
///
/// Each book instance owns a random namespace; trade ids are derived from it
/// and a monotonically increasing counter, so ids are unique per instance
/// and reproducible given the same namespace and sequence of matches.
#[derive(Debug)]
pub(super) struct TradeIdGenerator {
    namespace: Uuid,
    counter: u64,
}

impl TradeIdGenerator {
    /// Create a new generator with the given namespace.
    pub(super) fn new(namespace: Uuid) -> Self {
        Self {
            namespace,
            counter: 0,
        }
    }

    /// Produce the next trade id in the sequence.
    pub(super) fn next_id(&mut self) -> Uuid {
        self.counter += 1;
        Uuid::new_v5(&self.namespace, &self.counter.to_le_bytes())
    }
}
