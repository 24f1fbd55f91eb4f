//! Order identity, side, time-in-force and the resting order itself.

use super::error::OrderBookError;
use std::fmt;
use std::str::FromStr;

/// Caller-assigned order identifier, unique among all orders currently
/// known to the book.
pub type OrderId = u64;

/// Price in ticks.
pub type Price = u64;

/// Quantity in minimum tradable units.
pub type Quantity = u64;

/// Which side of the book an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Buy side (bids)
    Buy,
    /// Sell side (asks)
    Sell,
}

impl Side {
    /// Returns the opposite side.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// How long an order is allowed to remain in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeInForce {
    /// Good-till-cancel: rests until fully filled or explicitly cancelled.
    Gtc,
    /// Fill-and-kill: executes immediately against existing liquidity; any
    /// unfilled remainder is discarded rather than rested.
    Fak,
}

impl TimeInForce {
    /// Whether this time-in-force demands immediate execution and must not
    /// remain in the book past the call that submitted it.
    pub fn is_immediate(&self) -> bool {
        matches!(self, TimeInForce::Fak)
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeInForce::Gtc => write!(f, "GTC"),
            TimeInForce::Fak => write!(f, "FAK"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GTC" => Ok(TimeInForce::Gtc),
            "FAK" => Ok(TimeInForce::Fak),
            _ => Err(format!("Invalid time in force: {s}")),
        }
    }
}

/// A limit order as tracked by the book: immutable identity, side, price and
/// original quantity, plus the mutable remaining quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    side: Side,
    price: Price,
    quantity: Quantity,
    remaining: Quantity,
    time_in_force: TimeInForce,
    timestamp: u64,
}

impl Order {
    /// Create a new, unfilled order.
    pub fn new(
        id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        time_in_force: TimeInForce,
        timestamp: u64,
    ) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            remaining: quantity,
            time_in_force,
            timestamp,
        }
    }

    /// The caller-assigned identifier.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The side of the book this order belongs to.
    pub fn side(&self) -> Side {
        self.side
    }

    /// The limit price in ticks.
    pub fn price(&self) -> Price {
        self.price
    }

    /// The original quantity at submission.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The quantity still open for execution.
    pub fn remaining_quantity(&self) -> Quantity {
        self.remaining
    }

    /// The quantity executed so far.
    pub fn filled_quantity(&self) -> Quantity {
        self.quantity - self.remaining
    }

    /// The order's time-in-force.
    pub fn time_in_force(&self) -> TimeInForce {
        self.time_in_force
    }

    /// Milliseconds since epoch at which the book accepted the order.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Whether the order is fully executed. A filled order is terminal and
    /// must no longer appear in any price level or index.
    pub fn is_filled(&self) -> bool {
        self.remaining == 0
    }

    /// Reduce the remaining quantity by `quantity`.
    ///
    /// The matching loop always computes fill sizes as the minimum of both
    /// sides' remainders, so a request exceeding the remaining quantity can
    /// only come from an engine bug and is reported as a hard error.
    pub(crate) fn fill(&mut self, quantity: Quantity) -> Result<(), OrderBookError> {
        if quantity > self.remaining {
            return Err(OrderBookError::FillExceedsRemaining {
                order_id: self.id,
                requested: quantity,
                remaining: self.remaining,
            });
        }

        self.remaining -= quantity;
        Ok(())
    }
}
