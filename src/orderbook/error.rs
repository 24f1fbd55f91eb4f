//! Order book error types

use super::order::{OrderId, Quantity};
use std::fmt;

/// Errors that can occur within the OrderBook.
///
/// Ordinary business outcomes (duplicate id, unknown id, an unmatchable
/// fill-and-kill order) are not errors: the operations report them as empty
/// results and leave the book untouched. The variants here signal internal
/// invariant breaches that no legitimate input sequence can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// The matching loop attempted to fill an order beyond its remaining
    /// quantity. Indicates a bug in the engine, never caller misuse.
    FillExceedsRemaining {
        /// Order the fill was directed at
        order_id: OrderId,
        /// Quantity the loop tried to fill
        requested: Quantity,
        /// Quantity actually remaining on the order
        remaining: Quantity,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::FillExceedsRemaining {
                order_id,
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "Order {} cannot be filled for {} units, only {} remaining",
                    order_id, requested, remaining
                )
            }
        }
    }
}

impl std::error::Error for OrderBookError {}
