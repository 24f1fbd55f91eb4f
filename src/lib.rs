//! # Single-Writer Limit Order Matching Engine
//!
//! A continuous-auction limit order book for a single instrument, written in
//! Rust. For every incoming order the engine determines how much executes
//! immediately against the opposite side, at what price and quantity, under
//! strict price-time priority; any unmatched remainder rests in the book
//! unless the order's time-in-force forbids it.
//!
//! ## Key Features
//!
//! - **Price-time priority**: better price always matches first; among equal
//!   prices, the earlier arrival matches first. Ties are never broken any
//!   other way.
//!
//! - **O(1) cancellation**: every resting order has a stable slab handle;
//!   removing one order never moves or invalidates its siblings in the same
//!   price level.
//!
//! - **Two order types**: good-till-cancel orders rest until filled or
//!   cancelled; fill-and-kill orders execute immediately and never survive
//!   the call that submitted them.
//!
//! - **Depth snapshots**: serializable per-level (price, quantity)
//!   aggregates in matching-priority order, for reporting and market data.
//!
//! ## Design
//!
//! The engine is deliberately a single-writer structure: every mutating
//! operation takes `&mut self`, completes synchronously, and leaves the book
//! uncrossed (either one side empty or best bid < best ask). There are no
//! internal locks or atomics — serialization of calls is the caller's
//! responsibility, and scaling to many instruments means running many
//! independent [`OrderBook`] instances. Sharing one instance across threads
//! requires external synchronization such as a mutex around the whole book.
//!
//! Duplicate submissions, cancels of unknown ids, and unmatchable
//! fill-and-kill orders are silent no-ops rather than errors; the only
//! `Err` the engine produces signals an internal invariant breach.
//!
//! ## Example
//!
//! ```
//! use matchbook_rs::{OrderBook, Side, TimeInForce};
//!
//! let mut book = OrderBook::new("BTC/USD");
//! book.add_limit_order(1, 100, 10, Side::Buy, TimeInForce::Gtc).unwrap();
//! let trades = book
//!     .add_limit_order(2, 100, 5, Side::Sell, TimeInForce::Gtc)
//!     .unwrap();
//!
//! assert_eq!(trades.len(), 1);
//! assert_eq!(trades[0].quantity(), 5);
//! assert_eq!(book.order_count(), 1); // order 1 rests with 5 remaining
//! ```

pub mod orderbook;

mod utils;

pub use orderbook::{
    LevelSnapshot, Order, OrderBook, OrderBookError, OrderBookSnapshot, OrderId, OrderModify,
    Price, Quantity, Side, TimeInForce, Trade, TradeLeg,
};
pub use utils::current_time_millis;
