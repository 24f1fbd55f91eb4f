// demos/src/bin/depth_snapshot.rs
//
// Builds a book, modifies an order, and prints the depth snapshot as JSON.

use matchbook_rs::{OrderBook, OrderModify, Side, TimeInForce};
use tracing::info;

fn main() {
    tracing_subscriber::fmt().init();

    let mut book = OrderBook::new("ETH/USD");

    book.add_limit_order(1, 2000, 4, Side::Buy, TimeInForce::Gtc)
        .expect("add failed");
    book.add_limit_order(2, 1999, 6, Side::Buy, TimeInForce::Gtc)
        .expect("add failed");
    book.add_limit_order(3, 2002, 3, Side::Sell, TimeInForce::Gtc)
        .expect("add failed");
    book.add_limit_order(4, 2003, 8, Side::Sell, TimeInForce::Gtc)
        .expect("add failed");

    // Reprice the bid at 1999 to join the best level; it queues behind the
    // order already resting there
    book.modify_order(OrderModify::new(2, Side::Buy, 2000, 6))
        .expect("modify failed");

    let snapshot = book.create_snapshot(10);
    info!(
        "Snapshot of {} at {}: {} bid levels, {} ask levels",
        snapshot.symbol,
        snapshot.timestamp,
        snapshot.bids.len(),
        snapshot.asks.len()
    );

    let json = serde_json::to_string_pretty(&snapshot).expect("serialize failed");
    println!("{json}");
}
