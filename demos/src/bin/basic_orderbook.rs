// demos/src/bin/basic_orderbook.rs

use matchbook_rs::{OrderBook, Side, TimeInForce};
use tracing::info;

fn main() {
    tracing_subscriber::fmt().init();
    info!("Basic OrderBook Demo");

    let mut book = OrderBook::new("BTC/USD");

    // The simplest lifecycle: one resting order, then its cancellation
    book.add_limit_order(1, 100, 10, Side::Buy, TimeInForce::Gtc)
        .expect("add failed");
    info!("Resting orders after add: {}", book.order_count()); // 1

    book.cancel_order(1);
    info!("Resting orders after cancel: {}", book.order_count()); // 0

    // Build a small book on both sides
    demo_build_book(&mut book);
    display_book_state(&book);

    // Cross it and show the resulting executions
    demo_matching(&mut book);
    display_book_state(&book);
}

fn demo_build_book(book: &mut OrderBook) {
    info!("Adding resting orders on both sides...");

    for i in 0..5u64 {
        let price = 9900 + i * 20; // 9900 .. 9980
        let quantity = 10 + i * 5;
        book.add_limit_order(100 + i, price, quantity, Side::Buy, TimeInForce::Gtc)
            .expect("add failed");
    }
    for i in 0..5u64 {
        let price = 10020 + i * 20; // 10020 .. 10100
        let quantity = 10 + i * 5;
        book.add_limit_order(200 + i, price, quantity, Side::Sell, TimeInForce::Gtc)
            .expect("add failed");
    }
}

fn demo_matching(book: &mut OrderBook) {
    info!("Submitting a buy that sweeps the two best ask levels...");

    let trades = book
        .add_limit_order(300, 10040, 25, Side::Buy, TimeInForce::Gtc)
        .expect("add failed");

    for trade in &trades {
        info!(
            "Trade {}: {} units, buy order {} at {} / sell order {} at {}",
            trade.trade_id,
            trade.quantity(),
            trade.buy.order_id,
            trade.buy.price,
            trade.sell.order_id,
            trade.sell.price
        );
    }

    info!("Submitting a fill-and-kill sell below the best bid...");
    let trades = book
        .add_limit_order(301, 9000, 1000, Side::Sell, TimeInForce::Fak)
        .expect("add failed");
    info!(
        "Fill-and-kill executed {} trades and left nothing resting",
        trades.len()
    );
}

fn display_book_state(book: &OrderBook) {
    info!("--- {} ---", book.symbol());
    info!("Resting orders: {}", book.order_count());
    info!("Best bid: {:?}", book.best_bid());
    info!("Best ask: {:?}", book.best_ask());
    info!("Spread: {:?}", book.spread());
    info!("Mid price: {:?}", book.mid_price());
    info!("Last trade price: {:?}", book.last_trade_price());

    let snapshot = book.create_snapshot(5);
    for level in &snapshot.bids {
        info!(
            "  BID {} x {} ({} orders)",
            level.price, level.quantity, level.order_count
        );
    }
    for level in &snapshot.asks {
        info!(
            "  ASK {} x {} ({} orders)",
            level.price, level.quantity, level.order_count
        );
    }
}
