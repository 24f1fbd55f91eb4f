//! Integration tests for the public add/cancel/modify surface.

use matchbook_rs::{OrderBook, OrderModify, Side, TimeInForce};

#[test]
fn test_add_and_cancel_single_order() {
    let mut book = OrderBook::new("TEST");

    let trades = book
        .add_limit_order(1, 100, 10, Side::Buy, TimeInForce::Gtc)
        .unwrap();
    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);

    book.cancel_order(1);
    assert_eq!(book.order_count(), 0);
}

#[test]
fn test_cancel_is_idempotent_under_repetition() {
    let mut book = OrderBook::new("TEST");
    book.add_limit_order(1, 100, 10, Side::Buy, TimeInForce::Gtc).unwrap();
    book.add_limit_order(2, 101, 5, Side::Sell, TimeInForce::Gtc).unwrap();

    book.cancel_order(1);
    let count_after_first = book.order_count();
    let snapshot_after_first = book.create_snapshot(usize::MAX);

    // Unknown and already-cancelled ids must change nothing
    for _ in 0..3 {
        assert!(book.cancel_order(1).is_none());
        assert!(book.cancel_order(999).is_none());
    }

    assert_eq!(book.order_count(), count_after_first);
    let snapshot = book.create_snapshot(usize::MAX);
    assert_eq!(snapshot.bids, snapshot_after_first.bids);
    assert_eq!(snapshot.asks, snapshot_after_first.asks);
}

#[test]
fn test_duplicate_submission_preserves_existing_order() {
    let mut book = OrderBook::new("TEST");
    book.add_limit_order(5, 100, 10, Side::Buy, TimeInForce::Gtc).unwrap();

    let trades = book
        .add_limit_order(5, 200, 50, Side::Sell, TimeInForce::Fak)
        .unwrap();

    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);
    let original = book.get_order(5).unwrap();
    assert_eq!(original.price(), 100);
    assert_eq!(original.side(), Side::Buy);
}

#[test]
fn test_fill_and_kill_never_rests_unmatched() {
    let mut book = OrderBook::new("TEST");
    book.add_limit_order(9, 100, 5, Side::Sell, TimeInForce::Gtc).unwrap();

    // 99 < 100 cannot match: rejected with no trades and no state change
    let trades = book
        .add_limit_order(10, 99, 5, Side::Buy, TimeInForce::Fak)
        .unwrap();

    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);
    assert!(book.contains_order(9));
    assert!(!book.contains_order(10));

    // Same against an empty opposite side
    let trades = book
        .add_limit_order(11, 100, 5, Side::Sell, TimeInForce::Fak)
        .unwrap();
    assert!(trades.is_empty());
    assert!(!book.contains_order(11));
}

#[test]
fn test_modify_rests_at_back_of_new_level() {
    let mut book = OrderBook::new("TEST");
    book.add_limit_order(1, 100, 2, Side::Buy, TimeInForce::Gtc).unwrap();
    book.add_limit_order(2, 101, 4, Side::Buy, TimeInForce::Gtc).unwrap();

    let trades = book
        .modify_order(OrderModify::new(1, Side::Buy, 101, 2))
        .unwrap();
    assert!(trades.is_empty());

    // Order 1 landed behind order 2 at 101: a match drains order 2 first
    let trades = book
        .add_limit_order(3, 101, 4, Side::Sell, TimeInForce::Gtc)
        .unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].buy.order_id, 2);
    assert_eq!(book.get_order(1).unwrap().remaining_quantity(), 2);
}

#[test]
fn test_modify_unknown_id_leaves_book_unchanged() {
    let mut book = OrderBook::new("TEST");
    book.add_limit_order(1, 100, 10, Side::Buy, TimeInForce::Gtc).unwrap();

    let trades = book
        .modify_order(OrderModify::new(2, Side::Sell, 90, 10))
        .unwrap();

    assert!(trades.is_empty());
    assert_eq!(book.order_count(), 1);
    assert_eq!(book.best_bid(), Some(100));
    assert_eq!(book.best_ask(), None);
}

#[test]
fn test_order_count_tracks_index_size() {
    let mut book = OrderBook::new("TEST");

    for id in 1..=10u64 {
        book.add_limit_order(id, 90 + id, 10, Side::Buy, TimeInForce::Gtc)
            .unwrap();
    }
    assert_eq!(book.order_count(), 10);

    for id in 1..=5u64 {
        book.cancel_order(id);
    }
    assert_eq!(book.order_count(), 5);

    // A full fill removes the order from the count as well
    book.add_limit_order(11, 91, 1000, Side::Sell, TimeInForce::Gtc)
        .unwrap();
    assert_eq!(book.order_count(), 1); // only the ask remainder rests
    assert!(book.contains_order(11));
}
