use criterion::{BenchmarkId, Criterion};
use matchbook_rs::{OrderBook, Side, TimeInForce};
use std::hint::black_box;

/// Register all benchmarks for adding orders to an order book
pub fn register_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("OrderBook - Add Orders");

    // Non-crossing limit orders spread over distinct price levels
    group.bench_function("add_resting_orders", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(book.add_limit_order(
                    i,
                    1000 + i,
                    10,
                    Side::Buy,
                    TimeInForce::Gtc,
                ));
            }
        })
    });

    // All orders landing on one price level (deep FIFO queue)
    group.bench_function("add_orders_single_level", |b| {
        b.iter(|| {
            let mut book = OrderBook::new("TEST-SYMBOL");
            for i in 0..100u64 {
                let _ = black_box(book.add_limit_order(i, 1000, 10, Side::Sell, TimeInForce::Gtc));
            }
        })
    });

    // Parametrized benchmark with different order counts
    for order_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::new("order_count_scaling", order_count),
            order_count,
            |b, &order_count| {
                b.iter(|| {
                    let mut book = OrderBook::new("TEST-SYMBOL");
                    for i in 0..order_count as u64 {
                        let _ = black_box(book.add_limit_order(
                            i,
                            1000 + (i % 50),
                            10,
                            Side::Buy,
                            TimeInForce::Gtc,
                        ));
                    }
                })
            },
        );
    }

    group.finish();
}
