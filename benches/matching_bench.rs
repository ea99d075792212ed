//! Benchmarks for the matching hot path: resting order insertion, full and
//! partial fills against a populated book, and the FOK precheck's
//! short-circuiting depth scan.

use clob_engine::config::BookConfig;
use clob_engine::decimal::{Price, Qty};
use clob_engine::orderbook::book::Book;
use clob_engine::orderbook::order::{Id, Order, OrderType, Side};
use clob_engine::orderbook::process_order;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::hint::black_box;

fn limit_order(side: Side, price: i64, qty: i64, sequence: u64) -> Order {
    Order {
        id: Id::new(),
        symbol: "BTC/USD".to_string(),
        side,
        order_type: OrderType::Limit,
        quantity: Qty::new(Decimal::from(qty)).unwrap(),
        limit_price: Some(Price::new(Decimal::from(price)).unwrap()),
        stop_price: None,
        sequence,
        timestamp: 0,
        filled: Qty::zero(),
    }
}

fn populated_book(levels_per_side: i64) -> Book {
    let mut book = Book::new("BTC/USD", BookConfig::default());
    let mut sequence = 0;
    for i in 0..levels_per_side {
        process_order(&mut book, limit_order(Side::Buy, 100 - i, 10, sequence)).unwrap();
        sequence += 1;
        process_order(&mut book, limit_order(Side::Sell, 101 + i, 10, sequence)).unwrap();
        sequence += 1;
    }
    book
}

fn bench_add_resting(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/add_resting");
    for &levels in &[10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(levels), &levels, |b, &levels| {
            b.iter_batched(
                || populated_book(levels),
                |mut book| {
                    let order = limit_order(Side::Buy, 50, 1, u64::MAX);
                    black_box(process_order(&mut book, order).unwrap());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_full_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/full_fill");
    for &levels in &[10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(levels), &levels, |b, &levels| {
            b.iter_batched(
                || populated_book(levels),
                |mut book| {
                    let order = Order {
                        id: Id::new(),
                        symbol: "BTC/USD".to_string(),
                        side: Side::Buy,
                        order_type: OrderType::Market,
                        quantity: Qty::new(Decimal::from(10)).unwrap(),
                        limit_price: None,
                        stop_price: None,
                        sequence: u64::MAX,
                        timestamp: 0,
                        filled: Qty::zero(),
                    };
                    black_box(process_order(&mut book, order).unwrap());
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_fok_precheck(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching/fok_precheck");
    for &levels in &[10, 100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(levels), &levels, |b, &levels| {
            b.iter_batched(
                || populated_book(levels),
                |mut book| {
                    // Requests more than is marketable at this limit price, so the
                    // precheck must walk the depth scan and then reject.
                    let order = Order {
                        id: Id::new(),
                        symbol: "BTC/USD".to_string(),
                        side: Side::Buy,
                        order_type: OrderType::Fok,
                        quantity: Qty::new(Decimal::from(1_000_000)).unwrap(),
                        limit_price: Some(Price::new(Decimal::from(101)).unwrap()),
                        stop_price: None,
                        sequence: u64::MAX,
                        timestamp: 0,
                        filled: Qty::zero(),
                    };
                    black_box(process_order(&mut book, order)).ok();
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add_resting, bench_full_fill, bench_fok_precheck);
criterion_main!(benches);
