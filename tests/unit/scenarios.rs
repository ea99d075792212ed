//! The seven end-to-end scenarios from spec.md §8, reproduced literally.

use crate::helpers::{fok, ioc, limit, market, stop};
use clob_engine::engine::Engine;
use clob_engine::orderbook::order::Side;
use rust_decimal_macros::dec;

#[tokio::test]
async fn scenario_1_simple_fill_at_maker_price() {
    let engine = Engine::default();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(1)))
        .await
        .unwrap();

    let outcome = engine
        .submit(limit("BTC/USD", Side::Buy, dec!(105), dec!(1)))
        .await
        .unwrap();

    assert_eq!(outcome.trades.len(), 1);
    assert_eq!(outcome.trades[0].price.value(), dec!(100));
    assert_eq!(outcome.trades[0].quantity.value(), dec!(1));
    assert_eq!(outcome.trades[0].aggressor_side, Side::Buy);

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert!(bid.is_none());
    assert!(ask.is_none());
}

#[tokio::test]
async fn scenario_2_partial_fill_rests() {
    let engine = Engine::default();
    engine
        .submit(limit("BTC/USD", Side::Buy, dec!(100), dec!(5)))
        .await
        .unwrap();

    let outcome = engine
        .submit(limit("BTC/USD", Side::Sell, dec!(99), dec!(3)))
        .await
        .unwrap();

    assert_eq!(outcome.trades.len(), 1);
    assert_eq!(outcome.trades[0].price.value(), dec!(100));
    assert_eq!(outcome.trades[0].quantity.value(), dec!(3));

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert_eq!(bid.unwrap().value(), dec!(100));
    assert!(ask.is_none());
}

#[tokio::test]
async fn scenario_3_fifo_at_a_price() {
    let engine = Engine::default();
    let order_a = limit("BTC/USD", Side::Sell, dec!(100), dec!(1));
    let a_id = order_a.id;
    engine.submit(order_a).await.unwrap();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(1)))
        .await
        .unwrap();

    let outcome = engine
        .submit(limit("BTC/USD", Side::Buy, dec!(100), dec!(1)))
        .await
        .unwrap();

    assert_eq!(outcome.trades.len(), 1);
    assert_eq!(outcome.trades[0].maker_order_id, a_id);

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert!(bid.is_none());
    assert_eq!(ask.unwrap().value(), dec!(100));
}

#[tokio::test]
async fn scenario_4_ioc_cancels_residual() {
    let engine = Engine::default();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(1)))
        .await
        .unwrap();

    let outcome = engine
        .submit(ioc("BTC/USD", Side::Buy, dec!(100), dec!(5)))
        .await
        .unwrap();

    assert_eq!(outcome.trades.len(), 1);
    assert_eq!(outcome.trades[0].quantity.value(), dec!(1));
    assert!(!outcome.resting);

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert!(bid.is_none());
    assert!(ask.is_none());
}

#[tokio::test]
async fn scenario_5_fok_all_or_nothing_failure_leaves_book_untouched() {
    let engine = Engine::default();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(1)))
        .await
        .unwrap();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(101), dec!(1)))
        .await
        .unwrap();

    let outcome = engine
        .submit(fok("BTC/USD", Side::Buy, dec!(101), dec!(3)))
        .await
        .unwrap();
    assert!(outcome.trades.is_empty());

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert!(bid.is_none());
    assert_eq!(ask.unwrap().value(), dec!(100));
}

#[tokio::test]
async fn scenario_6_no_trade_through() {
    let engine = Engine::default();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(100), dec!(1)))
        .await
        .unwrap();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(102), dec!(2)))
        .await
        .unwrap();

    let outcome = engine
        .submit(market("BTC/USD", Side::Buy, dec!(2)))
        .await
        .unwrap();

    assert_eq!(outcome.trades.len(), 2);
    assert_eq!(outcome.trades[0].price.value(), dec!(100));
    assert_eq!(outcome.trades[0].quantity.value(), dec!(1));
    assert_eq!(outcome.trades[1].price.value(), dec!(102));
    assert_eq!(outcome.trades[1].quantity.value(), dec!(1));

    let (_, ask) = engine.bbo("BTC/USD").await;
    assert_eq!(ask.unwrap().value(), dec!(102));
}

#[tokio::test]
async fn scenario_7_stop_activation_cascade() {
    let engine = Engine::default();
    // A resting bid at 93 is the liquidity the activated stop will fill
    // against once it re-enters as a MARKET SELL.
    engine
        .submit(limit("BTC/USD", Side::Buy, dec!(93), dec!(1)))
        .await
        .unwrap();
    engine
        .submit(limit("BTC/USD", Side::Sell, dec!(94), dec!(1)))
        .await
        .unwrap();

    let placed = engine
        .submit(stop("BTC/USD", Side::Sell, dec!(95), dec!(1)))
        .await
        .unwrap();
    assert!(placed.trades.is_empty());

    // Crosses the resting ask at 94, dropping last-trade-price to 94.
    let outcome = engine
        .submit(limit("BTC/USD", Side::Buy, dec!(94), dec!(1)))
        .await
        .unwrap();

    // 94 <= stop_price (95) fires the SELL stop, which re-enters as a
    // MARKET SELL and fills against the remaining best bid (93).
    assert_eq!(outcome.activated_order_ids.len(), 1);
    assert_eq!(outcome.trades.len(), 2);
    assert_eq!(outcome.trades[0].price.value(), dec!(94));
    assert_eq!(outcome.trades[1].price.value(), dec!(93));

    let (bid, ask) = engine.bbo("BTC/USD").await;
    assert!(bid.is_none());
    assert!(ask.is_none());
}
