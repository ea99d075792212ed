//! The matching state machine: marketability, the FOK precheck, the core
//! match loop, and the trigger-activation cascade.

use crate::decimal::{Price, Qty};
use crate::orderbook::book::Book;
use crate::orderbook::error::BookError;
use crate::orderbook::order::{Id, Order, OrderType, Side};
use crate::orderbook::trade::Trade;
use crate::utils::current_time_millis;
use tracing::{debug, warn};

/// Everything a single `process_order` call produced: the trades it
/// generated (in execution order), whether the incoming order ended up
/// resting (only possible for `Limit`), and any further trades produced
/// by a trigger-activation cascade.
#[derive(Debug, Default)]
pub struct MatchOutcome {
    pub trades: Vec<Trade>,
    pub resting_order_id: Option<Id>,
    /// Orders pulled out of the trigger table and matched as a result of
    /// this call's trades moving the last trade price.
    pub activated_order_ids: Vec<Id>,
}

/// Whether a resting level at `level_price` is marketable against an
/// incoming order on `taker_side` with optional `limit_price`. A plain
/// function, not a closure, so the FOK precheck and the match loop share
/// one definition of "marketable" (no two subtly different tests).
fn marketable(taker_side: Side, limit_price: Option<Price>, level_price: Price) -> bool {
    match limit_price {
        None => true,
        Some(limit) => match taker_side {
            // Buying: level (an ask) is marketable while its price <= our limit.
            Side::Buy => level_price <= limit,
            // Selling: level (a bid) is marketable while its price >= our limit.
            Side::Sell => level_price >= limit,
        },
    }
}

/// Accepts an incoming order against `book` and runs it to completion:
/// matching, resting (if applicable), and any resulting trigger cascade.
/// This is the single entry point the engine facade calls per submission.
pub fn process_order(book: &mut Book, mut order: Order) -> Result<MatchOutcome, BookError> {
    if book.is_quarantined() {
        return Err(BookError::Quarantined);
    }

    let mut outcome = MatchOutcome::default();

    if order.order_type.is_trigger() {
        // Trigger orders never match directly; they sit inert until the
        // market crosses their stop price.
        book.register_trigger(order);
        return Ok(outcome);
    }

    if order.order_type == OrderType::Fok {
        let available = book.depth_marketable(order.side.opposite(), order.limit_price);
        if available.value() < order.quantity.value() {
            debug!(id = %order.id, requested = %order.quantity, available = %available, "FOK unfillable: insufficient marketable depth");
            // Not an error (spec §7/§4.2.2): the book is left untouched and
            // the caller sees an accepted order with no trades.
            return Ok(outcome);
        }
    }

    run_match_loop(book, &mut order, &mut outcome.trades);

    if !order.is_fully_filled() && order.order_type.rests_on_partial_fill() {
        outcome.resting_order_id = Some(order.id);
        book.add_resting(order);
    } else if !order.is_fully_filled() {
        debug!(id = %order.id, remaining = %order.remaining(), "canceling unfilled remainder");
    }

    if let Some(last_trade) = outcome.trades.last().map(|t| t.price) {
        book.set_last_trade_price(last_trade);
        run_trigger_cascade(book, &mut outcome);
    }

    if let Err(e) = book.check_invariants() {
        warn!(symbol = %book.symbol(), error = %e, "invariant violation, quarantining book");
        book.quarantined = true;
        return Err(e);
    }

    Ok(outcome)
}

/// The core peek-mutate-pop loop: repeatedly takes the best opposite-side
/// level, fills against its FIFO head, and pops fully-filled resting
/// orders, until the incoming order is filled or no marketable liquidity
/// remains.
fn run_match_loop(book: &mut Book, order: &mut Order, trades: &mut Vec<Trade>) {
    let opposite = order.side.opposite();

    loop {
        if order.is_fully_filled() {
            break;
        }
        let best_price = match opposite {
            Side::Buy => book.best_bid(),
            Side::Sell => book.best_ask(),
        };
        let Some(price) = best_price else { break };
        if !marketable(order.side, order.limit_price, price) {
            break;
        }

        let levels = book.levels_mut(opposite);
        let level = levels.get_mut(&price).expect("indexed price must have a level");
        let maker = level.front_mut().expect("non-empty level must have a head order");

        let fill_qty = order.remaining().min(maker.remaining());
        maker.apply_fill(fill_qty);
        order.apply_fill(fill_qty);

        let maker_id = maker.id;
        let maker_fully_filled = maker.is_fully_filled();

        let fee_schedule = &book.config.fee_schedule;
        let maker_fee = (!fee_schedule.is_zero_fee()).then(|| fee_schedule.maker_fee(price, fill_qty));
        let taker_fee = (!fee_schedule.is_zero_fee()).then(|| fee_schedule.taker_fee(price, fill_qty));

        let trade = Trade::new(
            book.symbol().to_string(),
            price,
            fill_qty,
            maker_id,
            order.id,
            order.side,
            current_time_millis(),
            maker_fee,
            taker_fee,
        );
        debug!(symbol = %book.symbol(), maker = %maker_id, taker = %order.id, price = %price, qty = %fill_qty, "trade");
        trades.push(trade);

        if maker_fully_filled {
            level.pop_front();
            book.order_index.remove(&maker_id);
            book.drop_if_empty(opposite, price);
        }
    }
}

/// After a trade moves the last trade price, pulls every trigger order
/// that now fires and re-submits it as a `Market` (for `Stop`/
/// `TakeProfit`) or `Limit` (for `StopLimit`) order, bounded by
/// `config.max_trigger_cascade` to keep a pathological cascade from
/// blocking the caller indefinitely.
fn run_trigger_cascade(book: &mut Book, outcome: &mut MatchOutcome) {
    let budget = book.config.max_trigger_cascade;
    let mut activated_total = 0usize;

    loop {
        if activated_total >= budget {
            warn!(symbol = %book.symbol(), budget, "trigger cascade budget exhausted");
            break;
        }
        // Re-read the last trade price fresh every iteration: a
        // re-injected order's own trades may have moved it further,
        // and the next scan must fire against that new price, not the
        // price that started this cascade.
        let Some(current_price) = book.last_trade_price() else {
            break;
        };
        let remaining_budget = budget - activated_total;
        let triggered = book
            .triggers
            .scan_activations(current_price, remaining_budget);
        if triggered.is_empty() {
            break;
        }
        activated_total += triggered.len();

        for trigger in triggered {
            let mut reinjected = reinject(trigger);
            outcome.activated_order_ids.push(reinjected.id);
            run_match_loop(book, &mut reinjected, &mut outcome.trades);

            if !reinjected.is_fully_filled() && reinjected.order_type.rests_on_partial_fill() {
                book.add_resting(reinjected);
            }

            if let Some(price) = outcome.trades.last().map(|t| t.price) {
                book.set_last_trade_price(price);
            }
        }
    }
}

/// Converts an activated trigger order into the live order type it
/// becomes once fired: `Stop`/`TakeProfit` -> `Market`, `StopLimit` ->
/// `Limit` (keeping its configured `limit_price`).
fn reinject(mut order: Order) -> Order {
    order.order_type = match order.order_type {
        OrderType::Stop | OrderType::TakeProfit => OrderType::Market,
        OrderType::StopLimit => OrderType::Limit,
        other => other,
    };
    order.stop_price = None;
    order
}
