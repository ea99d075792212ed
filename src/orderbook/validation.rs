//! Submission-time validation: tick/lot size, required prices per order
//! type, and quantity bounds. Runs before an order ever reaches the
//! matching state machine.

use crate::config::BookConfig;
use crate::orderbook::error::BookError;
use crate::orderbook::order::{Order, OrderType};

/// Validates an incoming order against `config`. Does not touch the book
/// itself — purely a function of the order and the configuration.
pub fn validate_submission(order: &Order, config: &BookConfig) -> Result<(), BookError> {
    match order.order_type {
        OrderType::Market | OrderType::Ioc | OrderType::Fok => {
            // Limit/stop price, if present, is ignored for these types;
            // nothing further to check here.
        }
        OrderType::Limit => {
            if order.limit_price.is_none() {
                return Err(BookError::InvariantViolation(
                    "limit order requires a limit_price".to_string(),
                ));
            }
        }
        OrderType::Stop | OrderType::TakeProfit => {
            if order.stop_price.is_none() {
                return Err(BookError::InvariantViolation(
                    "stop/take-profit order requires a stop_price".to_string(),
                ));
            }
        }
        OrderType::StopLimit => {
            if order.stop_price.is_none() || order.limit_price.is_none() {
                return Err(BookError::InvariantViolation(
                    "stop-limit order requires both stop_price and limit_price".to_string(),
                ));
            }
        }
    }

    if let (Some(price), Some(tick_size)) = (order.limit_price, config.tick_size)
        && !is_multiple_of(price.value(), tick_size.value())
    {
        return Err(BookError::InvalidTickSize { price, tick_size });
    }
    if let (Some(price), Some(tick_size)) = (order.stop_price, config.tick_size)
        && !is_multiple_of(price.value(), tick_size.value())
    {
        return Err(BookError::InvalidTickSize { price, tick_size });
    }

    if let Some(lot_size) = config.lot_size
        && !is_multiple_of(order.quantity.value(), lot_size.value())
    {
        return Err(BookError::InvalidLotSize {
            quantity: order.quantity,
            lot_size,
        });
    }

    if config.min_order_qty.is_some_and(|min| order.quantity < min)
        || config.max_order_qty.is_some_and(|max| order.quantity > max)
    {
        return Err(BookError::OrderSizeOutOfRange {
            quantity: order.quantity,
            min: config.min_order_qty,
            max: config.max_order_qty,
        });
    }

    Ok(())
}

fn is_multiple_of(value: rust_decimal::Decimal, step: rust_decimal::Decimal) -> bool {
    if step.is_zero() {
        return true;
    }
    (value % step).is_zero()
}
