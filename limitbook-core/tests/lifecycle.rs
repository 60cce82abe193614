mod common;

use crate::common::new_engine;
use limitbook_core::prelude::*;

#[test]
fn new_order_rests_open_with_no_crossing_liquidity() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();

    let view = engine.query_order(1);
    assert_eq!(view.status, Some(OrderStatus::Open));
    assert_eq!(view.left, 10);
    assert_eq!(view.position, 0);
}

#[test]
fn crossing_orders_transition_both_sides_to_executed() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Sell, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 10, 100.0).unwrap();

    assert_eq!(engine.query_order(1).status, Some(OrderStatus::Executed));
    assert_eq!(engine.query_order(2).status, Some(OrderStatus::Executed));
    assert_eq!(engine.query_depth(Side::Sell, 1).n_items, 0);
    assert_eq!(engine.query_depth(Side::Buy, 1).n_items, 0);
}

#[test]
fn partially_filled_order_keeps_resting() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Sell, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 4, 100.0).unwrap();

    let resting = engine.query_order(1);
    assert_eq!(resting.status, Some(OrderStatus::Partial));
    assert_eq!(resting.left, 6);
    assert_eq!(engine.query_order(2).status, Some(OrderStatus::Executed));
}

#[test]
fn cancelled_order_leaves_no_resting_entry() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();
    engine.cancel_order(1).unwrap();

    assert_eq!(engine.query_order(1).status, Some(OrderStatus::Cancelled));
    assert_eq!(engine.query_depth(Side::Buy, 1).n_items, 0);
}
