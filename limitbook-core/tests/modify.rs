mod common;

use crate::common::new_engine;
use limitbook_core::prelude::*;

#[test]
fn cancel_removes_a_resting_order() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();

    engine.cancel_order(1).unwrap();

    assert_eq!(engine.query_depth(Side::Buy, 1).n_items, 0);
    assert_eq!(engine.query_order(1).status, Some(OrderStatus::Cancelled));
}

#[test]
fn cancelling_twice_fails_the_second_time() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();

    assert!(engine.cancel_order(1).is_ok());
    assert!(engine.cancel_order(1).is_err());
}

#[test]
fn cancelling_an_unknown_id_fails() {
    let engine = new_engine(1.0, 0.1);
    assert!(engine.cancel_order(999).is_err());
}

#[test]
fn size_decreasing_amend_preserves_queue_position() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 10, 100.0).unwrap();

    engine.amend_order(1, 5).unwrap();

    assert_eq!(engine.query_order(1).position, 0);
    assert_eq!(engine.query_order(1).left, 5);
    assert_eq!(engine.query_order(2).position, 1);
}

#[test]
fn size_increasing_amend_moves_to_the_back_of_the_queue() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 10, 100.0).unwrap();

    engine.amend_order(1, 15).unwrap();

    assert_eq!(engine.query_order(2).position, 0);
    assert_eq!(engine.query_order(1).position, 1);
    assert_eq!(engine.query_order(1).left, 15);
}

#[test]
fn amending_an_unknown_order_fails() {
    let engine = new_engine(1.0, 0.1);
    assert!(engine.amend_order(999, 5).is_err());
}

#[test]
fn amending_an_executed_order_fails() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Sell, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 10, 100.0).unwrap();

    let err = engine.amend_order(1, 20).unwrap_err();
    assert_eq!(
        err,
        AmendOrderError::TerminalState {
            id: 1,
            status: OrderStatus::Executed
        }
    );
}

#[test]
fn amending_below_the_filled_amount_fails() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Sell, 1, 10, 100.0).unwrap();
    engine.add_order(Side::Buy, 2, 4, 100.0).unwrap(); // sell 1 left at 6

    assert!(engine.amend_order(1, 3).is_err());
    assert!(engine.amend_order(1, 6).is_ok());
}
