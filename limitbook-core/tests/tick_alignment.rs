mod common;

use crate::common::new_engine;
use limitbook_core::prelude::*;

#[test]
fn exact_tick_multiples_are_accepted_unchanged() {
    let engine = new_engine(0.5, 0.01);
    engine.add_order(Side::Buy, 1, 10, 12.5).unwrap();
    assert_eq!(engine.query_depth(Side::Buy, 1).price, 12.5);
}

#[test]
fn prices_within_tolerance_snap_to_the_nearest_tick() {
    let engine = new_engine(0.5, 0.01);
    engine.add_order(Side::Buy, 1, 10, 12.501).unwrap();
    assert_eq!(engine.query_depth(Side::Buy, 1).price, 12.5);
}

#[test]
fn prices_outside_tolerance_are_rejected() {
    let engine = new_engine(0.5, 0.01);
    let err = engine.add_order(Side::Buy, 1, 10, 12.3).unwrap_err();
    assert_eq!(err, AddOrderError::MisalignedPrice { price: 12.3 });
    assert_eq!(engine.query_order(1).status, None);
}

#[test]
fn duplicate_ids_are_rejected_without_mutating_the_book() {
    let engine = new_engine(1.0, 0.1);
    engine.add_order(Side::Buy, 1, 10, 100.0).unwrap();
    let err = engine.add_order(Side::Sell, 1, 5, 101.0).unwrap_err();
    assert_eq!(err, AddOrderError::DuplicateId(1));
    assert_eq!(engine.query_depth(Side::Sell, 1).n_items, 0);
}
