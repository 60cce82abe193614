use serde::Serialize;

use super::book::DefaultOrderBook;
use super::matching::DefaultMatchingEngine;
use super::types::{OrderID, OrderStatus, Quantity, Side};

/// The result of `queryDepth`: the state of one ladder level, or a
/// zero-filled view (with `depth` echoed back) when it's out of range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthView {
    pub side: Side,
    pub depth: u32,
    pub price: f64,
    pub sum_left: Quantity,
    pub n_items: usize,
}

/// The result of `queryOrder`: the order's last known state, or an
/// all-`None`/`-1` view if the id has never been seen.
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    pub side: Option<Side>,
    pub price: f64,
    pub quantity: Quantity,
    pub left: Quantity,
    /// Zero-based resting position, or `-1` for unknown/terminal orders.
    pub position: i64,
    pub status: Option<OrderStatus>,
}

/// Read-only access to book state: depth-of-market and single-order lookup.
pub trait QueryInterface {
    fn query_depth(&self, side: Side, depth: u32) -> DepthView;
    fn query_order(&self, id: OrderID) -> OrderView;
}

impl QueryInterface for DefaultOrderBook {
    fn query_depth(&self, side: Side, depth: u32) -> DepthView {
        let ladder = self.ladder(side).read();
        match ladder.nth(depth as usize) {
            Some((price, level)) => DepthView {
                side,
                depth,
                price: price.into_inner(),
                sum_left: level.sum_left(),
                n_items: level.n_items(),
            },
            None => DepthView {
                side,
                depth,
                price: 0.0,
                sum_left: 0,
                n_items: 0,
            },
        }
    }

    fn query_order(&self, id: OrderID) -> OrderView {
        let order = {
            let index = self.index().read();
            match index.get(id) {
                Some(order) => order.clone(),
                None => {
                    return OrderView {
                        side: None,
                        price: 0.0,
                        quantity: 0,
                        left: 0,
                        position: -1,
                        status: None,
                    };
                }
            }
        };

        let position = match order.status {
            OrderStatus::Open | OrderStatus::Partial => {
                let ladder = self.ladder(order.side).read();
                ladder.level_at(order.price).map(|l| l.position_of(id)).unwrap_or(-1)
            }
            OrderStatus::Executed | OrderStatus::Cancelled => -1,
        };

        OrderView {
            side: Some(order.side),
            price: order.price.into_inner(),
            quantity: order.quantity,
            left: order.left,
            position,
            status: Some(order.status),
        }
    }
}

impl QueryInterface for DefaultMatchingEngine {
    fn query_depth(&self, side: Side, depth: u32) -> DepthView {
        self.book().query_depth(side, depth)
    }

    fn query_order(&self, id: OrderID) -> OrderView {
        self.book().query_order(id)
    }
}
