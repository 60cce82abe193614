use std::collections::BTreeSet;

use super::types::{Order, OrderID, OrderStatus, Quantity};

/// The outcome of touching a single resting order while filling a level.
pub struct Fill {
    pub id: OrderID,
    pub left: Quantity,
    pub status: OrderStatus,
    pub removed: bool,
}

/// All resting orders at a single price, kept in price-time priority order.
///
/// `orders` is a `BTreeSet<Order>` ordered by `(timestamp, id)` rather than a
/// plain queue, mirroring a reference `std::set<LimitOrder>` per level,
/// complexity profile included: a lookup by id walks the whole set.
/// `sum_left` is a cached aggregate so `queryDepth` never has to sum the set.
#[derive(Debug, Default)]
pub struct PriceLevel {
    orders: BTreeSet<Order>,
    sum_left: Quantity,
}

impl PriceLevel {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, id: OrderID) -> Option<Order> {
        self.orders.iter().find(|o| o.id == id).cloned()
    }

    /// Adds a new resting order to the level.
    pub fn insert(&mut self, order: Order) {
        self.sum_left += order.left;
        self.orders.insert(order);
    }

    /// Removes the resting order with `id`. Returns `false` if it wasn't
    /// actually resting at this level.
    pub fn cancel(&mut self, id: OrderID) -> bool {
        match self.find(id) {
            Some(existing) => {
                self.sum_left -= existing.left;
                self.orders.remove(&existing);
                true
            }
            None => false,
        }
    }

    /// Replaces the resting order sharing `new_order.id` with `new_order`,
    /// keyed on `new_order`'s (possibly refreshed) timestamp.
    pub fn update(&mut self, new_order: Order) {
        if let Some(existing) = self.find(new_order.id) {
            self.orders.remove(&existing);
            self.sum_left = self.sum_left + new_order.left - existing.left;
        } else {
            self.sum_left += new_order.left;
        }
        self.orders.insert(new_order);
    }

    pub fn n_items(&self) -> usize {
        self.orders.len()
    }

    pub fn sum_left(&self) -> Quantity {
        self.sum_left
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Zero-based queue position of `id`, or `-1` if it isn't resting here.
    pub fn position_of(&self, id: OrderID) -> i64 {
        self.orders
            .iter()
            .position(|o| o.id == id)
            .map(|p| p as i64)
            .unwrap_or(-1)
    }

    /// Consumes resting liquidity in time priority against `taker_left`,
    /// decrementing it as orders are matched away. Every resting order
    /// touched yields a `Fill` describing its new state.
    pub fn fill(&mut self, taker_left: &mut Quantity) -> Vec<Fill> {
        let mut fills = Vec::new();
        while *taker_left > 0 {
            let Some(mut resting) = self.orders.pop_first() else {
                break;
            };
            let traded = (*taker_left).min(resting.left);
            resting.left -= traded;
            *taker_left -= traded;
            self.sum_left -= traded;

            if resting.left > 0 {
                resting.status = OrderStatus::Partial;
                fills.push(Fill {
                    id: resting.id,
                    left: resting.left,
                    status: OrderStatus::Partial,
                    removed: false,
                });
                self.orders.insert(resting);
            } else {
                resting.status = OrderStatus::Executed;
                fills.push(Fill {
                    id: resting.id,
                    left: 0,
                    status: OrderStatus::Executed,
                    removed: true,
                });
            }
        }
        fills
    }
}
