use std::collections::HashMap;

use super::types::{Order, OrderID, OrderStatus, Priority, Quantity};

/// The authoritative mapping from order id to current order state.
///
/// Entries for cancelled and executed orders are never evicted, so
/// `queryOrder` keeps answering for terminal orders exactly as it does for
/// resting ones.
#[derive(Debug, Default)]
pub struct OrderIndex {
    entries: HashMap<OrderID, Order>,
}

impl OrderIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `order` if its id is unseen. Returns `false` on a duplicate.
    pub fn insert_if_absent(&mut self, order: Order) -> bool {
        if self.entries.contains_key(&order.id) {
            return false;
        }
        self.entries.insert(order.id, order);
        true
    }

    pub fn get(&self, id: OrderID) -> Option<&Order> {
        self.entries.get(&id)
    }

    pub fn mutate_left_and_status(&mut self, id: OrderID, left: Quantity, status: OrderStatus) {
        if let Some(order) = self.entries.get_mut(&id) {
            order.left = left;
            order.status = status;
        }
    }

    pub fn mutate_timestamp_and_qty(
        &mut self,
        id: OrderID,
        timestamp: Priority,
        quantity: Quantity,
        left: Quantity,
    ) {
        if let Some(order) = self.entries.get_mut(&id) {
            order.timestamp = timestamp;
            order.quantity = quantity;
            order.left = left;
        }
    }

    /// Overwrites status unconditionally, including from one terminal state
    /// to another. Returns `false` if `id` is unknown.
    pub fn set_status(&mut self, id: OrderID, status: OrderStatus) -> bool {
        match self.entries.get_mut(&id) {
            Some(order) => {
                order.status = status;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::{Price, Side};

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut index = OrderIndex::new();
        assert!(index.insert_if_absent(Order::new(1, Side::Buy, 10, Price::from(1.0), 0)));
        assert!(!index.insert_if_absent(Order::new(1, Side::Sell, 5, Price::from(2.0), 1)));
    }

    #[test]
    fn cancel_overwrites_status_even_when_already_terminal() {
        let mut index = OrderIndex::new();
        index.insert_if_absent(Order::new(1, Side::Buy, 10, Price::from(1.0), 0));
        assert!(index.set_status(1, OrderStatus::Executed));
        assert!(index.set_status(1, OrderStatus::Cancelled));
        assert_eq!(index.get(1).unwrap().status, OrderStatus::Cancelled);
        assert!(!index.set_status(42, OrderStatus::Cancelled));
    }
}
