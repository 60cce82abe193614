use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// OrderID is the type used for order IDs.
pub type OrderID = u64;

/// Price is a tick-aligned real value. Every stored price is `k * tick_size`
/// for some integer `k`, so `OrderedFloat`'s bitwise comparison is exact
/// for comparisons between two aligned prices.
pub type Price = OrderedFloat<f64>;

/// Quantity is the type used for quantities in the order and for aggregate
/// level volume.
pub type Quantity = u64;

/// Priority is the monotonic microsecond tick the book assigns an order at
/// creation, and reassigns on a size-raising amend.
pub type Priority = u64;

/// Side indicates the direction of the order.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy means the user wants to acquire the asset, matching against sell orders.
    Buy,
    /// Sell means the user wants to dispose of the asset, matching against buy orders.
    Sell,
}

/// OrderStatus represents the current status of an order during its lifecycle.
#[derive(PartialEq, Eq, Default, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Resting on the book, untouched by any match.
    #[default]
    Open,
    /// Resting on the book with some quantity already matched away.
    Partial,
    /// Fully matched; no quantity remains. Terminal.
    Executed,
    /// Removed by the submitter before being fully matched. Terminal.
    Cancelled,
}

/// `Order` is a single resting or incoming limit order.
///
/// Equality and ordering are keyed on `(timestamp, id)`, not on the full
/// struct: this is what lets a `PriceLevel` keep its orders in price-time
/// priority order inside a `BTreeSet` while still being able to mutate
/// `left`/`status`/`quantity` in place, by removing and reinserting the
/// order under its unchanged priority key.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderID,
    pub side: Side,
    pub price: Price,
    /// Size as originally submitted (or as last amended to).
    pub quantity: Quantity,
    /// Remaining unfilled size. Monotonically non-increasing except across
    /// a size-raising amend.
    pub left: Quantity,
    pub timestamp: Priority,
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderID, side: Side, quantity: Quantity, price: Price, timestamp: Priority) -> Self {
        Self {
            id,
            side,
            price,
            quantity,
            left: quantity,
            timestamp,
            status: OrderStatus::Open,
        }
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl PartialOrd for Order {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Order {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.timestamp.cmp(&other.timestamp).then(self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_compare_by_timestamp_then_id() {
        let earlier = Order::new(5, Side::Buy, 10, Price::from(1.0), 100);
        let later = Order::new(1, Side::Buy, 10, Price::from(1.0), 200);
        let tiebreak = Order::new(1, Side::Buy, 10, Price::from(1.0), 100);
        assert!(earlier < later);
        assert!(tiebreak < earlier);
    }
}
