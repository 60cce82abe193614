use super::types::{OrderID, OrderStatus, Quantity, Side};

/// `OrderBookSyncer` is the observability seam every book mutation reports
/// through. It replaces direct `println!`/ad-hoc logging with a hook a
/// caller can swap (a real subscriber, a no-op for benchmarks, a test spy).
pub trait OrderBookSyncer: Send + Sync {
    /// An order was accepted, after any immediate matching.
    fn on_add(&self, id: OrderID, side: Side, price: f64, quantity: Quantity, status: OrderStatus);
    /// An incoming order was rejected before touching the book.
    fn on_reject(&self, side: Side, price: f64, quantity: Quantity, reason: &str);
    /// A resting order was cancelled.
    fn on_cancel(&self, id: OrderID);
    /// A cancel request could not be satisfied.
    fn on_cancel_rejected(&self, id: OrderID, reason: &str);
    /// A resting order's size was amended.
    fn on_amend(&self, id: OrderID, new_quantity: Quantity, requeued: bool);
    /// An amend request could not be satisfied.
    fn on_amend_rejected(&self, id: OrderID, reason: &str);
    /// A resting order absorbed a fill during matching.
    fn on_fill(&self, id: OrderID, left: Quantity, status: OrderStatus);
}

/// A no-op `OrderBookSyncer`, used in benchmarks and latency-sensitive tests
/// where tracing overhead would skew measurements.
pub struct EmptyOrderBookSyncer;

impl OrderBookSyncer for EmptyOrderBookSyncer {
    fn on_add(&self, _id: OrderID, _side: Side, _price: f64, _quantity: Quantity, _status: OrderStatus) {}
    fn on_reject(&self, _side: Side, _price: f64, _quantity: Quantity, _reason: &str) {}
    fn on_cancel(&self, _id: OrderID) {}
    fn on_cancel_rejected(&self, _id: OrderID, _reason: &str) {}
    fn on_amend(&self, _id: OrderID, _new_quantity: Quantity, _requeued: bool) {}
    fn on_amend_rejected(&self, _id: OrderID, _reason: &str) {}
    fn on_fill(&self, _id: OrderID, _left: Quantity, _status: OrderStatus) {}
}

/// Default `OrderBookSyncer`: emits structured `tracing` events for every
/// book mutation, at `debug` for accepted/expected outcomes and `warn` for
/// rejections.
pub struct TracingSyncer;

impl OrderBookSyncer for TracingSyncer {
    fn on_add(&self, id: OrderID, side: Side, price: f64, quantity: Quantity, status: OrderStatus) {
        tracing::debug!(order_id = id, ?side, price, quantity, ?status, "order accepted");
    }

    fn on_reject(&self, side: Side, price: f64, quantity: Quantity, reason: &str) {
        tracing::warn!(?side, price, quantity, reason, "order rejected");
    }

    fn on_cancel(&self, id: OrderID) {
        tracing::debug!(order_id = id, "order cancelled");
    }

    fn on_cancel_rejected(&self, id: OrderID, reason: &str) {
        tracing::warn!(order_id = id, reason, "cancel rejected");
    }

    fn on_amend(&self, id: OrderID, new_quantity: Quantity, requeued: bool) {
        tracing::debug!(order_id = id, new_quantity, requeued, "order amended");
    }

    fn on_amend_rejected(&self, id: OrderID, reason: &str) {
        tracing::warn!(order_id = id, reason, "amend rejected");
    }

    fn on_fill(&self, id: OrderID, left: Quantity, status: OrderStatus) {
        tracing::trace!(order_id = id, left, ?status, "order filled");
    }
}
