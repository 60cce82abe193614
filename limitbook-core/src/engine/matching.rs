use std::sync::Arc;

use super::book::{DefaultOrderBook, OrderBook};
use super::error::{AddOrderError, AmendOrderError, CancelOrderError};
use super::types::{OrderID, Quantity, Side};

/// `MatchingEngine` is the outward-facing API a CLI or embedder calls:
/// add/cancel/amend. The add/match/fill algorithm itself lives on
/// `DefaultOrderBook`, which is what actually owns the three locks it
/// must coordinate across; this trait is a thin, stable facade in front
/// of that.
pub trait MatchingEngine: Send + Sync {
    fn add_order(&self, side: Side, id: OrderID, quantity: Quantity, price: f64) -> Result<(), AddOrderError>;
    fn cancel_order(&self, id: OrderID) -> Result<(), CancelOrderError>;
    fn amend_order(&self, id: OrderID, new_quantity: Quantity) -> Result<(), AmendOrderError>;
}

pub struct DefaultMatchingEngine {
    book: Arc<DefaultOrderBook>,
}

impl DefaultMatchingEngine {
    pub fn new(book: Arc<DefaultOrderBook>) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &Arc<DefaultOrderBook> {
        &self.book
    }
}

impl MatchingEngine for DefaultMatchingEngine {
    fn add_order(&self, side: Side, id: OrderID, quantity: Quantity, price: f64) -> Result<(), AddOrderError> {
        self.book.add(side, id, quantity, price)
    }

    fn cancel_order(&self, id: OrderID) -> Result<(), CancelOrderError> {
        self.book.cancel(id)
    }

    fn amend_order(&self, id: OrderID, new_quantity: Quantity) -> Result<(), AmendOrderError> {
        self.book.amend(id, new_quantity)
    }
}
