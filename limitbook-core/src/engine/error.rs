use thiserror::Error;

use super::types::{OrderID, OrderStatus};

/// Errors that can reject an incoming `add` before it touches the book.
#[derive(Debug, Error, PartialEq)]
pub enum AddOrderError {
    #[error("price {price} is not aligned to the configured tick size")]
    MisalignedPrice { price: f64 },
    #[error("order id {0} already exists")]
    DuplicateId(OrderID),
}

/// Errors that can reject a `cancel`.
#[derive(Debug, Error, PartialEq)]
pub enum CancelOrderError {
    #[error("order id {0} is unknown")]
    NotFound(OrderID),
    #[error("order id {0} has no resting quantity to cancel")]
    NotResting(OrderID),
}

/// Errors that can reject an `amend`.
#[derive(Debug, Error, PartialEq)]
pub enum AmendOrderError {
    #[error("order id {0} is unknown")]
    NotFound(OrderID),
    #[error("order id {0} is already {status:?} and cannot be amended")]
    TerminalState { id: OrderID, status: OrderStatus },
    #[error("amending order id {0} below its filled amount is not allowed")]
    OverReduction(OrderID),
}
