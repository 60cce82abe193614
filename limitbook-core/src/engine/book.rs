use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::BookConfig;

use super::clock::MonotonicClock;
use super::error::{AddOrderError, AmendOrderError, CancelOrderError};
use super::index::OrderIndex;
use super::level::PriceLevel;
use super::syncer::OrderBookSyncer;
use super::types::{Order, OrderID, OrderStatus, Price, Quantity, Side};

/// One side of the book: a price-ordered map of `PriceLevel`s, iterated
/// from the best price outward (descending for bids, ascending for asks).
#[derive(Debug)]
pub struct PriceLadder {
    side: Side,
    levels: BTreeMap<Price, PriceLevel>,
}

impl PriceLadder {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn upsert_level(&mut self, price: Price) -> &mut PriceLevel {
        self.levels.entry(price).or_insert_with(PriceLevel::new)
    }

    pub fn erase_level_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(PriceLevel::is_empty) {
            self.levels.remove(&price);
        }
    }

    pub fn level_at(&self, price: Price) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn level_at_mut(&mut self, price: Price) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }

    /// The `depth`-th best level (1-indexed; `depth == 1` is the best price).
    pub fn nth(&self, depth: usize) -> Option<(Price, &PriceLevel)> {
        if depth == 0 {
            return None;
        }
        match self.side {
            Side::Buy => self.levels.iter().rev().nth(depth - 1).map(|(p, l)| (*p, l)),
            Side::Sell => self.levels.iter().nth(depth - 1).map(|(p, l)| (*p, l)),
        }
    }

    /// Iterates levels from best to worst, yielding mutable access for
    /// matching a crossing order against resting liquidity.
    pub fn iter_best_first_mut(&mut self) -> Box<dyn Iterator<Item = (Price, &mut PriceLevel)> + '_> {
        match self.side {
            Side::Buy => Box::new(self.levels.iter_mut().rev().map(|(p, l)| (*p, l))),
            Side::Sell => Box::new(self.levels.iter_mut().map(|(p, l)| (*p, l))),
        }
    }
}

/// `OrderBook` is the mutating half of the engine's public surface: accept,
/// cancel, and amend. All three hold the `index`, `bids`, and `asks` locks
/// together for the duration of the state transition, always acquired in
/// that fixed order, so a reader can never observe a torn update and two
/// writers can never deadlock against each other.
pub trait OrderBook: Send + Sync {
    /// Aligns `price` to the configured tick size, matches the incoming
    /// order against the opposite book, and rests any residual quantity.
    fn add(&self, side: Side, id: OrderID, quantity: Quantity, price: f64) -> Result<(), AddOrderError>;
    /// Removes a resting order, leaving its index entry marked `cancelled`.
    fn cancel(&self, id: OrderID) -> Result<(), CancelOrderError>;
    /// Changes a resting order's quantity without re-matching it.
    fn amend(&self, id: OrderID, new_quantity: Quantity) -> Result<(), AmendOrderError>;
}

/// The default, lock-based `OrderBook` implementation: a `BTreeMap`-backed
/// ladder per side plus an authoritative `OrderIndex`, each behind its own
/// `parking_lot::RwLock`.
pub struct DefaultOrderBook {
    bids: RwLock<PriceLadder>,
    asks: RwLock<PriceLadder>,
    index: RwLock<OrderIndex>,
    config: BookConfig,
    clock: MonotonicClock,
    syncer: Arc<dyn OrderBookSyncer>,
}

impl DefaultOrderBook {
    pub fn new(config: BookConfig, syncer: Arc<dyn OrderBookSyncer>) -> Self {
        Self {
            bids: RwLock::new(PriceLadder::new(Side::Buy)),
            asks: RwLock::new(PriceLadder::new(Side::Sell)),
            index: RwLock::new(OrderIndex::new()),
            config,
            clock: MonotonicClock::new(),
            syncer,
        }
    }

    pub(crate) fn ladder(&self, side: Side) -> &RwLock<PriceLadder> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    pub(crate) fn index(&self) -> &RwLock<OrderIndex> {
        &self.index
    }
}

impl OrderBook for DefaultOrderBook {
    fn add(&self, side: Side, id: OrderID, quantity: Quantity, price: f64) -> Result<(), AddOrderError> {
        let aligned = match self.config.align(price) {
            Some(aligned) => aligned,
            None => {
                self.syncer.on_reject(side, price, quantity, "price not tick-aligned");
                return Err(AddOrderError::MisalignedPrice { price });
            }
        };
        let price = Price::from(aligned);

        let mut index = self.index.write();
        let mut bids = self.bids.write();
        let mut asks = self.asks.write();

        let timestamp = self.clock.now_micros();
        let mut order = Order::new(id, side, quantity, price, timestamp);
        if !index.insert_if_absent(order.clone()) {
            self.syncer.on_reject(side, price.into_inner(), quantity, "duplicate order id");
            return Err(AddOrderError::DuplicateId(id));
        }

        let mut taker_left = order.left;
        let mut any_fill = false;
        {
            let opposite = match side {
                Side::Buy => &mut *asks,
                Side::Sell => &mut *bids,
            };
            let mut exhausted = Vec::new();
            for (level_price, level) in opposite.iter_best_first_mut() {
                if taker_left == 0 {
                    break;
                }
                let crosses = match side {
                    Side::Buy => level_price <= price,
                    Side::Sell => level_price >= price,
                };
                if !crosses {
                    break;
                }
                any_fill = true;
                for f in level.fill(&mut taker_left) {
                    index.mutate_left_and_status(f.id, f.left, f.status);
                    self.syncer.on_fill(f.id, f.left, f.status);
                }
                if level.is_empty() {
                    exhausted.push(level_price);
                }
            }
            for p in exhausted {
                opposite.erase_level_if_empty(p);
            }
        }

        order.left = taker_left;
        order.status = if taker_left == 0 {
            OrderStatus::Executed
        } else if any_fill {
            OrderStatus::Partial
        } else {
            OrderStatus::Open
        };
        index.mutate_left_and_status(id, order.left, order.status);

        if order.left > 0 {
            let own = match side {
                Side::Buy => &mut *bids,
                Side::Sell => &mut *asks,
            };
            own.upsert_level(price).insert(order.clone());
        }

        self.syncer.on_add(id, side, price.into_inner(), quantity, order.status);
        Ok(())
    }

    fn cancel(&self, id: OrderID) -> Result<(), CancelOrderError> {
        let mut index = self.index.write();
        let mut bids = self.bids.write();
        let mut asks = self.asks.write();

        let existing = match index.get(id) {
            Some(order) => order.clone(),
            None => return Err(CancelOrderError::NotFound(id)),
        };
        index.set_status(id, OrderStatus::Cancelled);

        let ladder = match existing.side {
            Side::Buy => &mut *bids,
            Side::Sell => &mut *asks,
        };
        let removed = match ladder.level_at_mut(existing.price) {
            Some(level) => {
                let removed = level.cancel(id);
                if removed {
                    ladder.erase_level_if_empty(existing.price);
                }
                removed
            }
            None => false,
        };

        if removed {
            self.syncer.on_cancel(id);
            Ok(())
        } else {
            self.syncer.on_cancel_rejected(id, "not resting");
            Err(CancelOrderError::NotResting(id))
        }
    }

    fn amend(&self, id: OrderID, new_quantity: Quantity) -> Result<(), AmendOrderError> {
        let mut index = self.index.write();
        let mut bids = self.bids.write();
        let mut asks = self.asks.write();

        let existing = match index.get(id) {
            Some(order) => order.clone(),
            None => return Err(AmendOrderError::NotFound(id)),
        };
        if matches!(existing.status, OrderStatus::Cancelled | OrderStatus::Executed) {
            self.syncer.on_amend_rejected(id, "order is in a terminal state");
            return Err(AmendOrderError::TerminalState {
                id,
                status: existing.status,
            });
        }

        let delta = new_quantity as i64 - existing.quantity as i64;
        let new_left = existing.left as i64 + delta;
        if new_left < 0 {
            self.syncer.on_amend_rejected(id, "quantity would drop below filled amount");
            return Err(AmendOrderError::OverReduction(id));
        }
        let new_left = new_left as u64;
        let requeued = delta > 0;

        let mut updated = existing.clone();
        updated.quantity = new_quantity;
        updated.left = new_left;
        if requeued {
            updated.timestamp = self.clock.now_micros();
        }

        index.mutate_timestamp_and_qty(id, updated.timestamp, updated.quantity, updated.left);

        let ladder = match existing.side {
            Side::Buy => &mut *bids,
            Side::Sell => &mut *asks,
        };
        if let Some(level) = ladder.level_at_mut(existing.price) {
            level.update(updated);
        }

        self.syncer.on_amend(id, new_quantity, requeued);
        Ok(())
    }
}
