use std::sync::Arc;

use limitbook_core::prelude::*;

/// Builds a `DefaultMatchingEngine` over a fresh book with the given
/// tick size and snap tolerance, and a silent syncer.
pub fn new_engine(tick_size: f64, precision: f64) -> DefaultMatchingEngine {
    let config = BookConfig::new(tick_size, precision).expect("valid test config");
    let syncer: Arc<dyn OrderBookSyncer> = Arc::new(EmptyOrderBookSyncer);
    let book = Arc::new(DefaultOrderBook::new(config, syncer));
    DefaultMatchingEngine::new(book)
}
