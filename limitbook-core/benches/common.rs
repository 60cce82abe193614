use std::sync::Arc;

use limitbook_core::prelude::*;

/// Builds a `DefaultMatchingEngine` with `EmptyOrderBookSyncer`, so tracing
/// overhead never skews a measurement.
pub fn new_bench_engine(tick_size: f64, precision: f64) -> DefaultMatchingEngine {
    let config = BookConfig::new(tick_size, precision).expect("valid bench config");
    let syncer: Arc<dyn OrderBookSyncer> = Arc::new(EmptyOrderBookSyncer);
    let book = Arc::new(DefaultOrderBook::new(config, syncer));
    DefaultMatchingEngine::new(book)
}
