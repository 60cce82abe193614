use mimalloc::MiMalloc;

/// Global allocator.
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod engine;

pub mod prelude {
    pub use crate::config::*;
    pub use crate::engine::prelude::*;
}
