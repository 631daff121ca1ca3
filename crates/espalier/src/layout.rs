mod engines;

// Public re-export of the engine contract and factory for easier access
pub use engines::{LayoutEngine, create_engine};
